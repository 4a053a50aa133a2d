//! Register definitions for the BNO055
//!
//! This module declares the single-byte configuration and status registers of
//! the BNO055. The chip splits its address space into two pages selected via
//! `PAGE_ID` (0x07), which is mapped on both pages.
//!
//! ## Page Architecture
//! - **Page 0**: Chip identity, sensor output data, calibration status,
//!   operating/power mode, axis remap and calibration offsets
//! - **Page 1**: Accelerometer, magnetometer and gyroscope configuration
//!
//! Multi-byte output blocks (vectors, quaternion, offsets) are not declared here;
//! the driver reads them as contiguous little-endian blocks through the
//! interface. The same goes for `CALIB_STAT` and the axis map registers, whose
//! bit layouts live in [`CalibrationStatus`](crate::CalibrationStatus) and
//! [`AxisRemap`](crate::AxisRemap). Page 1 registers share addresses with page 0 data registers and use
//! `ALLOW_ADDRESS_OVERLAP = true`.

device_driver::create_device!(
    device_name: Bno055,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        // ==================== PAGE 0 REGISTERS ====================

        /// CHIP_ID - Chip Identification (Page 0, 0x00)
        /// Expected value: 0xA0
        register ChipId {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// Chip ID (should read 0xA0)
            chip_id: uint = 0..8,
        },

        /// PAGE_ID - Page Select (Page 0 and Page 1, 0x07)
        register PageId {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            /// Selected register page (0 or 1)
            page_id: uint = 0..8,
        },

        /// TEMP - Temperature (Page 0, 0x34)
        /// Two's complement, 1 LSB = 1 degC in default units
        register Temp {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;

            /// Raw temperature
            temp: uint = 0..8,
        },

        /// ST_RESULT - Power-on Self Test Result (Page 0, 0x36)
        register StResult {
            const ADDRESS = 0x36;
            const SIZE_BITS = 8;

            /// Accelerometer self test passed
            st_acc: bool = 0,
            /// Magnetometer self test passed
            st_mag: bool = 1,
            /// Gyroscope self test passed
            st_gyr: bool = 2,
            /// Microcontroller self test passed
            st_mcu: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// SYS_STATUS - System Status (Page 0, 0x39)
        register SysStatus {
            const ADDRESS = 0x39;
            const SIZE_BITS = 8;

            /// System status code (0 = idle ... 6 = running without fusion)
            sys_status: uint = 0..8,
        },

        /// SYS_ERR - System Error (Page 0, 0x3A)
        register SysErr {
            const ADDRESS = 0x3A;
            const SIZE_BITS = 8;

            /// System error code (valid when `SYS_STATUS` reports an error)
            sys_err: uint = 0..8,
        },

        /// OPR_MODE - Operating Mode (Page 0, 0x3D)
        register OprMode {
            const ADDRESS = 0x3D;
            const SIZE_BITS = 8;

            /// Operating mode (0x00 = CONFIG ... 0x0C = NDOF)
            operation_mode: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// PWR_MODE - Power Mode (Page 0, 0x3E)
        register PwrMode {
            const ADDRESS = 0x3E;
            const SIZE_BITS = 8;

            /// Power mode (0 = normal, 1 = low power, 2 = suspend)
            power_mode: uint = 0..2,
            reserved_7_2: uint = 2..8,
        },

        /// SYS_TRIGGER - System Trigger (Page 0, 0x3F)
        register SysTrigger {
            const ADDRESS = 0x3F;
            const SIZE_BITS = 8;

            /// Trigger self test
            self_test: bool = 0,
            reserved_4_1: uint = 1..5,
            /// Reset system (self-clearing)
            rst_sys: bool = 5,
            /// Reset interrupt status
            rst_int: bool = 6,
            /// Use external 32kHz crystal
            clk_sel: bool = 7,
        },

        // ==================== PAGE 1 REGISTERS ====================
        // Raw sensor configuration. Writes only take effect in non-fusion modes.

        /// ACC_CONFIG - Accelerometer Configuration (Page 1, 0x08)
        register AccConfig {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// G range (0 = 2g, 1 = 4g, 2 = 8g, 3 = 16g)
            acc_range: uint = 0..2,
            /// Bandwidth (0 = 7.81Hz ... 7 = 1000Hz)
            acc_bandwidth: uint = 2..5,
            /// Operation mode (0 = normal ... 5 = deep suspend)
            acc_power_mode: uint = 5..8,
        },

        /// MAG_CONFIG - Magnetometer Configuration (Page 1, 0x09)
        register MagConfig {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Data output rate (0 = 2Hz ... 7 = 30Hz)
            mag_data_rate: uint = 0..3,
            /// Operation mode (0 = low power ... 3 = high accuracy)
            mag_operation_mode: uint = 3..5,
            /// Power mode (0 = normal ... 3 = force mode)
            mag_power_mode: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// GYR_CONFIG_0 - Gyroscope Range and Bandwidth (Page 1, 0x0A)
        register GyrRangeConfig {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Range (0 = 2000dps ... 4 = 125dps)
            gyr_range: uint = 0..3,
            /// Bandwidth (0 = 523Hz ... 7 = 32Hz)
            gyr_bandwidth: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// GYR_CONFIG_1 - Gyroscope Power Mode (Page 1, 0x0B)
        register GyrPowerConfig {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Power mode (0 = normal ... 4 = advanced power save)
            gyr_power_mode: uint = 0..3,
            reserved_7_3: uint = 3..8,
        }
    }
);

// Re-export commonly used types for convenience
pub use Bno055 as RegisterDevice;

/// Register addresses of the blocks read directly through the interface
pub mod address {
    /// Accelerometer data, X LSB (Page 0)
    pub const ACC_DATA: u8 = 0x08;
    /// Magnetometer data, X LSB (Page 0)
    pub const MAG_DATA: u8 = 0x0E;
    /// Gyroscope data, X LSB (Page 0)
    pub const GYR_DATA: u8 = 0x14;
    /// Euler heading LSB (Page 0)
    pub const EUL_DATA: u8 = 0x1A;
    /// Quaternion W LSB (Page 0)
    pub const QUA_DATA: u8 = 0x20;
    /// Linear acceleration X LSB (Page 0)
    pub const LIA_DATA: u8 = 0x28;
    /// Gravity vector X LSB (Page 0)
    pub const GRV_DATA: u8 = 0x2E;
    /// Calibration status register (Page 0)
    pub const CALIB_STAT: u8 = 0x35;
    /// Axis map configuration (Page 0)
    pub const AXIS_MAP_CONFIG: u8 = 0x41;
    /// Axis map sign (Page 0)
    pub const AXIS_MAP_SIGN: u8 = 0x42;
    /// Accelerometer offset X LSB (Page 0), start of the calibration profile block
    pub const ACC_OFFSET: u8 = 0x55;
    /// Magnetometer offset X LSB (Page 0)
    pub const MAG_OFFSET: u8 = 0x5B;
    /// Gyroscope offset X LSB (Page 0)
    pub const GYR_OFFSET: u8 = 0x61;
    /// Accelerometer radius LSB (Page 0)
    pub const ACC_RADIUS: u8 = 0x67;
    /// Magnetometer radius LSB (Page 0)
    pub const MAG_RADIUS: u8 = 0x69;
}
