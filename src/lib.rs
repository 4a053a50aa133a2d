#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod calibration;
pub mod data;
pub mod device;
pub mod interface;
pub mod mode;
pub mod registers;
pub mod remap;
pub mod sensors;

// Re-export main types
pub use calibration::{CalibrationProfile, CalibrationStatus};
pub use data::{Quaternion, ScaledRegister, Vector3};
pub use device::{
    Bno055Driver, DriverConfig, PowerMode, ResetStrategy, SelfTestResult, SystemError,
    SystemStatus,
};
pub use interface::{
    I2cError, I2cInterface, ResponseStatus, SerialError, SerialInterface, Transport,
};
pub use mode::OperatingMode;
pub use remap::{Axis, AxisRemap, AxisSign, Placement};
pub use sensors::{
    AccelBandwidth, AccelConfig, AccelPowerMode, AccelRange, GyroBandwidth, GyroConfig,
    GyroPowerMode, GyroRange, MagConfig, MagDataRate, MagOperationMode, MagPowerMode,
};

/// BNO055 I2C address when the COM3 pin is low (default: 0x28)
///
/// Most breakout boards tie COM3 low. Use [`I2cInterface::default()`]
/// for this configuration.
pub const I2C_ADDRESS_COM3_LOW: u8 = 0x28;

/// BNO055 I2C address when the COM3 pin is high (alternative: 0x29)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_COM3_HIGH: u8 = 0x29;

/// Expected value of the `CHIP_ID` register
pub const CHIP_ID_VALUE: u8 = 0xA0;

/// Register page identifiers
///
/// The BNO055 reuses addresses 0x00-0x7F across two pages selected through
/// `PAGE_ID` (0x07). Data and system registers live on page 0, raw sensor
/// configuration on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Page 0 - Data output, status, mode and calibration registers
    Page0 = 0,
    /// Page 1 - Accelerometer, gyroscope and magnetometer configuration
    Page1 = 1,
}

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `CHIP_ID` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Operation is not permitted in the current operating mode
    InvalidMode(OperatingMode),
    /// `OPR_MODE` held a value that is not a defined operating mode
    InvalidModeValue(u8),
    /// Invalid configuration parameter or undefined field value
    InvalidConfig,
    /// Device did not report its chip ID again after a reset
    ResetTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
