//! High-level driver API for the BNO055
//!
//! This module provides the user-facing interface to the BNO055: identity check
//! and initialisation, operating mode control, mode-gated sensor output, the
//! calibration and axis remap registers, and the page-1 sensor configuration.
//!
//! The operating mode and register page are device state and are never cached.
//! Every accessor that depends on the mode reads `OPR_MODE` first.

use crate::calibration::{CalibrationProfile, CalibrationStatus, PROFILE_LEN};
use crate::data::{decode_le_i16, encode_le_i16, Quaternion, ScaledRegister, Vector3};
use crate::mode::{OperatingMode, OPERATING_MODE_SWITCH_MS};
use crate::registers::{address, RegisterDevice};
use crate::interface::Transport;
use crate::remap::AxisRemap;
use crate::sensors::{
    AccelBandwidth, AccelConfig, AccelPowerMode, AccelRange, GyroBandwidth, GyroConfig,
    GyroPowerMode, GyroRange, MagConfig, MagDataRate, MagOperationMode, MagPowerMode,
};
use crate::{Error, Page, CHIP_ID_VALUE};

use device_driver::RegisterInterface;
use embedded_hal::delay::DelayNs;

/// Wait after a system reset for [`ResetStrategy::FixedDelay`] (650 ms typical)
pub const RESET_DELAY_MS: u32 = 700;

/// Wait budget for the chip ID to reappear with [`ResetStrategy::PollChipId`]
///
/// Time spent in failed reads counts against the budget. The last poll may
/// overrun it by one poll interval plus one failed read.
pub const RESET_TIMEOUT_MS: u32 = 1000;

/// Interval between chip ID reads with [`ResetStrategy::PollChipId`]
pub const RESET_POLL_INTERVAL_MS: u32 = 10;

/// How to wait for the chip after a system reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetStrategy {
    /// Sleep for [`RESET_DELAY_MS`]
    #[default]
    FixedDelay,
    /// Read `CHIP_ID` every [`RESET_POLL_INTERVAL_MS`] until it reads 0xA0,
    /// failing with [`Error::ResetTimeout`] once about [`RESET_TIMEOUT_MS`]
    /// have elapsed
    PollChipId,
}

/// Driver initialisation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Operating mode entered at the end of initialisation
    pub mode: OperatingMode,
    /// Reset completion strategy
    pub reset_strategy: ResetStrategy,
    /// Clock the chip from an external 32 kHz crystal
    pub external_crystal: bool,
    /// Accelerometer configuration written during initialisation
    pub accel: Option<AccelConfig>,
    /// Gyroscope configuration written during initialisation
    pub gyro: Option<GyroConfig>,
    /// Magnetometer configuration written during initialisation
    pub mag: Option<MagConfig>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mode: OperatingMode::Ndof,
            reset_strategy: ResetStrategy::FixedDelay,
            external_crystal: false,
            accel: None,
            gyro: None,
            mag: None,
        }
    }
}

/// Chip power mode (`PWR_MODE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// All enabled sensors always on
    #[default]
    Normal = 0,
    /// Sensors sleep until motion is detected
    LowPower = 1,
    /// Sensors and MCU paused
    Suspend = 2,
}

impl PowerMode {
    /// Decode the `PWR_MODE` field, `None` for the reserved code 3
    #[must_use]
    pub const fn from_bits(value: u8) -> Option<Self> {
        match value & 0x03 {
            0 => Some(Self::Normal),
            1 => Some(Self::LowPower),
            2 => Some(Self::Suspend),
            _ => None,
        }
    }
}

/// System status (`SYS_STATUS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemStatus {
    /// System idle
    Idle = 0,
    /// System error, see [`SystemError`]
    SystemError = 1,
    /// Initializing peripherals
    InitializingPeripherals = 2,
    /// System initialization
    SystemInitialization = 3,
    /// Executing self test
    ExecutingSelfTest = 4,
    /// Sensor fusion algorithm running
    RunningWithFusion = 5,
    /// System running without fusion algorithm
    RunningWithoutFusion = 6,
}

impl SystemStatus {
    /// Decode the `SYS_STATUS` register
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Idle),
            1 => Some(Self::SystemError),
            2 => Some(Self::InitializingPeripherals),
            3 => Some(Self::SystemInitialization),
            4 => Some(Self::ExecutingSelfTest),
            5 => Some(Self::RunningWithFusion),
            6 => Some(Self::RunningWithoutFusion),
            _ => None,
        }
    }
}

/// System error (`SYS_ERR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemError {
    /// No error
    NoError = 0x00,
    /// Peripheral initialization error
    PeripheralInitialization = 0x01,
    /// System initialization error
    SystemInitialization = 0x02,
    /// Self test result failed
    SelfTestFailed = 0x03,
    /// Register map value out of range
    RegisterValueOutOfRange = 0x04,
    /// Register map address out of range
    RegisterAddressOutOfRange = 0x05,
    /// Register map write error
    RegisterWrite = 0x06,
    /// Low power mode not available for the selected operating mode
    LowPowerModeNotAvailable = 0x07,
    /// Accelerometer power mode not available
    AccelPowerModeNotAvailable = 0x08,
    /// Fusion algorithm configuration error
    FusionConfiguration = 0x09,
    /// Sensor configuration error
    SensorConfiguration = 0x0A,
}

impl SystemError {
    /// Decode the `SYS_ERR` register
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::NoError),
            0x01 => Some(Self::PeripheralInitialization),
            0x02 => Some(Self::SystemInitialization),
            0x03 => Some(Self::SelfTestFailed),
            0x04 => Some(Self::RegisterValueOutOfRange),
            0x05 => Some(Self::RegisterAddressOutOfRange),
            0x06 => Some(Self::RegisterWrite),
            0x07 => Some(Self::LowPowerModeNotAvailable),
            0x08 => Some(Self::AccelPowerModeNotAvailable),
            0x09 => Some(Self::FusionConfiguration),
            0x0A => Some(Self::SensorConfiguration),
            _ => None,
        }
    }
}

/// Power-on self test result (`ST_RESULT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct SelfTestResult {
    /// Accelerometer passed
    pub accelerometer: bool,
    /// Magnetometer passed
    pub magnetometer: bool,
    /// Gyroscope passed
    pub gyroscope: bool,
    /// Microcontroller passed
    pub microcontroller: bool,
}

impl SelfTestResult {
    /// True if every component passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.accelerometer && self.magnetometer && self.gyroscope && self.microcontroller
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn size_bits(len: usize) -> u32 {
    (len * 8) as u32
}

/// Main driver for the BNO055
pub struct Bno055Driver<I, D> {
    device: RegisterDevice<I>,
    delay: D,
}

impl<I, D> Bno055Driver<I, D>
where
    I: Transport,
    D: DelayNs,
{
    /// Create and initialise a driver with [`DriverConfig::default()`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `CHIP_ID` register does not read 0xA0
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut imu = Bno055Driver::new(interface, delay)?;
    /// let heading = imu.euler_angles()?;
    /// ```
    pub fn new(interface: I, delay: D) -> Result<Self, Error<I::Error>> {
        Self::with_config(interface, delay, DriverConfig::default())
    }

    /// Create and initialise a driver
    ///
    /// Initialisation runs in a fixed order:
    /// 1. Verify `CHIP_ID` (nothing is written on a mismatch)
    /// 2. System reset, see [`reset`](Self::reset)
    /// 3. Normal power mode
    /// 4. Register page 0
    /// 5. Clear `SYS_TRIGGER`, selecting the clock source
    /// 6. Optional accelerometer, gyroscope and magnetometer configuration
    /// 7. Switch to `config.mode`
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partially initialised driver is
    /// returned.
    pub fn with_config(
        interface: I,
        delay: D,
        config: DriverConfig,
    ) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            delay,
        };

        let chip_id = driver.chip_id()?;
        if chip_id != CHIP_ID_VALUE {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Unexpected chip ID 0x{:02X} (expected 0x{:02X})",
                chip_id,
                CHIP_ID_VALUE
            );
            return Err(Error::InvalidDevice(chip_id));
        }

        driver.reset(config.reset_strategy)?;

        driver.device.pwr_mode().write(|w| {
            w.set_power_mode(PowerMode::Normal as u8);
        })?;
        driver.select_page(Page::Page0)?;
        driver.device.sys_trigger().write(|w| {
            w.set_clk_sel(config.external_crystal);
        })?;

        if let Some(accel) = config.accel {
            driver.set_accel_config(accel)?;
        }
        if let Some(gyro) = config.gyro {
            driver.set_gyro_config(gyro)?;
        }
        if let Some(mag) = config.mag {
            driver.set_mag_config(mag)?;
        }

        driver.set_mode(config.mode)?;
        driver.delay.delay_ms(OPERATING_MODE_SWITCH_MS);

        Ok(driver)
    }

    /// Reset the chip through `SYS_TRIGGER`
    ///
    /// Switches to configuration mode, triggers a system reset and waits for
    /// the chip according to `strategy`. The chip comes back in configuration
    /// mode with every register at its power-on value.
    ///
    /// The chip may reset before acknowledging the trigger write, so a
    /// link-level failure on that single write (see
    /// [`Transport::is_link_error`]) is ignored. A write the chip explicitly
    /// rejects is still an error.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails outside the trigger write, if
    /// the chip rejects the trigger write, or [`Error::ResetTimeout`] if
    /// polling never sees the chip ID.
    pub fn reset(&mut self, strategy: ResetStrategy) -> Result<(), Error<I::Error>> {
        self.set_mode(OperatingMode::Config)?;

        if let Err(e) = self.device.sys_trigger().write(|w| {
            w.set_rst_sys(true);
        }) {
            if !I::is_link_error(&e) {
                return Err(Error::Bus(e));
            }
            #[cfg(feature = "defmt")]
            defmt::warn!("Reset trigger write failed, assuming the chip is rebooting");
        }

        match strategy {
            ResetStrategy::FixedDelay => {
                self.delay.delay_ms(RESET_DELAY_MS);
                Ok(())
            }
            ResetStrategy::PollChipId => {
                let mut elapsed = 0;
                while elapsed < RESET_TIMEOUT_MS {
                    self.delay.delay_ms(RESET_POLL_INTERVAL_MS);
                    elapsed += RESET_POLL_INTERVAL_MS;
                    match self.chip_id() {
                        Ok(CHIP_ID_VALUE) => return Ok(()),
                        Ok(_) => {}
                        // Reads against a rebooting chip block for their full window
                        Err(_) => elapsed += I::FAILED_READ_MS,
                    }
                }
                Err(Error::ResetTimeout)
            }
        }
    }

    /// Write `PAGE_ID`
    ///
    /// The driver returns to page 0 after every page-1 access, so this is only
    /// needed to recover after an external party changed the page.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn select_page(&mut self, page: Page) -> Result<(), Error<I::Error>> {
        self.device.page_id().write(|w| {
            w.set_page_id(page as u8);
        })?;
        Ok(())
    }

    /// Run `f` with `page` selected, then select page 0 even if `f` failed
    fn with_page<T, F>(&mut self, page: Page, f: F) -> Result<T, Error<I::Error>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<I::Error>>,
    {
        self.select_page(page)?;
        let result = f(self);
        let restore = self.select_page(Page::Page0);
        let value = result?;
        restore?;
        Ok(value)
    }

    /// Read the `CHIP_ID` register
    ///
    /// Should return 0xA0 for a BNO055
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn chip_id(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.chip_id().read()?;
        Ok(reg.chip_id())
    }

    // ==================== Mode control ====================

    /// Read the current operating mode from `OPR_MODE`
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or
    /// [`Error::InvalidModeValue`] for the undefined codes 0x0D-0x0F.
    pub fn mode(&mut self) -> Result<OperatingMode, Error<I::Error>> {
        let value = self.device.opr_mode().read()?.operation_mode();
        OperatingMode::from_register(value).ok_or(Error::InvalidModeValue(value))
    }

    /// Switch the operating mode
    ///
    /// The chip only accepts transitions through configuration mode, so
    /// `Config` is always written first (20 ms settle time), followed by `mode`
    /// itself (10 ms settle time) unless it is `Config`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mode(&mut self, mode: OperatingMode) -> Result<(), Error<I::Error>> {
        self.write_mode(OperatingMode::Config)?;
        if mode != OperatingMode::Config {
            self.write_mode(mode)?;
        }
        Ok(())
    }

    fn write_mode(&mut self, mode: OperatingMode) -> Result<(), Error<I::Error>> {
        self.device.opr_mode().write(|w| {
            w.set_operation_mode(mode.bits());
        })?;
        self.delay.delay_ms(mode.switch_delay_ms());

        #[cfg(feature = "defmt")]
        defmt::debug!("Operating mode set to {}", mode);

        Ok(())
    }

    /// Run `body` in operating mode `mode`, then restore the previous mode
    ///
    /// The previous mode is restored on every exit path. If both `body` and the
    /// restore fail, the error of `body` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the current mode, switching modes or `body`
    /// fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let status = imu.with_mode(OperatingMode::Config, |imu| imu.system_status())?;
    /// ```
    pub fn with_mode<T, F>(&mut self, mode: OperatingMode, body: F) -> Result<T, Error<I::Error>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<I::Error>>,
    {
        let previous = self.mode()?;
        let result = match self.set_mode(mode) {
            Ok(()) => body(self),
            Err(e) => Err(e),
        };
        let restore = self.set_mode(previous);
        let value = result?;
        restore?;
        Ok(value)
    }

    // ==================== Sensor output ====================

    /// Read `N` little-endian samples starting at `start` on page 0
    // Single page-0 registers whose bit layout lives in a codec type
    fn read_byte(&mut self, address: u8) -> Result<u8, Error<I::Error>> {
        let mut value = [0u8];
        self.device.interface.read_register(address, 8, &mut value)?;
        Ok(value[0])
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.device.interface.write_register(address, 8, &[value])?;
        Ok(())
    }

    fn read_samples<const N: usize>(&mut self, start: u8) -> Result<[i16; N], Error<I::Error>> {
        let mut buffer = [0u8; 8];
        let bytes = &mut buffer[..N * 2];
        self.device
            .interface
            .read_register(start, size_bits(N * 2), bytes)?;

        let mut samples = [0i16; N];
        decode_le_i16(bytes, &mut samples);
        Ok(samples)
    }

    fn write_samples(&mut self, start: u8, samples: &[i16]) -> Result<(), Error<I::Error>> {
        let mut buffer = [0u8; 6];
        let bytes = &mut buffer[..samples.len() * 2];
        encode_le_i16(samples, bytes);
        self.device
            .interface
            .write_register(start, size_bits(bytes.len()), bytes)?;
        Ok(())
    }

    fn read_scaled(
        &mut self,
        register: ScaledRegister,
        available: fn(OperatingMode) -> bool,
    ) -> Result<Option<Vector3>, Error<I::Error>> {
        if !available(self.mode()?) {
            return Ok(None);
        }
        let raw = self.read_samples::<3>(register.address())?;
        Ok(Some(Vector3::from_raw(raw, register.scale())))
    }

    /// Read the raw samples of a three-axis output block
    ///
    /// The operating mode is not checked, the registers are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for [`ScaledRegister::Quaternion`] (use
    /// [`read_raw_quaternion`](Self::read_raw_quaternion)), or an error if
    /// communication with the device fails.
    pub fn read_raw_vector(
        &mut self,
        register: ScaledRegister,
    ) -> Result<[i16; 3], Error<I::Error>> {
        if register.count() != 3 {
            return Err(Error::InvalidConfig);
        }
        self.read_samples::<3>(register.address())
    }

    /// Read the raw quaternion samples (w, x, y, z) without checking the mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_raw_quaternion(&mut self) -> Result<[i16; 4], Error<I::Error>> {
        self.read_samples::<4>(ScaledRegister::Quaternion.address())
    }

    /// Chip temperature in °C
    ///
    /// Available in every operating mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature(&mut self) -> Result<i8, Error<I::Error>> {
        let raw = self.device.temp().read()?.temp();
        Ok(i8::from_le_bytes([raw]))
    }

    /// Acceleration in m/s², `None` if the mode disables the accelerometer
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acceleration(&mut self) -> Result<Option<Vector3>, Error<I::Error>> {
        self.read_scaled(ScaledRegister::Acceleration, OperatingMode::has_accelerometer)
    }

    /// Magnetic field in µT, `None` if the mode disables the magnetometer
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn magnetic_field(&mut self) -> Result<Option<Vector3>, Error<I::Error>> {
        self.read_scaled(ScaledRegister::MagneticField, OperatingMode::has_magnetometer)
    }

    /// Angular velocity in rad/s, `None` if the mode disables the gyroscope
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn angular_velocity(&mut self) -> Result<Option<Vector3>, Error<I::Error>> {
        self.read_scaled(ScaledRegister::AngularVelocity, OperatingMode::has_gyroscope)
    }

    /// Euler angles in degrees as (heading, roll, pitch) in (x, y, z)
    ///
    /// `None` outside the fusion modes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn euler_angles(&mut self) -> Result<Option<Vector3>, Error<I::Error>> {
        self.read_scaled(ScaledRegister::EulerAngles, OperatingMode::has_fusion_output)
    }

    /// Orientation quaternion, `None` outside the fusion modes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn quaternion(&mut self) -> Result<Option<Quaternion>, Error<I::Error>> {
        if !self.mode()?.has_fusion_output() {
            return Ok(None);
        }
        let raw = self.read_raw_quaternion()?;
        Ok(Some(Quaternion::from_raw(raw)))
    }

    /// Acceleration without gravity in m/s², `None` outside the fusion modes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn linear_acceleration(&mut self) -> Result<Option<Vector3>, Error<I::Error>> {
        self.read_scaled(
            ScaledRegister::LinearAcceleration,
            OperatingMode::has_fusion_output,
        )
    }

    /// Gravity vector in m/s², `None` outside the fusion modes
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gravity(&mut self) -> Result<Option<Vector3>, Error<I::Error>> {
        self.read_scaled(ScaledRegister::Gravity, OperatingMode::has_fusion_output)
    }

    // ==================== Calibration ====================

    /// Read `CALIB_STAT`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn calibration_status(&mut self) -> Result<CalibrationStatus, Error<I::Error>> {
        let value = self.read_byte(address::CALIB_STAT)?;
        Ok(CalibrationStatus::from_register(value))
    }

    /// True if all four subsystems report full calibration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_fully_calibrated(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.calibration_status()?.is_fully_calibrated())
    }

    fn read_config_samples<const N: usize>(
        &mut self,
        start: u8,
    ) -> Result<[i16; N], Error<I::Error>> {
        self.with_mode(OperatingMode::Config, |d| d.read_samples::<N>(start))
    }

    fn write_config_samples(&mut self, start: u8, samples: &[i16]) -> Result<(), Error<I::Error>> {
        self.with_mode(OperatingMode::Config, |d| d.write_samples(start, samples))
    }

    /// Accelerometer offsets (x, y, z), read in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_offsets(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_config_samples::<3>(address::ACC_OFFSET)
    }

    /// Write the accelerometer offsets in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_offsets(&mut self, offsets: [i16; 3]) -> Result<(), Error<I::Error>> {
        self.write_config_samples(address::ACC_OFFSET, &offsets)
    }

    /// Magnetometer offsets (x, y, z), read in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_offsets(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_config_samples::<3>(address::MAG_OFFSET)
    }

    /// Write the magnetometer offsets in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mag_offsets(&mut self, offsets: [i16; 3]) -> Result<(), Error<I::Error>> {
        self.write_config_samples(address::MAG_OFFSET, &offsets)
    }

    /// Gyroscope offsets (x, y, z), read in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_offsets(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_config_samples::<3>(address::GYR_OFFSET)
    }

    /// Write the gyroscope offsets in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_offsets(&mut self, offsets: [i16; 3]) -> Result<(), Error<I::Error>> {
        self.write_config_samples(address::GYR_OFFSET, &offsets)
    }

    /// Accelerometer radius, read in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_radius(&mut self) -> Result<i16, Error<I::Error>> {
        let [radius] = self.read_config_samples::<1>(address::ACC_RADIUS)?;
        Ok(radius)
    }

    /// Write the accelerometer radius in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_radius(&mut self, radius: i16) -> Result<(), Error<I::Error>> {
        self.write_config_samples(address::ACC_RADIUS, &[radius])
    }

    /// Magnetometer radius, read in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_radius(&mut self) -> Result<i16, Error<I::Error>> {
        let [radius] = self.read_config_samples::<1>(address::MAG_RADIUS)?;
        Ok(radius)
    }

    /// Write the magnetometer radius in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mag_radius(&mut self, radius: i16) -> Result<(), Error<I::Error>> {
        self.write_config_samples(address::MAG_RADIUS, &[radius])
    }

    /// Read all offsets and radii in one configuration-mode scope
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn calibration_profile(&mut self) -> Result<CalibrationProfile, Error<I::Error>> {
        self.with_mode(OperatingMode::Config, |d| {
            let mut bytes = [0u8; PROFILE_LEN];
            d.device.interface.read_register(
                address::ACC_OFFSET,
                size_bits(PROFILE_LEN),
                &mut bytes,
            )?;
            Ok(CalibrationProfile::from_bytes(&bytes))
        })
    }

    /// Restore all offsets and radii in one configuration-mode scope
    ///
    /// The chip applies the values when it leaves configuration mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_calibration_profile(
        &mut self,
        profile: &CalibrationProfile,
    ) -> Result<(), Error<I::Error>> {
        let bytes = profile.to_bytes();
        self.with_mode(OperatingMode::Config, |d| {
            d.device.interface.write_register(
                address::ACC_OFFSET,
                size_bits(PROFILE_LEN),
                &bytes,
            )?;
            Ok(())
        })
    }

    // ==================== Axis remap ====================

    /// Read `AXIS_MAP_CONFIG` and `AXIS_MAP_SIGN`
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] if
    /// an axis field holds the undefined code 3.
    pub fn axis_remap(&mut self) -> Result<AxisRemap, Error<I::Error>> {
        let config = self.read_byte(address::AXIS_MAP_CONFIG)?;
        let sign = self.read_byte(address::AXIS_MAP_SIGN)?;
        AxisRemap::from_registers(config, sign).ok_or(Error::InvalidConfig)
    }

    /// Write the axis remap in configuration mode
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] without touching the device if two axes
    /// share a source axis, or an error if communication fails.
    pub fn set_axis_remap(&mut self, remap: AxisRemap) -> Result<(), Error<I::Error>> {
        if !remap.is_valid() {
            return Err(Error::InvalidConfig);
        }

        self.with_mode(OperatingMode::Config, |d| {
            d.write_byte(address::AXIS_MAP_CONFIG, remap.config_bits())?;
            d.write_byte(address::AXIS_MAP_SIGN, remap.sign_bits())
        })
    }

    // ==================== System ====================

    /// True if the chip is clocked from the external crystal
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn external_crystal(&mut self) -> Result<bool, Error<I::Error>> {
        self.with_mode(OperatingMode::Config, |d| {
            Ok(d.device.sys_trigger().read()?.clk_sel())
        })
    }

    /// Select the external 32 kHz crystal (`true`) or the internal oscillator
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_external_crystal(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.with_mode(OperatingMode::Config, |d| {
            d.device.sys_trigger().write(|w| {
                w.set_clk_sel(enable);
            })?;
            Ok(())
        })?;
        self.delay.delay_ms(OPERATING_MODE_SWITCH_MS);
        Ok(())
    }

    /// Read `PWR_MODE`
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// the reserved code 3.
    pub fn power_mode(&mut self) -> Result<PowerMode, Error<I::Error>> {
        let value = self.device.pwr_mode().read()?.power_mode();
        PowerMode::from_bits(value).ok_or(Error::InvalidConfig)
    }

    /// Write `PWR_MODE` in configuration mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<I::Error>> {
        self.with_mode(OperatingMode::Config, |d| {
            d.device.pwr_mode().write(|w| {
                w.set_power_mode(mode as u8);
            })?;
            Ok(())
        })
    }

    /// Read `SYS_STATUS`
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// an undocumented status code.
    pub fn system_status(&mut self) -> Result<SystemStatus, Error<I::Error>> {
        let code = self.device.sys_status().read()?.sys_status();
        SystemStatus::from_code(code).ok_or(Error::InvalidConfig)
    }

    /// Read `SYS_ERR`
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// an undocumented error code.
    pub fn system_error(&mut self) -> Result<SystemError, Error<I::Error>> {
        let code = self.device.sys_err().read()?.sys_err();
        SystemError::from_code(code).ok_or(Error::InvalidConfig)
    }

    /// Read the power-on self test result
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn self_test_result(&mut self) -> Result<SelfTestResult, Error<I::Error>> {
        let reg = self.device.st_result().read()?;
        Ok(SelfTestResult {
            accelerometer: reg.st_acc(),
            magnetometer: reg.st_mag(),
            gyroscope: reg.st_gyr(),
            microcontroller: reg.st_mcu(),
        })
    }

    // ==================== Sensor configuration (page 1) ====================

    /// Fail with [`Error::InvalidMode`] while the fusion firmware owns the
    /// sensor configuration
    fn ensure_not_fusion(&mut self) -> Result<(), Error<I::Error>> {
        let mode = self.mode()?;
        if mode.is_fusion() {
            return Err(Error::InvalidMode(mode));
        }
        Ok(())
    }

    /// Read the accelerometer configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// a reserved power mode code.
    pub fn accel_config(&mut self) -> Result<AccelConfig, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.acc_config().read()?))?;
        Ok(AccelConfig {
            range: AccelRange::from_bits(reg.acc_range()),
            bandwidth: AccelBandwidth::from_bits(reg.acc_bandwidth()),
            power_mode: AccelPowerMode::from_bits(reg.acc_power_mode())
                .ok_or(Error::InvalidConfig)?,
        })
    }

    /// Write the complete accelerometer configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_accel_config(&mut self, config: AccelConfig) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.acc_config().write(|w| {
                w.set_acc_range(config.range as u8);
                w.set_acc_bandwidth(config.bandwidth as u8);
                w.set_acc_power_mode(config.power_mode as u8);
            })?;
            Ok(())
        })
    }

    /// Accelerometer g range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_range(&mut self) -> Result<AccelRange, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.acc_config().read()?))?;
        Ok(AccelRange::from_bits(reg.acc_range()))
    }

    /// Set the accelerometer g range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.acc_config().modify(|w| {
                w.set_acc_range(range as u8);
            })?;
            Ok(())
        })
    }

    /// Accelerometer bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_bandwidth(&mut self) -> Result<AccelBandwidth, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.acc_config().read()?))?;
        Ok(AccelBandwidth::from_bits(reg.acc_bandwidth()))
    }

    /// Set the accelerometer bandwidth
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_accel_bandwidth(
        &mut self,
        bandwidth: AccelBandwidth,
    ) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.acc_config().modify(|w| {
                w.set_acc_bandwidth(bandwidth as u8);
            })?;
            Ok(())
        })
    }

    /// Accelerometer power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// a reserved code.
    pub fn accel_power_mode(&mut self) -> Result<AccelPowerMode, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.acc_config().read()?))?;
        AccelPowerMode::from_bits(reg.acc_power_mode()).ok_or(Error::InvalidConfig)
    }

    /// Set the accelerometer power mode
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_accel_power_mode(&mut self, mode: AccelPowerMode) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.acc_config().modify(|w| {
                w.set_acc_power_mode(mode as u8);
            })?;
            Ok(())
        })
    }

    /// Read the gyroscope configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// a reserved range or power mode code.
    pub fn gyro_config(&mut self) -> Result<GyroConfig, Error<I::Error>> {
        let (range_reg, power_reg) = self.with_page(Page::Page1, |d| {
            Ok((
                d.device.gyr_range_config().read()?,
                d.device.gyr_power_config().read()?,
            ))
        })?;
        Ok(GyroConfig {
            range: GyroRange::from_bits(range_reg.gyr_range()).ok_or(Error::InvalidConfig)?,
            bandwidth: GyroBandwidth::from_bits(range_reg.gyr_bandwidth()),
            power_mode: GyroPowerMode::from_bits(power_reg.gyr_power_mode())
                .ok_or(Error::InvalidConfig)?,
        })
    }

    /// Write the complete gyroscope configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_gyro_config(&mut self, config: GyroConfig) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.gyr_range_config().write(|w| {
                w.set_gyr_range(config.range as u8);
                w.set_gyr_bandwidth(config.bandwidth as u8);
            })?;
            d.device.gyr_power_config().write(|w| {
                w.set_gyr_power_mode(config.power_mode as u8);
            })?;
            Ok(())
        })
    }

    /// Gyroscope range
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// a reserved code.
    pub fn gyro_range(&mut self) -> Result<GyroRange, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.gyr_range_config().read()?))?;
        GyroRange::from_bits(reg.gyr_range()).ok_or(Error::InvalidConfig)
    }

    /// Set the gyroscope range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.gyr_range_config().modify(|w| {
                w.set_gyr_range(range as u8);
            })?;
            Ok(())
        })
    }

    /// Gyroscope bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyro_bandwidth(&mut self) -> Result<GyroBandwidth, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.gyr_range_config().read()?))?;
        Ok(GyroBandwidth::from_bits(reg.gyr_bandwidth()))
    }

    /// Set the gyroscope bandwidth
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_gyro_bandwidth(&mut self, bandwidth: GyroBandwidth) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.gyr_range_config().modify(|w| {
                w.set_gyr_bandwidth(bandwidth as u8);
            })?;
            Ok(())
        })
    }

    /// Gyroscope power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails, or [`Error::InvalidConfig`] for
    /// a reserved code.
    pub fn gyro_power_mode(&mut self) -> Result<GyroPowerMode, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.gyr_power_config().read()?))?;
        GyroPowerMode::from_bits(reg.gyr_power_mode()).ok_or(Error::InvalidConfig)
    }

    /// Set the gyroscope power mode
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_gyro_power_mode(&mut self, mode: GyroPowerMode) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.gyr_power_config().modify(|w| {
                w.set_gyr_power_mode(mode as u8);
            })?;
            Ok(())
        })
    }

    /// Read the magnetometer configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_config(&mut self) -> Result<MagConfig, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.mag_config().read()?))?;
        Ok(MagConfig {
            data_rate: MagDataRate::from_bits(reg.mag_data_rate()),
            operation_mode: MagOperationMode::from_bits(reg.mag_operation_mode()),
            power_mode: MagPowerMode::from_bits(reg.mag_power_mode()),
        })
    }

    /// Write the complete magnetometer configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_mag_config(&mut self, config: MagConfig) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.mag_config().write(|w| {
                w.set_mag_data_rate(config.data_rate as u8);
                w.set_mag_operation_mode(config.operation_mode as u8);
                w.set_mag_power_mode(config.power_mode as u8);
            })?;
            Ok(())
        })
    }

    /// Magnetometer output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_data_rate(&mut self) -> Result<MagDataRate, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.mag_config().read()?))?;
        Ok(MagDataRate::from_bits(reg.mag_data_rate()))
    }

    /// Set the magnetometer output data rate
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_mag_data_rate(&mut self, rate: MagDataRate) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.mag_config().modify(|w| {
                w.set_mag_data_rate(rate as u8);
            })?;
            Ok(())
        })
    }

    /// Magnetometer operation mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_operation_mode(&mut self) -> Result<MagOperationMode, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.mag_config().read()?))?;
        Ok(MagOperationMode::from_bits(reg.mag_operation_mode()))
    }

    /// Set the magnetometer operation mode
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_mag_operation_mode(
        &mut self,
        mode: MagOperationMode,
    ) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.mag_config().modify(|w| {
                w.set_mag_operation_mode(mode as u8);
            })?;
            Ok(())
        })
    }

    /// Magnetometer power mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn mag_power_mode(&mut self) -> Result<MagPowerMode, Error<I::Error>> {
        let reg = self.with_page(Page::Page1, |d| Ok(d.device.mag_config().read()?))?;
        Ok(MagPowerMode::from_bits(reg.mag_power_mode()))
    }

    /// Set the magnetometer power mode
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] in a fusion mode (nothing is written), or
    /// an error if communication fails.
    pub fn set_mag_power_mode(&mut self, mode: MagPowerMode) -> Result<(), Error<I::Error>> {
        self.ensure_not_fusion()?;
        self.with_page(Page::Page1, |d| {
            d.device.mag_config().modify(|w| {
                w.set_mag_power_mode(mode as u8);
            })?;
            Ok(())
        })
    }
}

impl<I, D> Bno055Driver<I, D> {
    /// Release the interface and delay provider
    pub fn release(self) -> (I, D) {
        (self.device.interface, self.delay)
    }

    /// Get a reference to the underlying register device
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device
    ///
    /// Writes through this handle bypass the mode and page bookkeeping of the
    /// driver.
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}
