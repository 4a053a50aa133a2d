//! Operating modes and output availability
//!
//! The BNO055 multiplexes its output registers by operating mode (datasheet
//! table 3-3). Only the sensors a mode enables produce data; everything else
//! reads as stale or zero. Fusion outputs (euler angles, quaternion, linear
//! acceleration, gravity) exist only in the five fusion modes.
//!
//! | Mode | Accel | Mag | Gyro | Fusion |
//! |---|---|---|---|---|
//! | `Config` | - | - | - | - |
//! | `AccOnly` | X | - | - | - |
//! | `MagOnly` | - | X | - | - |
//! | `GyroOnly` | - | - | X | - |
//! | `AccMag` | X | X | - | - |
//! | `AccGyro` | X | - | X | - |
//! | `MagGyro` | - | X | X | - |
//! | `Amg` | X | X | X | - |
//! | `ImuPlus` | X | - | X | relative |
//! | `Compass` | X | X | - | absolute |
//! | `M4g` | X | X | - | relative |
//! | `NdofFmcOff` | X | X | X | absolute |
//! | `Ndof` | X | X | X | absolute |

/// Settle time after switching into configuration mode (datasheet table 3-6)
pub const CONFIG_MODE_SWITCH_MS: u32 = 20;

/// Settle time after switching from configuration mode into any other mode
pub const OPERATING_MODE_SWITCH_MS: u32 = 10;

/// BNO055 operating mode (`OPR_MODE` register, low nibble)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Configuration mode - all outputs reset, fusion halted
    Config = 0x00,
    /// Accelerometer only
    AccOnly = 0x01,
    /// Magnetometer only
    MagOnly = 0x02,
    /// Gyroscope only
    GyroOnly = 0x03,
    /// Accelerometer and magnetometer
    AccMag = 0x04,
    /// Accelerometer and gyroscope
    AccGyro = 0x05,
    /// Magnetometer and gyroscope
    MagGyro = 0x06,
    /// All three sensors, no fusion
    Amg = 0x07,
    /// Relative orientation from accelerometer and gyroscope
    ImuPlus = 0x08,
    /// Absolute heading from accelerometer and magnetometer
    Compass = 0x09,
    /// Relative orientation from accelerometer and magnetometer
    M4g = 0x0A,
    /// 9-DOF absolute orientation, fast magnetometer calibration off
    NdofFmcOff = 0x0B,
    /// 9-DOF absolute orientation (power-on default of this driver)
    #[default]
    Ndof = 0x0C,
}

impl OperatingMode {
    /// Decode the `OPR_MODE` register. Only the low nibble is significant.
    ///
    /// Returns `None` for the undefined codes 0x0D-0x0F.
    #[must_use]
    pub const fn from_register(value: u8) -> Option<Self> {
        match value & 0x0F {
            0x00 => Some(Self::Config),
            0x01 => Some(Self::AccOnly),
            0x02 => Some(Self::MagOnly),
            0x03 => Some(Self::GyroOnly),
            0x04 => Some(Self::AccMag),
            0x05 => Some(Self::AccGyro),
            0x06 => Some(Self::MagGyro),
            0x07 => Some(Self::Amg),
            0x08 => Some(Self::ImuPlus),
            0x09 => Some(Self::Compass),
            0x0A => Some(Self::M4g),
            0x0B => Some(Self::NdofFmcOff),
            0x0C => Some(Self::Ndof),
            _ => None,
        }
    }

    /// Register value of this mode
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// True for the modes in which the fusion co-processor runs
    #[must_use]
    pub const fn is_fusion(self) -> bool {
        matches!(
            self,
            Self::ImuPlus | Self::Compass | Self::M4g | Self::NdofFmcOff | Self::Ndof
        )
    }

    /// True if acceleration output is produced in this mode
    #[must_use]
    pub const fn has_accelerometer(self) -> bool {
        !matches!(
            self,
            Self::Config | Self::MagOnly | Self::GyroOnly | Self::MagGyro
        )
    }

    /// True if magnetic field output is produced in this mode
    #[must_use]
    pub const fn has_magnetometer(self) -> bool {
        !matches!(
            self,
            Self::Config | Self::AccOnly | Self::GyroOnly | Self::AccGyro | Self::ImuPlus
        )
    }

    /// True if angular velocity output is produced in this mode
    #[must_use]
    pub const fn has_gyroscope(self) -> bool {
        !matches!(
            self,
            Self::Config
                | Self::AccOnly
                | Self::MagOnly
                | Self::AccMag
                | Self::Compass
                | Self::M4g
        )
    }

    /// True if euler, quaternion, linear acceleration and gravity outputs are
    /// produced in this mode
    #[must_use]
    pub const fn has_fusion_output(self) -> bool {
        self.is_fusion()
    }

    /// Delay required after writing this mode to `OPR_MODE`
    #[must_use]
    pub const fn switch_delay_ms(self) -> u32 {
        match self {
            Self::Config => CONFIG_MODE_SWITCH_MS,
            _ => OPERATING_MODE_SWITCH_MS,
        }
    }
}
