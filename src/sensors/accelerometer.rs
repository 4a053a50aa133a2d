//! Accelerometer configuration types
//!
//! Field encodings of `ACC_CONFIG` (page 1, 0x08). The fusion firmware owns
//! this register in fusion modes, so the values only apply in the non-fusion
//! modes.

/// Accelerometer g range (`ACC_CONFIG` bits 1:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// ±2g
    G2 = 0,
    /// ±4g (power-on default)
    #[default]
    G4 = 1,
    /// ±8g
    G8 = 2,
    /// ±16g
    G16 = 3,
}

impl AccelRange {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::G2,
            1 => Self::G4,
            2 => Self::G8,
            _ => Self::G16,
        }
    }
}

/// Accelerometer bandwidth (`ACC_CONFIG` bits 4:2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelBandwidth {
    /// 7.81 Hz
    Hz7_81 = 0,
    /// 15.63 Hz
    Hz15_63 = 1,
    /// 31.25 Hz
    Hz31_25 = 2,
    /// 62.5 Hz (power-on default)
    #[default]
    Hz62_5 = 3,
    /// 125 Hz
    Hz125 = 4,
    /// 250 Hz
    Hz250 = 5,
    /// 500 Hz
    Hz500 = 6,
    /// 1000 Hz
    Hz1000 = 7,
}

impl AccelBandwidth {
    /// Decode the 3-bit field value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x07 {
            0 => Self::Hz7_81,
            1 => Self::Hz15_63,
            2 => Self::Hz31_25,
            3 => Self::Hz62_5,
            4 => Self::Hz125,
            5 => Self::Hz250,
            6 => Self::Hz500,
            _ => Self::Hz1000,
        }
    }

    /// Get the bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> f32 {
        match self {
            Self::Hz7_81 => 7.81,
            Self::Hz15_63 => 15.63,
            Self::Hz31_25 => 31.25,
            Self::Hz62_5 => 62.5,
            Self::Hz125 => 125.0,
            Self::Hz250 => 250.0,
            Self::Hz500 => 500.0,
            Self::Hz1000 => 1000.0,
        }
    }
}

/// Accelerometer power mode (`ACC_CONFIG` bits 7:5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelPowerMode {
    /// Normal operation (power-on default)
    #[default]
    Normal = 0,
    /// Suspend
    Suspend = 1,
    /// Low power 1
    LowPower1 = 2,
    /// Standby
    Standby = 3,
    /// Low power 2
    LowPower2 = 4,
    /// Deep suspend
    DeepSuspend = 5,
}

impl AccelPowerMode {
    /// Decode the 3-bit field value, `None` for the reserved codes 6 and 7
    #[must_use]
    pub const fn from_bits(value: u8) -> Option<Self> {
        match value & 0x07 {
            0 => Some(Self::Normal),
            1 => Some(Self::Suspend),
            2 => Some(Self::LowPower1),
            3 => Some(Self::Standby),
            4 => Some(Self::LowPower2),
            5 => Some(Self::DeepSuspend),
            _ => None,
        }
    }
}

/// Accelerometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Full-scale range
    pub range: AccelRange,
    /// Filter bandwidth
    pub bandwidth: AccelBandwidth,
    /// Power mode
    pub power_mode: AccelPowerMode,
}

impl AccelConfig {
    /// Encode into an `ACC_CONFIG` register value
    #[must_use]
    pub const fn bits(&self) -> u8 {
        (self.power_mode as u8) << 5 | (self.bandwidth as u8) << 2 | self.range as u8
    }
}
