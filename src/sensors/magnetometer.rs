//! Magnetometer configuration types
//!
//! Field encodings of `MAG_CONFIG` (page 1, 0x09).

/// Magnetometer output data rate (`MAG_CONFIG` bits 2:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagDataRate {
    /// 2 Hz
    Hz2 = 0,
    /// 6 Hz
    Hz6 = 1,
    /// 8 Hz
    Hz8 = 2,
    /// 10 Hz
    Hz10 = 3,
    /// 15 Hz
    Hz15 = 4,
    /// 20 Hz (power-on default)
    #[default]
    Hz20 = 5,
    /// 25 Hz
    Hz25 = 6,
    /// 30 Hz
    Hz30 = 7,
}

impl MagDataRate {
    /// Decode the 3-bit field value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x07 {
            0 => Self::Hz2,
            1 => Self::Hz6,
            2 => Self::Hz8,
            3 => Self::Hz10,
            4 => Self::Hz15,
            5 => Self::Hz20,
            6 => Self::Hz25,
            _ => Self::Hz30,
        }
    }

    /// Get the data rate in Hz
    #[must_use]
    pub const fn rate_hz(self) -> u8 {
        match self {
            Self::Hz2 => 2,
            Self::Hz6 => 6,
            Self::Hz8 => 8,
            Self::Hz10 => 10,
            Self::Hz15 => 15,
            Self::Hz20 => 20,
            Self::Hz25 => 25,
            Self::Hz30 => 30,
        }
    }
}

/// Magnetometer operation mode (`MAG_CONFIG` bits 4:3)
///
/// Trades repetitions per sample (noise) against current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOperationMode {
    /// Low power
    LowPower = 0,
    /// Regular (power-on default)
    #[default]
    Regular = 1,
    /// Enhanced regular
    EnhancedRegular = 2,
    /// High accuracy
    HighAccuracy = 3,
}

impl MagOperationMode {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::LowPower,
            1 => Self::Regular,
            2 => Self::EnhancedRegular,
            _ => Self::HighAccuracy,
        }
    }
}

/// Magnetometer power mode (`MAG_CONFIG` bits 6:5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagPowerMode {
    /// Normal
    Normal = 0,
    /// Sleep
    Sleep = 1,
    /// Suspend
    Suspend = 2,
    /// Forced measurements (power-on default)
    #[default]
    Force = 3,
}

impl MagPowerMode {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::Normal,
            1 => Self::Sleep,
            2 => Self::Suspend,
            _ => Self::Force,
        }
    }
}

/// Magnetometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    /// Output data rate
    pub data_rate: MagDataRate,
    /// Operation mode
    pub operation_mode: MagOperationMode,
    /// Power mode
    pub power_mode: MagPowerMode,
}

impl MagConfig {
    /// Encode into a `MAG_CONFIG` register value
    #[must_use]
    pub const fn bits(&self) -> u8 {
        (self.power_mode as u8) << 5 | (self.operation_mode as u8) << 3 | self.data_rate as u8
    }
}
