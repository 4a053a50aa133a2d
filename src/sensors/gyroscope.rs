//! Gyroscope configuration types
//!
//! Field encodings of `GYR_CONFIG_0` (page 1, 0x0A: range and bandwidth) and
//! `GYR_CONFIG_1` (page 1, 0x0B: power mode).

/// Gyroscope full-scale range (`GYR_CONFIG_0` bits 2:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±2000 dps (power-on default)
    #[default]
    Dps2000 = 0,
    /// ±1000 dps
    Dps1000 = 1,
    /// ±500 dps
    Dps500 = 2,
    /// ±250 dps
    Dps250 = 3,
    /// ±125 dps
    Dps125 = 4,
}

impl GyroRange {
    /// Decode the 3-bit field value, `None` for the reserved codes 5-7
    #[must_use]
    pub const fn from_bits(value: u8) -> Option<Self> {
        match value & 0x07 {
            0 => Some(Self::Dps2000),
            1 => Some(Self::Dps1000),
            2 => Some(Self::Dps500),
            3 => Some(Self::Dps250),
            4 => Some(Self::Dps125),
            _ => None,
        }
    }

    /// Get the maximum rate in degrees per second
    #[must_use]
    pub const fn max_dps(self) -> u16 {
        match self {
            Self::Dps2000 => 2000,
            Self::Dps1000 => 1000,
            Self::Dps500 => 500,
            Self::Dps250 => 250,
            Self::Dps125 => 125,
        }
    }
}

/// Gyroscope filter bandwidth (`GYR_CONFIG_0` bits 5:3)
///
/// The codes are not ordered by frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroBandwidth {
    /// 523 Hz
    Hz523 = 0,
    /// 230 Hz
    Hz230 = 1,
    /// 116 Hz
    Hz116 = 2,
    /// 47 Hz
    Hz47 = 3,
    /// 23 Hz
    Hz23 = 4,
    /// 12 Hz
    Hz12 = 5,
    /// 64 Hz
    Hz64 = 6,
    /// 32 Hz (power-on default)
    #[default]
    Hz32 = 7,
}

impl GyroBandwidth {
    /// Decode the 3-bit field value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x07 {
            0 => Self::Hz523,
            1 => Self::Hz230,
            2 => Self::Hz116,
            3 => Self::Hz47,
            4 => Self::Hz23,
            5 => Self::Hz12,
            6 => Self::Hz64,
            _ => Self::Hz32,
        }
    }

    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz523 => 523,
            Self::Hz230 => 230,
            Self::Hz116 => 116,
            Self::Hz47 => 47,
            Self::Hz23 => 23,
            Self::Hz12 => 12,
            Self::Hz64 => 64,
            Self::Hz32 => 32,
        }
    }
}

/// Gyroscope power mode (`GYR_CONFIG_1` bits 2:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroPowerMode {
    /// Normal operation (power-on default)
    #[default]
    Normal = 0,
    /// Fast power up
    FastPowerUp = 1,
    /// Deep suspend
    DeepSuspend = 2,
    /// Suspend
    Suspend = 3,
    /// Advanced power save
    AdvancedPowerSave = 4,
}

impl GyroPowerMode {
    /// Decode the 3-bit field value, `None` for the reserved codes 5-7
    #[must_use]
    pub const fn from_bits(value: u8) -> Option<Self> {
        match value & 0x07 {
            0 => Some(Self::Normal),
            1 => Some(Self::FastPowerUp),
            2 => Some(Self::DeepSuspend),
            3 => Some(Self::Suspend),
            4 => Some(Self::AdvancedPowerSave),
            _ => None,
        }
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range
    pub range: GyroRange,
    /// Filter bandwidth
    pub bandwidth: GyroBandwidth,
    /// Power mode
    pub power_mode: GyroPowerMode,
}

impl GyroConfig {
    /// Encode the `GYR_CONFIG_0` register value
    #[must_use]
    pub const fn range_bits(&self) -> u8 {
        (self.bandwidth as u8) << 3 | self.range as u8
    }

    /// Encode the `GYR_CONFIG_1` register value
    #[must_use]
    pub const fn power_bits(&self) -> u8 {
        self.power_mode as u8
    }
}
