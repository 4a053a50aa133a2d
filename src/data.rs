//! Scaled output registers
//!
//! Every output block of the BNO055 is a run of little-endian two's complement
//! samples. [`ScaledRegister`] is the register-scale table used by the driver:
//! it fixes, per quantity, the start address, the sample count and the factor
//! that turns one LSB into the physical unit.
//!
//! The table assumes the power-on `UNIT_SEL` setting (m/s², dps, degrees,
//! Celsius, Windows orientation). The gyroscope block is converted from dps to
//! rad/s by folding `π / 180` into its scale.

use crate::registers::address;

/// 1 m/s² = 100 LSB
pub const ACCEL_SCALE: f32 = 1.0 / 100.0;
/// 1 µT = 16 LSB
pub const MAG_SCALE: f32 = 1.0 / 16.0;
/// 1 dps = 16 LSB, expressed in rad/s per LSB
pub const GYRO_SCALE: f32 = 0.001_090_830_8;
/// 1 degree = 16 LSB
pub const EULER_SCALE: f32 = 1.0 / 16.0;
/// 1 quaternion unit = 2^14 LSB
pub const QUATERNION_SCALE: f32 = 1.0 / 16384.0;

/// Output blocks of the register-scale table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaledRegister {
    /// Acceleration in m/s²
    Acceleration,
    /// Magnetic field in µT
    MagneticField,
    /// Angular velocity in rad/s
    AngularVelocity,
    /// Euler angles in degrees (heading, roll, pitch)
    EulerAngles,
    /// Unit quaternion (w, x, y, z)
    Quaternion,
    /// Linear acceleration (gravity removed) in m/s²
    LinearAcceleration,
    /// Gravity vector in m/s²
    Gravity,
}

impl ScaledRegister {
    /// Address of the first sample byte (page 0)
    #[must_use]
    pub const fn address(self) -> u8 {
        match self {
            Self::Acceleration => address::ACC_DATA,
            Self::MagneticField => address::MAG_DATA,
            Self::AngularVelocity => address::GYR_DATA,
            Self::EulerAngles => address::EUL_DATA,
            Self::Quaternion => address::QUA_DATA,
            Self::LinearAcceleration => address::LIA_DATA,
            Self::Gravity => address::GRV_DATA,
        }
    }

    /// Number of i16 samples in the block
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Quaternion => 4,
            _ => 3,
        }
    }

    /// Block length in bytes
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self.count() * 2
    }

    /// Physical units per LSB
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::Acceleration | Self::LinearAcceleration | Self::Gravity => ACCEL_SCALE,
            Self::MagneticField => MAG_SCALE,
            Self::AngularVelocity => GYRO_SCALE,
            Self::EulerAngles => EULER_SCALE,
            Self::Quaternion => QUATERNION_SCALE,
        }
    }
}

/// Decode little-endian i16 samples from `bytes` into `out`
///
/// Decodes `min(out.len(), bytes.len() / 2)` samples.
pub fn decode_le_i16(bytes: &[u8], out: &mut [i16]) {
    for (sample, chunk) in out.iter_mut().zip(bytes.chunks_exact(2)) {
        *sample = i16::from_le_bytes([chunk[0], chunk[1]]);
    }
}

/// Encode i16 samples as little-endian bytes into `out`
pub fn encode_le_i16(samples: &[i16], out: &mut [u8]) {
    for (chunk, sample) in out.chunks_exact_mut(2).zip(samples) {
        chunk.copy_from_slice(&sample.to_le_bytes());
    }
}

/// Three-axis reading in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    /// X component (heading for euler angles)
    pub x: f32,
    /// Y component (roll for euler angles)
    pub y: f32,
    /// Z component (pitch for euler angles)
    pub z: f32,
}

impl Vector3 {
    /// Create from raw samples and a scale factor (units per LSB)
    #[must_use]
    pub fn from_raw(raw: [i16; 3], scale: f32) -> Self {
        Self {
            x: f32::from(raw[0]) * scale,
            y: f32::from(raw[1]) * scale,
            z: f32::from(raw[2]) * scale,
        }
    }

    /// Get the magnitude of the vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Orientation quaternion as reported by the fusion co-processor
///
/// Components are not renormalised; the chip keeps the magnitude near 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quaternion {
    /// Scalar component
    pub w: f32,
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Quaternion {
    /// Create from raw samples in register order (w, x, y, z)
    #[must_use]
    pub fn from_raw(raw: [i16; 4]) -> Self {
        Self {
            w: f32::from(raw[0]) * QUATERNION_SCALE,
            x: f32::from(raw[1]) * QUATERNION_SCALE,
            y: f32::from(raw[2]) * QUATERNION_SCALE,
            z: f32::from(raw[3]) * QUATERNION_SCALE,
        }
    }

    /// Euclidean norm of the quaternion
    #[must_use]
    pub fn norm(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
