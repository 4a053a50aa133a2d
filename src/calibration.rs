//! Calibration status and calibration profile types
//!
//! The fusion firmware calibrates itself continuously and reports progress in
//! `CALIB_STAT`. The resulting offsets and radii can be read back and restored
//! later, which lets an application skip the calibration motions after a power
//! cycle: the chip keeps them in RAM only.
//!
//! # Example
//!
//! ```ignore
//! // After the device reports full calibration, save the profile
//! if imu.is_fully_calibrated()? {
//!     let profile = imu.calibration_profile()?;
//!     storage.save(&profile.to_bytes());
//! }
//!
//! // On the next boot, restore it
//! let profile = CalibrationProfile::from_bytes(&storage.load());
//! imu.set_calibration_profile(&profile)?;
//! ```

use crate::data::{decode_le_i16, encode_le_i16};

/// Highest calibration level of a subsystem
pub const FULLY_CALIBRATED: u8 = 3;

/// Size of the offset and radius register block (0x55..=0x6A)
pub const PROFILE_LEN: usize = 22;

/// Calibration status of the four subsystems (0 = uncalibrated, 3 = fully calibrated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationStatus {
    /// Fusion system calibration (bits 7:6)
    pub system: u8,
    /// Gyroscope calibration (bits 5:4)
    pub gyroscope: u8,
    /// Accelerometer calibration (bits 3:2)
    pub accelerometer: u8,
    /// Magnetometer calibration (bits 1:0)
    pub magnetometer: u8,
}

impl CalibrationStatus {
    /// Decode the `CALIB_STAT` register
    #[must_use]
    pub const fn from_register(value: u8) -> Self {
        Self {
            system: (value >> 6) & 0x03,
            gyroscope: (value >> 4) & 0x03,
            accelerometer: (value >> 2) & 0x03,
            magnetometer: value & 0x03,
        }
    }

    /// True when all four subsystems report level 3
    #[must_use]
    pub const fn is_fully_calibrated(&self) -> bool {
        self.system == FULLY_CALIBRATED
            && self.gyroscope == FULLY_CALIBRATED
            && self.accelerometer == FULLY_CALIBRATED
            && self.magnetometer == FULLY_CALIBRATED
    }
}

/// Sensor offsets and radii applied by the fusion firmware
///
/// Offsets are in the chip's raw units for the current range: 1 m/s² = 100 LSB
/// for the accelerometer, 1 µT = 16 LSB for the magnetometer and 1 dps = 16 LSB
/// for the gyroscope. Radii are in LSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationProfile {
    /// Accelerometer offset (x, y, z)
    pub accel_offset: [i16; 3],
    /// Magnetometer offset (x, y, z)
    pub mag_offset: [i16; 3],
    /// Gyroscope offset (x, y, z)
    pub gyro_offset: [i16; 3],
    /// Accelerometer radius
    pub accel_radius: i16,
    /// Magnetometer radius
    pub mag_radius: i16,
}

impl CalibrationProfile {
    /// Decode the 22-byte register image starting at `ACC_OFFSET_X_LSB`
    #[must_use]
    pub fn from_bytes(bytes: &[u8; PROFILE_LEN]) -> Self {
        let mut samples = [0i16; PROFILE_LEN / 2];
        decode_le_i16(bytes, &mut samples);

        Self {
            accel_offset: [samples[0], samples[1], samples[2]],
            mag_offset: [samples[3], samples[4], samples[5]],
            gyro_offset: [samples[6], samples[7], samples[8]],
            accel_radius: samples[9],
            mag_radius: samples[10],
        }
    }

    /// Encode into the 22-byte register image starting at `ACC_OFFSET_X_LSB`
    #[must_use]
    pub fn to_bytes(&self) -> [u8; PROFILE_LEN] {
        let samples = [
            self.accel_offset[0],
            self.accel_offset[1],
            self.accel_offset[2],
            self.mag_offset[0],
            self.mag_offset[1],
            self.mag_offset[2],
            self.gyro_offset[0],
            self.gyro_offset[1],
            self.gyro_offset[2],
            self.accel_radius,
            self.mag_radius,
        ];

        let mut bytes = [0u8; PROFILE_LEN];
        encode_le_i16(&samples, &mut bytes);
        bytes
    }
}
