//! Sensor configuration for the BNO055
//!
//! Range, bandwidth and power sub-mode settings of the three raw sensors:
//! - Accelerometer (`ACC_CONFIG`)
//! - Gyroscope (`GYR_CONFIG_0`, `GYR_CONFIG_1`)
//! - Magnetometer (`MAG_CONFIG`)
//!
//! All registers live on page 1 and are applied through methods on
//! `Bno055Driver`. The fusion modes overwrite them, so the driver rejects
//! changes while a fusion mode is active.

pub mod accelerometer;
pub mod gyroscope;
pub mod magnetometer;

// Re-export main types
pub use accelerometer::{AccelBandwidth, AccelConfig, AccelPowerMode, AccelRange};
pub use gyroscope::{GyroBandwidth, GyroConfig, GyroPowerMode, GyroRange};
pub use magnetometer::{MagConfig, MagDataRate, MagOperationMode, MagPowerMode};
