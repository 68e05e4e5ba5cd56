//! Configuration and output types for the Mahony filter

use crate::error::{ConfigError, Result, check_gain, check_sample_frequency};
use crate::math::RAD_TO_DEG;

/// Mahony filter settings
///
/// Bundles the tunable parameters of the filter. Defaults match a typical
/// 100 Hz IMU loop with proportional correction only.
///
/// # Example
/// ```
/// use mahony_ahrs::{Mahony, MahonySettings};
///
/// let settings = MahonySettings {
///     proportional_gain: 1.0,   // Faster convergence to gravity
///     integral_gain: 0.05,      // Compensate slow gyroscope bias
///     ..Default::default()
/// };
/// let mahony = Mahony::with_settings(settings).unwrap();
/// assert_eq!(mahony.sample_frequency(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MahonySettings {
    /// Proportional gain (Kp)
    ///
    /// Strength of the immediate correction towards the measured gravity
    /// direction. Higher values converge faster but pass more accelerometer
    /// noise through to the orientation.
    pub proportional_gain: f32,
    /// Integral gain (Ki)
    ///
    /// Strength of the correction applied from the accumulated error.
    /// Compensates constant gyroscope bias. Set to 0 to disable.
    pub integral_gain: f32,
    /// Expected update rate in Hz
    ///
    /// The filter integrates with a fixed period of `1 / sample_frequency`,
    /// so `update` should be called at this rate.
    pub sample_frequency: f32,
}

impl MahonySettings {
    /// Check every field, returning the first invalid one
    pub fn validate(&self) -> Result<()> {
        check_gain(self.proportional_gain, ConfigError::InvalidProportionalGain)?;
        check_gain(self.integral_gain, ConfigError::InvalidIntegralGain)?;
        check_sample_frequency(self.sample_frequency)?;
        Ok(())
    }
}

impl Default for MahonySettings {
    fn default() -> Self {
        Self {
            proportional_gain: 0.5,
            integral_gain: 0.0,
            sample_frequency: 100.0,
        }
    }
}

/// Orientation as roll, pitch and yaw in radians
///
/// Aerospace sequence: yaw about Z, then pitch about Y, then roll about X.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EulerAngles {
    /// Rotation about the X axis
    pub roll: f32,
    /// Rotation about the Y axis, in [-π/2, π/2]
    pub pitch: f32,
    /// Rotation about the Z axis
    pub yaw: f32,
}

impl EulerAngles {
    /// Same angles in degrees
    pub fn to_degrees(&self) -> EulerAngles {
        EulerAngles {
            roll: self.roll * RAD_TO_DEG,
            pitch: self.pitch * RAD_TO_DEG,
            yaw: self.yaw * RAD_TO_DEG,
        }
    }
}
