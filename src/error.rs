//! Error types for the Mahony filter

use core::fmt;

/// Result type for filter configuration
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Configuration errors
///
/// Returned by the constructors and setters of [`Mahony`](crate::Mahony)
/// when a value would make the filter diverge or divide by zero. The
/// rejected value is carried in the variant. A call that returns an error
/// leaves the filter unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Proportional gain is negative or not finite
    InvalidProportionalGain(f32),
    /// Integral gain is negative or not finite
    InvalidIntegralGain(f32),
    /// Sample frequency is zero, negative or not finite
    InvalidSampleFrequency(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProportionalGain(v) => {
                write!(f, "Invalid proportional gain: {} (must be finite and >= 0)", v)
            }
            ConfigError::InvalidIntegralGain(v) => {
                write!(f, "Invalid integral gain: {} (must be finite and >= 0)", v)
            }
            ConfigError::InvalidSampleFrequency(v) => {
                write!(f, "Invalid sample frequency: {} Hz (must be finite and > 0)", v)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

pub(crate) fn check_gain(value: f32, err: fn(f32) -> ConfigError) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

pub(crate) fn check_sample_frequency(value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSampleFrequency(value))
    }
}
