#![no_std]

//! Mahony AHRS - an attitude filter fusing gyroscope and accelerometer data
//!
//! This library implements the Mahony complementary filter: the gyroscope is
//! integrated into an orientation quaternion, and the gravity direction
//! measured by the accelerometer feeds a proportional-integral correction
//! that removes tilt drift and constant gyroscope bias.
//!
//! # Features
//!
//! - Proportional and integral feedback with runtime-tunable gains
//! - Accelerometer gating: a zero acceleration vector skips correction
//! - Lazily computed, cached roll/pitch/yaw
//! - Validated configuration, no panics on bad settings
//! - Optional `defmt` logging
//! - `#![no_std]` compatible for embedded systems
//!
//! No magnetometer is fused, so yaw has no absolute reference.
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use mahony_ahrs::{Mahony, MahonySettings};
//!
//! let mut mahony = Mahony::with_settings(MahonySettings::default()).unwrap();
//!
//! // Sensor readings
//! let gyroscope = Vector3::new(0.1, 0.2, 0.3);      // deg/s
//! let accelerometer = Vector3::new(0.0, 0.0, 1.0);  // g
//!
//! // Update at the configured sample frequency (100 Hz by default)
//! mahony.update(gyroscope, accelerometer);
//!
//! // Get orientation
//! let quaternion = mahony.quaternion();
//! let angles = mahony.euler_angles().to_degrees();
//! ```

pub mod error;
mod mahony;
mod math;
mod types;

// Re-export all public types and functions
pub use error::{ConfigError, Result};
pub use mahony::Mahony;
pub use math::{DEG_TO_RAD, RAD_TO_DEG, Vector3Ext};
pub use types::*;
