//! Mathematical utilities and nalgebra extensions for the Mahony filter

use nalgebra::Vector3;

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Reciprocal square root
///
/// Callers must guarantee `x > 0`.
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    1.0 / libm::sqrtf(x)
}

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// True when every component is exactly zero
    fn is_exact_zero(&self) -> bool;

    /// Scale to unit length; the vector must not be zero
    fn unit(&self) -> Vector3<f32>;

    /// Convert degrees to radians
    fn deg_to_rad(&self) -> Vector3<f32>;

    /// Convert radians to degrees
    fn rad_to_deg(&self) -> Vector3<f32>;
}

impl Vector3Ext for Vector3<f32> {
    fn is_exact_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    fn unit(&self) -> Vector3<f32> {
        // Scale by the largest component first so the squared magnitude
        // neither underflows nor overflows
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        let scaled = *self / largest;
        scaled * inv_sqrt(scaled.x * scaled.x + scaled.y * scaled.y + scaled.z * scaled.z)
    }

    fn deg_to_rad(&self) -> Vector3<f32> {
        *self * DEG_TO_RAD
    }

    fn rad_to_deg(&self) -> Vector3<f32> {
        *self * RAD_TO_DEG
    }
}
