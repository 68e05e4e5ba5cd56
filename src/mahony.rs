//! Mahony complementary filter for gyroscope and accelerometer fusion

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::error::{ConfigError, Result, check_gain, check_sample_frequency};
use crate::math::{Vector3Ext, inv_sqrt};
use crate::types::{EulerAngles, MahonySettings};

/// Mahony attitude filter
///
/// Integrates the gyroscope into an orientation quaternion and pulls that
/// orientation towards the gravity direction measured by the accelerometer
/// using proportional and integral feedback. There is no magnetometer
/// input, so yaw is integrated from the gyroscope alone and drifts.
///
/// The filter uses a fixed integration period derived from the configured
/// sample frequency; call [`update`](Mahony::update) at that rate.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use mahony_ahrs::Mahony;
///
/// let mut mahony = Mahony::new(0.5, 0.0, 100.0).unwrap();
///
/// let gyroscope = Vector3::new(0.0, 0.0, 10.0);     // deg/s
/// let accelerometer = Vector3::new(0.0, 0.0, 1.0);  // any unit
/// mahony.update(gyroscope, accelerometer);
///
/// let yaw = mahony.yaw(); // radians
/// assert!(yaw > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Mahony {
    /// Raw gains and sample frequency as configured
    settings: MahonySettings,
    /// 2 * proportional gain
    two_kp: f32,
    /// 2 * integral gain
    two_ki: f32,
    /// 1 / sample frequency, in seconds
    sample_period: f32,
    /// Orientation, sensor frame to earth frame (WXYZ)
    quaternion: Quaternion<f32>,
    /// Accumulated integral feedback in rad/s
    integral_feedback: Vector3<f32>,
    /// Euler angles cached from `quaternion`
    angles: EulerAngles,
    /// Whether `angles` matches the current `quaternion`
    angles_fresh: bool,
}

impl Mahony {
    /// Create a filter with the given gains and sample frequency in Hz
    ///
    /// Gains must be finite and non-negative, the sample frequency finite and
    /// positive.
    pub fn new(proportional_gain: f32, integral_gain: f32, sample_frequency: f32) -> Result<Self> {
        Self::with_settings(MahonySettings {
            proportional_gain,
            integral_gain,
            sample_frequency,
        })
    }

    /// Create a filter from a settings bundle
    pub fn with_settings(settings: MahonySettings) -> Result<Self> {
        settings.validate().map_err(rejected)?;
        Ok(Self::from_valid(settings))
    }

    fn from_valid(settings: MahonySettings) -> Self {
        Mahony {
            settings,
            two_kp: 2.0 * settings.proportional_gain,
            two_ki: 2.0 * settings.integral_gain,
            sample_period: 1.0 / settings.sample_frequency,
            quaternion: Quaternion::identity(),
            integral_feedback: Vector3::zeros(),
            angles: EulerAngles::default(),
            angles_fresh: false,
        }
    }

    /// Return to the identity orientation and clear the integral feedback
    ///
    /// Gains and sample frequency are kept.
    pub fn reset(&mut self) {
        self.quaternion = Quaternion::identity();
        self.integral_feedback = Vector3::zeros();
        self.angles_fresh = false;
    }

    /// Update the orientation with one gyroscope and accelerometer sample
    ///
    /// # Arguments
    /// * `gyroscope` - Angular rate in degrees per second
    /// * `accelerometer` - Acceleration in any unit, only its direction is
    ///   used. Pass the zero vector when no accelerometer sample is available;
    ///   the gyroscope is then integrated without correction.
    pub fn update(&mut self, gyroscope: Vector3<f32>, accelerometer: Vector3<f32>) {
        let mut rate = gyroscope.deg_to_rad();

        if accelerometer.is_exact_zero() {
            #[cfg(feature = "defmt")]
            defmt::trace!("no accelerometer sample, integrating gyroscope only");
        } else {
            let half_error = accelerometer.unit().cross(&self.half_gravity());

            if self.two_ki > 0.0 {
                self.integral_feedback += half_error * (self.two_ki * self.sample_period);
                rate += self.integral_feedback;
            } else {
                // prevent integral windup
                self.integral_feedback = Vector3::zeros();
            }

            rate += half_error * self.two_kp;
        }

        self.integrate(rate);
        self.angles_fresh = false;
    }

    /// Current orientation
    pub fn quaternion(&self) -> UnitQuaternion<f32> {
        UnitQuaternion::new_unchecked(self.quaternion)
    }

    /// Estimated gravity direction in the sensor frame (unit vector)
    pub fn gravity(&self) -> Vector3<f32> {
        self.half_gravity() * 2.0
    }

    /// Accumulated integral feedback in rad/s
    pub fn integral_feedback(&self) -> Vector3<f32> {
        self.integral_feedback
    }

    /// Roll in radians
    pub fn roll(&mut self) -> f32 {
        self.euler_angles().roll
    }

    /// Pitch in radians
    pub fn pitch(&mut self) -> f32 {
        self.euler_angles().pitch
    }

    /// Yaw in radians
    pub fn yaw(&mut self) -> f32 {
        self.euler_angles().yaw
    }

    /// Roll, pitch and yaw in radians
    ///
    /// The angles are computed on the first query after an update and cached
    /// until the next one.
    pub fn euler_angles(&mut self) -> EulerAngles {
        if !self.angles_fresh {
            self.angles = self.compute_angles();
            self.angles_fresh = true;
        }
        self.angles
    }

    /// Whether the cached angles reflect the current orientation
    pub fn angles_fresh(&self) -> bool {
        self.angles_fresh
    }

    /// Current settings
    pub fn settings(&self) -> MahonySettings {
        self.settings
    }

    /// Replace all settings at once
    ///
    /// Nothing is changed if any field is invalid.
    pub fn set_settings(&mut self, settings: MahonySettings) -> Result<()> {
        settings.validate().map_err(rejected)?;
        self.apply_proportional_gain(settings.proportional_gain);
        self.apply_integral_gain(settings.integral_gain);
        self.apply_sample_frequency(settings.sample_frequency);
        Ok(())
    }

    /// Proportional gain (Kp)
    pub fn proportional_gain(&self) -> f32 {
        self.settings.proportional_gain
    }

    /// Set the proportional gain, `Err` if negative or not finite
    pub fn set_proportional_gain(&mut self, value: f32) -> Result<()> {
        let value = check_gain(value, ConfigError::InvalidProportionalGain).map_err(rejected)?;
        self.apply_proportional_gain(value);
        Ok(())
    }

    /// Integral gain (Ki)
    pub fn integral_gain(&self) -> f32 {
        self.settings.integral_gain
    }

    /// Set the integral gain, `Err` if negative or not finite
    ///
    /// Setting it to zero also clears the accumulated integral feedback.
    pub fn set_integral_gain(&mut self, value: f32) -> Result<()> {
        let value = check_gain(value, ConfigError::InvalidIntegralGain).map_err(rejected)?;
        self.apply_integral_gain(value);
        Ok(())
    }

    /// Sample frequency in Hz
    pub fn sample_frequency(&self) -> f32 {
        self.settings.sample_frequency
    }

    /// Integration period in seconds
    pub fn sample_period(&self) -> f32 {
        self.sample_period
    }

    /// Set the sample frequency in Hz, `Err` unless finite and positive
    pub fn set_sample_frequency(&mut self, value: f32) -> Result<()> {
        let value = check_sample_frequency(value).map_err(rejected)?;
        self.apply_sample_frequency(value);
        Ok(())
    }

    fn apply_proportional_gain(&mut self, value: f32) {
        self.settings.proportional_gain = value;
        self.two_kp = 2.0 * value;
    }

    fn apply_integral_gain(&mut self, value: f32) {
        self.settings.integral_gain = value;
        self.two_ki = 2.0 * value;
        if self.two_ki == 0.0 {
            self.integral_feedback = Vector3::zeros();
        }
    }

    fn apply_sample_frequency(&mut self, value: f32) {
        self.settings.sample_frequency = value;
        self.sample_period = 1.0 / value;
    }

    /// Half of the third row of the rotation matrix
    fn half_gravity(&self) -> Vector3<f32> {
        let (q0, q1, q2, q3) = self.components();
        Vector3::new(
            q1 * q3 - q0 * q2,
            q0 * q1 + q2 * q3,
            q0 * q0 - 0.5 + q3 * q3,
        )
    }

    /// Integrate an angular rate in rad/s over one sample period
    fn integrate(&mut self, rate: Vector3<f32>) {
        let r = rate * (0.5 * self.sample_period);
        let (qa, qb, qc, qd) = self.components();

        let w = qa - qb * r.x - qc * r.y - qd * r.z;
        let i = qb + qa * r.x + qc * r.z - qd * r.y;
        let j = qc + qa * r.y - qb * r.z + qd * r.x;
        let k = qd + qa * r.z + qb * r.y - qc * r.x;

        let recip_norm = inv_sqrt(w * w + i * i + j * j + k * k);
        self.quaternion = Quaternion::new(
            w * recip_norm,
            i * recip_norm,
            j * recip_norm,
            k * recip_norm,
        );
    }

    fn compute_angles(&self) -> EulerAngles {
        let (q0, q1, q2, q3) = self.components();
        let sin_pitch = (-2.0 * (q1 * q3 - q0 * q2)).clamp(-1.0, 1.0);
        EulerAngles {
            roll: libm::atan2f(q0 * q1 + q2 * q3, 0.5 - q1 * q1 - q2 * q2),
            pitch: libm::asinf(sin_pitch),
            yaw: libm::atan2f(q1 * q2 + q0 * q3, 0.5 - q2 * q2 - q3 * q3),
        }
    }

    fn components(&self) -> (f32, f32, f32, f32) {
        let q = &self.quaternion;
        (q.w, q.i, q.j, q.k)
    }
}

impl Default for Mahony {
    fn default() -> Self {
        Self::from_valid(MahonySettings::default())
    }
}

fn rejected(err: ConfigError) -> ConfigError {
    #[cfg(feature = "defmt")]
    defmt::warn!("rejected filter configuration: {}", err);
    err
}
