use mahony_ahrs::{Mahony, MahonySettings, Vector3Ext};
use nalgebra::Vector3;

const SAMPLE_FREQUENCY: f32 = 100.0; // Hz

fn main() {
    let settings = MahonySettings {
        proportional_gain: 2.0,
        integral_gain: 0.1,
        sample_frequency: SAMPLE_FREQUENCY,
    };
    let mut mahony = match Mahony::with_settings(settings) {
        Ok(mahony) => mahony,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    for i in 0..500 {
        // this loop should repeat each time new sensor data is available
        let gyroscope = Vector3::new(0.5, 0.0, 5.0); // replace with gyroscope data in deg/s, here a small x bias
        let accelerometer = if i % 50 == 49 {
            Vector3::zeros() // sample unavailable this cycle
        } else {
            Vector3::new(0.0, 0.17, 0.98) // replace with accelerometer data, here ~10 degrees of roll
        };

        mahony.update(gyroscope, accelerometer);

        if i % 50 == 0 {
            let angles = mahony.euler_angles().to_degrees();
            let bias = mahony.integral_feedback().rad_to_deg();
            println!(
                "Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}, Bias correction: {:.3} deg/s",
                angles.roll, angles.pitch, angles.yaw, bias.x
            );
        }
    }
}
