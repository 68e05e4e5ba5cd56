use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mahony_ahrs::Mahony;
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

// Pre-generated sensor data to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<(Vector3<f32>, Vector3<f32>)>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.01; // 100Hz sample rate
            let motion_phase = time * 0.5 * 2.0 * PI;

            let gyroscope = Vector3::new(
                20.0 * motion_phase.sin() + rng.random_range(-0.5..0.5),
                20.0 * (motion_phase * 1.3).cos() + rng.random_range(-0.5..0.5),
                20.0 * (motion_phase * 0.7).sin() + rng.random_range(-0.5..0.5),
            );

            let accelerometer = Vector3::new(
                -0.1 * motion_phase.sin() + rng.random_range(-0.002..0.002),
                0.1 * motion_phase.cos() + rng.random_range(-0.002..0.002),
                1.0 + rng.random_range(-0.002..0.002),
            );

            samples.push((gyroscope, accelerometer));
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> (Vector3<f32>, Vector3<f32>) {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

/// Realistic sensor data for a device resting nearly level
fn generate_sensor_data() -> (Vector3<f32>, Vector3<f32>) {
    let gyroscope = Vector3::new(0.1, -0.2, 0.05); // deg/s
    let accelerometer = Vector3::new(0.01, -0.02, 1.0); // g
    (gyroscope, accelerometer)
}

/// Benchmark the update with proportional feedback only
fn bench_update(c: &mut Criterion) {
    let mut mahony = Mahony::default();
    let (gyroscope, accelerometer) = generate_sensor_data();

    c.bench_function("mahony_update", |b| {
        b.iter(|| mahony.update(black_box(gyroscope), black_box(accelerometer)))
    });
}

/// Benchmark the update with integral feedback enabled
fn bench_update_integral(c: &mut Criterion) {
    let mut mahony = Mahony::new(0.5, 0.1, 100.0).unwrap();
    let (gyroscope, accelerometer) = generate_sensor_data();

    c.bench_function("mahony_update_integral", |b| {
        b.iter(|| mahony.update(black_box(gyroscope), black_box(accelerometer)))
    });
}

/// Benchmark the gyroscope-only path taken when no accelerometer sample is available
fn bench_update_gyroscope_only(c: &mut Criterion) {
    let mut mahony = Mahony::default();
    let (gyroscope, _) = generate_sensor_data();

    c.bench_function("mahony_update_gyroscope_only", |b| {
        b.iter(|| mahony.update(black_box(gyroscope), black_box(Vector3::zeros())))
    });
}

/// Benchmark a varied motion sequence
fn bench_motion_sequence(c: &mut Criterion) {
    let mut mahony = Mahony::new(1.0, 0.05, 100.0).unwrap();
    let mut data = PreGeneratedData::new(1000, 7);

    c.bench_function("mahony_motion_sequence", |b| {
        b.iter(|| {
            let (gyroscope, accelerometer) = data.next();
            mahony.update(black_box(gyroscope), black_box(accelerometer))
        })
    });
}

/// Benchmark an update followed by an angle query, which recomputes the angles
fn bench_update_and_angles(c: &mut Criterion) {
    let mut mahony = Mahony::default();
    let (gyroscope, accelerometer) = generate_sensor_data();

    c.bench_function("mahony_update_and_angles", |b| {
        b.iter(|| {
            mahony.update(black_box(gyroscope), black_box(accelerometer));
            black_box(mahony.euler_angles())
        })
    });
}

/// Benchmark repeated angle queries served from the cache
fn bench_cached_angles(c: &mut Criterion) {
    let mut mahony = Mahony::default();
    let (gyroscope, accelerometer) = generate_sensor_data();
    mahony.update(gyroscope, accelerometer);

    c.bench_function("mahony_cached_angles", |b| {
        b.iter(|| black_box(mahony.roll()))
    });
}

/// Benchmark filter creation
fn bench_mahony_creation(c: &mut Criterion) {
    c.bench_function("mahony_new", |b| {
        b.iter(|| black_box(Mahony::new(black_box(0.5), black_box(0.0), black_box(100.0))))
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_update_integral,
    bench_update_gyroscope_only,
    bench_motion_sequence,
    bench_update_and_angles,
    bench_cached_angles,
    bench_mahony_creation
);

criterion_main!(benches);
