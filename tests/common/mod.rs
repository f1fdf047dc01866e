#![allow(dead_code)]

use glmat::math::{Axis, DEFAULT_EPSILON, Matrix2D, Matrix3D};
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` and `log` output through the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn random_matrix_3d<R: Rng>(rng: &mut R) -> Matrix3D {
    Matrix3D::from_array(std::array::from_fn(|_| rng.random_range(-10.0..10.0)))
}

pub fn random_matrix_2d<R: Rng>(rng: &mut R) -> Matrix2D {
    Matrix2D::from_array(std::array::from_fn(|_| rng.random_range(-10.0..10.0)))
}

pub fn random_axis<R: Rng>(rng: &mut R) -> Axis {
    Axis::ALL[rng.random_range(0..3)]
}

pub fn assert_matrix_3d_eq(actual: &Matrix3D, expected: &Matrix3D, epsilon: f64) {
    assert!(
        actual.approx_eq(expected, epsilon),
        "matrices differ\nexpected:\n{expected}\nactual:\n{actual}"
    );
}

pub fn assert_matrix_2d_eq(actual: &Matrix2D, expected: &Matrix2D, epsilon: f64) {
    assert!(
        actual.approx_eq(expected, epsilon),
        "matrices differ\nexpected:\n{expected}\nactual:\n{actual}"
    );
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < DEFAULT_EPSILON,
        "expected {expected}, got {actual}"
    );
}
