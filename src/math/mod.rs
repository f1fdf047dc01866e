//! Homogeneous transformation matrices
//!
//! This module provides:
//! - 3x3 matrices for 2D transforms (matrix2d submodule)
//! - 4x4 matrices for 3D transforms (matrix3d submodule)
//! - Vector and axis types used as constructor inputs
//! - Geometry helpers to derive anchor points from vertex data
//!
//! All matrices are stored row-major and flattened, element `(row, col)` lives
//! at `row * N + col`. This layout is uploaded to shader uniforms unchanged.

mod axis;
mod error;
pub mod geometry;
pub mod matrix2d;
pub mod matrix3d;
mod vec;

pub use axis::Axis;
pub use error::MatrixError;
pub use matrix2d::Matrix2D;
pub use matrix3d::Matrix3D;
pub use vec::{Vec2, Vec3};

/// Tolerance used by `approx_eq` helpers when none is given.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Sine and cosine of an angle given in degrees.
///
/// The angle is first wrapped into `[0, 360)` so that angles a full turn apart
/// produce the same matrix even for large animation-driven values. Radians are
/// computed as `(π·θ)/180`, which rounds differently from `to_radians` for
/// some angles.
#[inline]
pub(crate) fn degrees_sin_cos(degrees: f64) -> (f64, f64) {
    (std::f64::consts::PI * degrees.rem_euclid(360.0) / 180.0).sin_cos()
}

/// Composes two flat row-major `N x N` matrices so that `b` is applied
/// before `a` (row vectors, `p' = p * b * a`).
///
/// `out[row][col] = Σ_k b[row][k] * a[k][col]`, summed in `k` order.
/// Callers guarantee all three slices hold exactly `N * N` elements.
#[inline]
pub(crate) fn compose_row_major<const N: usize>(a: &[f64], b: &[f64], out: &mut [f64]) {
    for (row, out_row) in out.chunks_exact_mut(N).enumerate() {
        let b_row = &b[row * N..(row + 1) * N];
        for (col, cell) in out_row.iter_mut().enumerate() {
            let mut sum = b_row[0] * a[col];
            for (k, b_rk) in b_row.iter().enumerate().skip(1) {
                sum += b_rk * a[k * N + col];
            }
            *cell = sum;
        }
    }
}

pub(crate) fn approx_eq_slices(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= epsilon)
}
