//! 3x3 matrices for homogeneous 2D transforms
//!
//! Same conventions as [`crate::math::matrix3d`]: row-major, translation in
//! the last row, points as row vectors and `multiply(a, b)` applying `b`
//! first. Rotation is always around the implicit Z axis.

use super::{MatrixError, Vec2, approx_eq_slices, compose_row_major, degrees_sin_cos};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Number of elements in a flat 3x3 matrix
pub const LEN: usize = 9;

/// 3x3 matrix, flattened row-major
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix2D {
    pub m: [f64; LEN],
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<&[f64]> for Matrix2D {
    type Error = MatrixError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Matrix2D::from_slice(values)
    }
}

impl From<[f64; LEN]> for Matrix2D {
    fn from(m: [f64; LEN]) -> Self {
        Self { m }
    }
}

impl Matrix2D {
    pub const fn from_array(m: [f64; LEN]) -> Self {
        Self { m }
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        MatrixError::check_len(LEN, values.len())?;
        let mut m = [0.0; LEN];
        m.copy_from_slice(values);
        Ok(Self { m })
    }

    pub const fn identity() -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            tx, ty, 1.0,
        ])
    }

    pub const fn translation_vec(t: Vec2) -> Self {
        Self::translation(t.x, t.y)
    }

    /// Rotation in degrees. No sign flip happens here, the y axis is flipped
    /// by the projection.
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees_sin_cos(degrees);
        Self::from_array([
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_array([
            sx, 0.0, 0.0, //
            0.0, sy, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    pub const fn scaling_vec(s: Vec2) -> Self {
        Self::scaling(s.x, s.y)
    }

    /// Maps pixel space (origin top left, y down) into clip space.
    pub fn orthographic_projection(width: f64, height: f64) -> Result<Self, MatrixError> {
        let sx = MatrixError::projection_scale("width", width)?;
        let sy = MatrixError::projection_scale("height", height)?;
        Ok(Self::from_array([
            sx, 0.0, 0.0, //
            0.0, -sy, 0.0, //
            -1.0, 1.0, 1.0,
        ]))
    }

    /// Composes two matrices, `b` applied first, then `a`.
    pub fn multiply(a: &Matrix2D, b: &Matrix2D) -> Matrix2D {
        let mut m = [0.0; LEN];
        compose_row_major::<3>(&a.m, &b.m, &mut m);
        Matrix2D { m }
    }

    pub fn translate(&self, tx: f64, ty: f64) -> Matrix2D {
        Self::multiply(self, &Self::translation(tx, ty))
    }

    pub fn rotate(&self, degrees: f64) -> Matrix2D {
        Self::multiply(self, &Self::rotation(degrees))
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Matrix2D {
        Self::multiply(self, &Self::scaling(sx, sy))
    }

    pub fn project(&self, width: f64, height: f64) -> Result<Matrix2D, MatrixError> {
        Ok(Self::multiply(
            self,
            &Self::orthographic_projection(width, height)?,
        ))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row * 3 + col]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.m
    }

    /// Single precision copy in the same layout, ready for a `mat3` uniform.
    pub fn to_f32_array(&self) -> [f32; LEN] {
        self.m.map(|v| v as f32)
    }

    /// Transforms a point as a row vector `(x, y, 1)`.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let m = &self.m;
        Vec2::new(
            m[0] * p.x + m[3] * p.y + m[6],
            m[1] * p.x + m[4] * p.y + m[7],
        )
    }

    pub fn approx_eq(&self, other: &Matrix2D, epsilon: f64) -> bool {
        approx_eq_slices(&self.m, &other.m, epsilon)
    }
}

/// Composes two flat 9 element slices, `b` applied first, then `a`.
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Matrix2D, MatrixError> {
    let mut m = [0.0; LEN];
    multiply_into(a, b, &mut m)?;
    Ok(Matrix2D { m })
}

/// Like [`multiply`] but writes into a caller supplied buffer of 9 numbers.
pub fn multiply_into(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), MatrixError> {
    MatrixError::check_len(LEN, a.len())?;
    MatrixError::check_len(LEN, b.len())?;
    MatrixError::check_len(LEN, out.len())?;
    compose_row_major::<3>(a, b, out);
    Ok(())
}

/// Conventional row-major product (A * B means A is applied first, then B)
impl Mul for Matrix2D {
    type Output = Matrix2D;

    fn mul(self, rhs: Matrix2D) -> Matrix2D {
        Matrix2D::multiply(&rhs, &self)
    }
}

impl Mul for &Matrix2D {
    type Output = Matrix2D;

    fn mul(self, rhs: &Matrix2D) -> Matrix2D {
        Matrix2D::multiply(rhs, self)
    }
}

impl std::fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, row) in self.m.chunks_exact(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
