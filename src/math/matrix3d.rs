//! 4x4 matrices for homogeneous 3D transforms
//!
//! Matrices are row-major with the translation stored in the last row:
//!
//! ```text
//! [ m[0]  m[1]  m[2]  m[3]  ]
//! [ m[4]  m[5]  m[6]  m[7]  ]
//! [ m[8]  m[9]  m[10] m[11] ]
//! [ tx    ty    tz    m[15] ]
//! ```
//!
//! Points are treated as row vectors, `p' = p * M`. This is what a shader
//! computes for `u_matrix * a_position` when the flat array is uploaded
//! without transposing.
//!
//! `multiply(a, b)` applies `b` first and `a` second: the second argument is
//! the transform already accumulated. Transform chains are built by folding
//! steps with `multiply(step, accumulator)`, see [`crate::chain`].

use super::{Axis, MatrixError, Vec3, approx_eq_slices, compose_row_major, degrees_sin_cos};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Number of elements in a flat 4x4 matrix
pub const LEN: usize = 16;

/// 4x4 matrix, flattened row-major
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix3D {
    pub m: [f64; LEN],
}

impl Default for Matrix3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<&[f64]> for Matrix3D {
    type Error = MatrixError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Matrix3D::from_slice(values)
    }
}

impl From<[f64; LEN]> for Matrix3D {
    fn from(m: [f64; LEN]) -> Self {
        Self { m }
    }
}

impl Matrix3D {
    pub const fn from_array(m: [f64; LEN]) -> Self {
        Self { m }
    }

    /// Copies a flat row-major slice, which must hold exactly 16 numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        MatrixError::check_len(LEN, values.len())?;
        let mut m = [0.0; LEN];
        m.copy_from_slice(values);
        Ok(Self { m })
    }

    pub const fn identity() -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, tz, 1.0,
        ])
    }

    pub const fn translation_vec(t: Vec3) -> Self {
        Self::translation(t.x, t.y, t.z)
    }

    /// Rotation around one of the coordinate axes, angle in degrees.
    ///
    /// Each axis has its own sign layout. For Z the negated sine sits in the
    /// second row, for X and Y in the third. Shaders rely on this handedness.
    pub fn rotation(degrees: f64, axis: Axis) -> Self {
        let (sin, cos) = degrees_sin_cos(degrees);
        match axis {
            Axis::X => Self::from_array([
                1.0, 0.0, 0.0, 0.0, //
                0.0, cos, sin, 0.0, //
                0.0, -sin, cos, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]),
            Axis::Y => Self::from_array([
                cos, 0.0, -sin, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                sin, 0.0, cos, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]),
            Axis::Z => Self::from_array([
                cos, sin, 0.0, 0.0, //
                -sin, cos, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ]),
        }
    }

    /// Rotation with a numeric axis selector (`0` = X, `1` = Y, `2` = Z).
    pub fn rotation_by_index(degrees: f64, axis: u8) -> Result<Self, MatrixError> {
        Ok(Self::rotation(degrees, Axis::try_from(axis)?))
    }

    /// Non-uniform scale. A zero factor collapses that axis, which is allowed.
    pub const fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        Self::from_array([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub const fn scaling_vec(s: Vec3) -> Self {
        Self::scaling(s.x, s.y, s.z)
    }

    /// Maps pixel space (origin top left, y down) with the given depth range
    /// into clip space.
    pub fn orthographic_projection(width: f64, height: f64, depth: f64) -> Result<Self, MatrixError> {
        let sx = MatrixError::projection_scale("width", width)?;
        let sy = MatrixError::projection_scale("height", height)?;
        let sz = MatrixError::projection_scale("depth", depth)?;
        Ok(Self::from_array([
            sx, 0.0, 0.0, 0.0, //
            0.0, -sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            -1.0, 1.0, 0.0, 1.0,
        ]))
    }

    /// Composes two matrices, `b` applied first, then `a`.
    ///
    /// Element-wise: `r[row][col] = Σ_k b[row][k] * a[k][col]`, the
    /// conventional product `b · a`.
    pub fn multiply(a: &Matrix3D, b: &Matrix3D) -> Matrix3D {
        let mut m = [0.0; LEN];
        compose_row_major::<4>(&a.m, &b.m, &mut m);
        Matrix3D { m }
    }

    /// `multiply(self, translation(tx, ty, tz))`, the translation runs before `self`
    pub fn translate(&self, tx: f64, ty: f64, tz: f64) -> Matrix3D {
        Self::multiply(self, &Self::translation(tx, ty, tz))
    }

    /// `multiply(self, rotation(degrees, axis))`, the rotation runs before `self`
    pub fn rotate(&self, degrees: f64, axis: Axis) -> Matrix3D {
        Self::multiply(self, &Self::rotation(degrees, axis))
    }

    /// `multiply(self, scaling(sx, sy, sz))`, the scale runs before `self`
    pub fn scale(&self, sx: f64, sy: f64, sz: f64) -> Matrix3D {
        Self::multiply(self, &Self::scaling(sx, sy, sz))
    }

    /// `multiply(self, orthographic_projection(width, height, depth))`
    pub fn project(&self, width: f64, height: f64, depth: f64) -> Result<Matrix3D, MatrixError> {
        Ok(Self::multiply(
            self,
            &Self::orthographic_projection(width, height, depth)?,
        ))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row * 4 + col]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.m
    }

    /// Single precision copy in the same layout, ready for a `mat4` uniform.
    pub fn to_f32_array(&self) -> [f32; LEN] {
        self.m.map(|v| v as f32)
    }

    /// Transforms a point as a row vector with `w = 1`, followed by the
    /// perspective divide.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        let x = m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12];
        let y = m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13];
        let z = m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14];
        let w = m[3] * p.x + m[7] * p.y + m[11] * p.z + m[15];
        Vec3::new(x / w, y / w, z / w)
    }

    /// Transforms a direction, ignoring the translation row.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z,
            m[1] * v.x + m[5] * v.y + m[9] * v.z,
            m[2] * v.x + m[6] * v.y + m[10] * v.z,
        )
    }

    pub fn approx_eq(&self, other: &Matrix3D, epsilon: f64) -> bool {
        approx_eq_slices(&self.m, &other.m, epsilon)
    }
}

/// Composes two flat 16 element slices, `b` applied first, then `a`.
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Matrix3D, MatrixError> {
    let mut m = [0.0; LEN];
    multiply_into(a, b, &mut m)?;
    Ok(Matrix3D { m })
}

/// Like [`multiply`] but writes into a caller supplied buffer of 16 numbers.
pub fn multiply_into(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), MatrixError> {
    MatrixError::check_len(LEN, a.len())?;
    MatrixError::check_len(LEN, b.len())?;
    MatrixError::check_len(LEN, out.len())?;
    compose_row_major::<4>(a, b, out);
    Ok(())
}

/// Conventional row-major product (A * B means A is applied first, then B)
///
/// `a * b == Matrix3D::multiply(&b, &a)`
impl Mul for Matrix3D {
    type Output = Matrix3D;

    fn mul(self, rhs: Matrix3D) -> Matrix3D {
        Matrix3D::multiply(&rhs, &self)
    }
}

impl Mul for &Matrix3D {
    type Output = Matrix3D;

    fn mul(self, rhs: &Matrix3D) -> Matrix3D {
        Matrix3D::multiply(rhs, self)
    }
}

impl std::fmt::Display for Matrix3D {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, row) in self.m.chunks_exact(4).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
