//! Vector types for translations, scale factors and anchor points
//!
//! There is no distinction between points and directions. Negating a
//! vector inverts the translation it describes, which is how anchors
//! (pivot points) are moved to the origin before scaling and rotating.

use super::MatrixError;
use serde::{Deserialize, Serialize};

/// A 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from a flat slice of exactly 2 numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        match values {
            [x, y] => Ok(Vec2::new(*x, *y)),
            _ => Err(MatrixError::ShapeMismatch {
                expected: 2,
                actual: values.len(),
            }),
        }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// A 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Uniform vector, handy for scale factors.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Builds a vector from a flat slice of exactly 3 numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        match values {
            [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
            _ => Err(MatrixError::ShapeMismatch {
                expected: 3,
                actual: values.len(),
            }),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negation_inverts_translation() {
        assert_eq!(-Vec2::new(1.0, -2.0), Vec2::new(-1.0, 2.0));
        assert_eq!(-Vec3::new(50.0, 75.0, 0.0), Vec3::new(-50.0, -75.0, -0.0));
        assert_eq!(-(-Vec3::splat(3.0)), Vec3::splat(3.0));
    }

    #[test]
    fn test_to_array() {
        assert_eq!(Vec2::new(1.0, 2.0).to_array(), [1.0, 2.0]);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Vec2::from_slice(&[1.0, 2.0]), Ok(Vec2::new(1.0, 2.0)));
        assert_eq!(
            Vec3::from_slice(&[1.0, 2.0, 3.0]),
            Ok(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            Vec2::from_slice(&[1.0, 2.0, 3.0]),
            Err(MatrixError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            Vec3::from_slice(&[]),
            Err(MatrixError::ShapeMismatch {
                expected: 3,
                actual: 0
            })
        );
    }

    #[test]
    fn test_vec3_json() {
        let json = serde_json::to_string(&Vec3::new(200.0, 200.0, 0.0)).unwrap();
        assert_eq!(json, r#"{"x":200.0,"y":200.0,"z":0.0}"#);
    }
}
