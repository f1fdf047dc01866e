use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced when building or composing matrices from untyped input.
///
/// None of these are retryable: the same input always yields the same error.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A flat matrix or vector did not have the expected number of elements.
    ShapeMismatch { expected: usize, actual: usize },
    /// An axis selector outside of `X`, `Y`, `Z`.
    InvalidAxis(String),
    /// A projection dimension was zero or not finite.
    DegenerateProjection {
        dimension: &'static str,
        value: f64,
    },
}

impl MatrixError {
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), MatrixError> {
        if expected == actual {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch { expected, actual })
        }
    }

    /// Validates a projection dimension and returns `2 / value`.
    pub(crate) fn projection_scale(dimension: &'static str, value: f64) -> Result<f64, MatrixError> {
        if value == 0.0 || !value.is_finite() {
            Err(MatrixError::DegenerateProjection { dimension, value })
        } else {
            Ok(2.0 / value)
        }
    }
}

impl Error for MatrixError {}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected} elements, got {actual}")
            }
            MatrixError::InvalidAxis(axis) => {
                write!(f, "invalid axis {axis:?}, expected one of X, Y, Z")
            }
            MatrixError::DegenerateProjection { dimension, value } => {
                write!(f, "degenerate projection: {dimension} must be non-zero and finite, got {value}")
            }
        }
    }
}
