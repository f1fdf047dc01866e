//! Helpers that derive transform inputs from flat vertex data
//!
//! Vertex positions come as the flat interleaved lists that are uploaded to
//! vertex buffers (`[x0, y0, z0, x1, y1, z1, ...]`). The centers computed here
//! are typically negated and used as the anchor step of a transform chain so
//! that scaling and rotation pivot around the shape instead of the origin.

use super::MatrixError;
use log::warn;
use tracing::instrument;

fn check_layout(positions: &[f64], dims: usize) -> Result<usize, MatrixError> {
    if dims == 0 || positions.len() % dims != 0 {
        return Err(MatrixError::ShapeMismatch {
            expected: dims * positions.len().div_ceil(dims.max(1)),
            actual: positions.len(),
        });
    }
    Ok(positions.len() / dims)
}

fn coordinates(positions: &[f64], dims: usize, dim: usize) -> impl Iterator<Item = f64> + '_ {
    positions.iter().skip(dim).step_by(dims).copied()
}

/// Midpoint of the bounding box, per dimension.
///
/// Returns a vector of `dims` numbers. Empty input yields the origin.
#[instrument(skip(positions), fields(len = positions.len()))]
pub fn bounds_center(positions: &[f64], dims: usize) -> Result<Vec<f64>, MatrixError> {
    let count = check_layout(positions, dims)?;
    if count == 0 {
        warn!("No vertices to center, using the origin");
        return Ok(vec![0.0; dims]);
    }
    Ok((0..dims)
        .map(|dim| {
            let (min, max) = coordinates(positions, dims, dim)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                    (min.min(v), max.max(v))
                });
            (min + max) / 2.0
        })
        .collect())
}

/// Average of all vertices, per dimension.
#[instrument(skip(positions), fields(len = positions.len()))]
pub fn mean_center(positions: &[f64], dims: usize) -> Result<Vec<f64>, MatrixError> {
    let count = check_layout(positions, dims)?;
    if count == 0 {
        warn!("No vertices to center, using the origin");
        return Ok(vec![0.0; dims]);
    }
    Ok((0..dims)
        .map(|dim| coordinates(positions, dims, dim).sum::<f64>() / count as f64)
        .collect())
}

/// Largest coordinate along `dim`, `None` for empty input.
///
/// Drivers use this to keep an animated shape inside the viewport.
pub fn max_coordinate(positions: &[f64], dims: usize, dim: usize) -> Result<Option<f64>, MatrixError> {
    check_layout(positions, dims)?;
    if dim >= dims {
        return Err(MatrixError::ShapeMismatch {
            expected: dims,
            actual: dim + 1,
        });
    }
    Ok(coordinates(positions, dims, dim).reduce(f64::max))
}
