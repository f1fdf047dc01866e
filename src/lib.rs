//!
//! Glmat builds the homogeneous transformation matrices a WebGL style renderer
//! uploads to its shaders.
//!
//! It provides 3x3 matrices for 2D and 4x4 matrices for 3D: translation,
//! rotation, scaling, identity and orthographic projection, and the transform
//! chains that fold them into a single model-view-projection matrix.
//!
//! # Example
//!
//! ```
//! use glmat::math::{Axis, Matrix3D};
//!
//! let model = Matrix3D::identity()
//!     .rotate(30.0, Axis::X)
//!     .translate(200.0, 200.0, 0.0);
//! let mvp = Matrix3D::multiply(&Matrix3D::orthographic_projection(800.0, 600.0, 400.0)?, &model);
//! let uniform: [f32; 16] = mvp.to_f32_array();
//! # Ok::<(), glmat::math::MatrixError>(())
//! ```

pub mod chain;
pub mod math;

#[cfg(feature = "wasm")]
pub mod wasm;
