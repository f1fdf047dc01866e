//! Transform chains
//!
//! A chain is an ordered list of steps that is folded into a single matrix.
//! The fold starts from the identity and computes
//! `accumulator = multiply(step, accumulator)` for every step, so the first
//! step in the list is the first one applied to a vertex. The usual order for
//! a model-view-projection matrix is
//!
//! anchor → scale → rotate X → rotate Y → rotate Z → translate → project
//!
//! Because `multiply` treats its arguments asymmetrically, folding in any
//! other direction produces a different (wrong) pivot.
//!
//! Chains serialize to JSON so that a rendering driver can load them from its
//! configuration:
//!
//! ```
//! use glmat::chain::TransformChain3D;
//!
//! let chain = TransformChain3D::from_json(r#"{"steps": [
//!     {"type": "anchor", "x": 50.0, "y": 75.0, "z": 15.0},
//!     {"type": "rotate", "angle": 30.0, "axis": 0},
//!     {"type": "translate", "x": 200.0, "y": 200.0, "z": 0.0},
//!     {"type": "project", "width": 800.0, "height": 600.0, "depth": 400.0}
//! ]}"#).unwrap();
//! let matrix = chain.build().unwrap();
//! assert_eq!(matrix.as_slice().len(), 16);
//! ```

use crate::math::{Axis, Matrix2D, Matrix3D, MatrixError, Vec2, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Folds matrices in order, the first matrix is applied first.
pub fn compose_3d<'a, I>(matrices: I) -> Matrix3D
where
    I: IntoIterator<Item = &'a Matrix3D>,
{
    matrices
        .into_iter()
        .fold(Matrix3D::identity(), |acc, step| Matrix3D::multiply(step, &acc))
}

/// Folds matrices in order, the first matrix is applied first.
pub fn compose_2d<'a, I>(matrices: I) -> Matrix2D
where
    I: IntoIterator<Item = &'a Matrix2D>,
{
    matrices
        .into_iter()
        .fold(Matrix2D::identity(), |acc, step| Matrix2D::multiply(step, &acc))
}

/// A single step of a 3D chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform3D {
    /// Moves the given point to the origin (translation by the negated point)
    Anchor(Vec3),
    Translate(Vec3),
    Rotate { angle: f64, axis: Axis },
    Scale(Vec3),
    Project { width: f64, height: f64, depth: f64 },
}

impl Transform3D {
    pub fn to_matrix(&self) -> Result<Matrix3D, MatrixError> {
        Ok(match *self {
            Transform3D::Anchor(anchor) => Matrix3D::translation_vec(-anchor),
            Transform3D::Translate(t) => Matrix3D::translation_vec(t),
            Transform3D::Rotate { angle, axis } => Matrix3D::rotation(angle, axis),
            Transform3D::Scale(s) => {
                if s.x == 0.0 || s.y == 0.0 || s.z == 0.0 {
                    debug!("Degenerate scale {s:?}, the chain result is singular");
                }
                Matrix3D::scaling_vec(s)
            }
            Transform3D::Project {
                width,
                height,
                depth,
            } => Matrix3D::orthographic_projection(width, height, depth)?,
        })
    }
}

/// Ordered list of 3D steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformChain3D {
    pub steps: Vec<Transform3D>,
}

impl TransformChain3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, step: Transform3D) -> Self {
        self.steps.push(step);
        self
    }

    pub fn anchor(self, x: f64, y: f64, z: f64) -> Self {
        self.push(Transform3D::Anchor(Vec3::new(x, y, z)))
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.push(Transform3D::Translate(Vec3::new(x, y, z)))
    }

    pub fn rotate(self, angle: f64, axis: Axis) -> Self {
        self.push(Transform3D::Rotate { angle, axis })
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> Self {
        self.push(Transform3D::Scale(Vec3::new(x, y, z)))
    }

    pub fn project(self, width: f64, height: f64, depth: f64) -> Self {
        self.push(Transform3D::Project {
            width,
            height,
            depth,
        })
    }

    /// Folds all steps into one matrix. An empty chain is the identity.
    #[instrument(skip(self), fields(steps = self.steps.len()))]
    pub fn build(&self) -> Result<Matrix3D, MatrixError> {
        self.steps
            .iter()
            .try_fold(Matrix3D::identity(), |acc, step| {
                Ok(Matrix3D::multiply(&step.to_matrix()?, &acc))
            })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A single step of a 2D chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform2D {
    Anchor(Vec2),
    Translate(Vec2),
    Rotate { angle: f64 },
    Scale(Vec2),
    Project { width: f64, height: f64 },
}

impl Transform2D {
    pub fn to_matrix(&self) -> Result<Matrix2D, MatrixError> {
        Ok(match *self {
            Transform2D::Anchor(anchor) => Matrix2D::translation_vec(-anchor),
            Transform2D::Translate(t) => Matrix2D::translation_vec(t),
            Transform2D::Rotate { angle } => Matrix2D::rotation(angle),
            Transform2D::Scale(s) => {
                if s.x == 0.0 || s.y == 0.0 {
                    debug!("Degenerate scale {s:?}, the chain result is singular");
                }
                Matrix2D::scaling_vec(s)
            }
            Transform2D::Project { width, height } => {
                Matrix2D::orthographic_projection(width, height)?
            }
        })
    }
}

/// Ordered list of 2D steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformChain2D {
    pub steps: Vec<Transform2D>,
}

impl TransformChain2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, step: Transform2D) -> Self {
        self.steps.push(step);
        self
    }

    pub fn anchor(self, x: f64, y: f64) -> Self {
        self.push(Transform2D::Anchor(Vec2::new(x, y)))
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        self.push(Transform2D::Translate(Vec2::new(x, y)))
    }

    pub fn rotate(self, angle: f64) -> Self {
        self.push(Transform2D::Rotate { angle })
    }

    pub fn scale(self, x: f64, y: f64) -> Self {
        self.push(Transform2D::Scale(Vec2::new(x, y)))
    }

    pub fn project(self, width: f64, height: f64) -> Self {
        self.push(Transform2D::Project { width, height })
    }

    #[instrument(skip(self), fields(steps = self.steps.len()))]
    pub fn build(&self) -> Result<Matrix2D, MatrixError> {
        self.steps
            .iter()
            .try_fold(Matrix2D::identity(), |acc, step| {
                Ok(Matrix2D::multiply(&step.to_matrix()?, &acc))
            })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn default_depth() -> f64 {
    400.0
}

fn default_scale_3d() -> Vec3 {
    Vec3::splat(1.0)
}

fn default_scale_2d() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

/// Per frame inputs of a 3D draw call
///
/// Everything except the viewport size is optional in JSON. The depth of the
/// projection cube defaults to 400.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParams3D {
    #[serde(default)]
    pub anchor: Vec3,
    #[serde(default = "default_scale_3d")]
    pub scale: Vec3,
    /// Rotation in degrees around X, Y and Z, applied in that order
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub translation: Vec3,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_depth")]
    pub depth: f64,
}

impl FrameParams3D {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            anchor: Vec3::default(),
            scale: default_scale_3d(),
            rotation: Vec3::default(),
            translation: Vec3::default(),
            width,
            height,
            depth: default_depth(),
        }
    }

    /// The steps in standard order: anchor, scale, rotate X, Y, Z,
    /// translate, project.
    pub fn steps(&self) -> [Transform3D; 7] {
        let rotate = |angle, axis| Transform3D::Rotate { angle, axis };
        [
            Transform3D::Anchor(self.anchor),
            Transform3D::Scale(self.scale),
            rotate(self.rotation.x, Axis::X),
            rotate(self.rotation.y, Axis::Y),
            rotate(self.rotation.z, Axis::Z),
            Transform3D::Translate(self.translation),
            Transform3D::Project {
                width: self.width,
                height: self.height,
                depth: self.depth,
            },
        ]
    }

    pub fn to_chain(&self) -> TransformChain3D {
        TransformChain3D {
            steps: self.steps().to_vec(),
        }
    }

    /// Same result as `to_chain().build()`, folded on the stack.
    pub fn matrix(&self) -> Result<Matrix3D, MatrixError> {
        self.steps()
            .iter()
            .try_fold(Matrix3D::identity(), |acc, step| {
                Ok(Matrix3D::multiply(&step.to_matrix()?, &acc))
            })
    }
}

/// Per frame inputs of a 2D draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParams2D {
    #[serde(default)]
    pub anchor: Vec2,
    #[serde(default = "default_scale_2d")]
    pub scale: Vec2,
    /// Rotation in degrees
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub translation: Vec2,
    pub width: f64,
    pub height: f64,
}

impl FrameParams2D {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            anchor: Vec2::default(),
            scale: default_scale_2d(),
            angle: 0.0,
            translation: Vec2::default(),
            width,
            height,
        }
    }

    pub fn steps(&self) -> [Transform2D; 5] {
        [
            Transform2D::Anchor(self.anchor),
            Transform2D::Scale(self.scale),
            Transform2D::Rotate { angle: self.angle },
            Transform2D::Translate(self.translation),
            Transform2D::Project {
                width: self.width,
                height: self.height,
            },
        ]
    }

    pub fn to_chain(&self) -> TransformChain2D {
        TransformChain2D {
            steps: self.steps().to_vec(),
        }
    }

    pub fn matrix(&self) -> Result<Matrix2D, MatrixError> {
        self.steps()
            .iter()
            .try_fold(Matrix2D::identity(), |acc, step| {
                Ok(Matrix2D::multiply(&step.to_matrix()?, &acc))
            })
    }
}
