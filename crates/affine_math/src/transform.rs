//! 2D transform value.
//!
//! [`Transform2D`] keeps position, rotation and scale as separate fields and
//! only bakes them into a [`Matrix3`] when asked, which keeps the individual
//! parts editable without decomposing a matrix.

use serde::{Deserialize, Serialize};

use crate::matrix::{self, Matrix3};
use crate::vector::{self, Point2};

/// A 2D transform made of position, rotation and non-uniform scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform2D {
    /// Translation applied last.
    pub position: Point2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Scale factors applied first.
    pub scale: Point2,
}

impl Transform2D {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: [0.0, 0.0],
        rotation: 0.0,
        scale: [1.0, 1.0],
    };

    /// Create a transform at `position` with default rotation and scale.
    #[must_use]
    pub fn from_position(position: Point2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a transform with position and rotation.
    #[must_use]
    pub fn from_position_rotation(position: Point2, rotation: f64) -> Self {
        Self {
            position,
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Bake into a matrix that scales, then rotates, then translates.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3 {
        let m = matrix::translation(self.position[0], self.position[1]);
        let m = matrix::rotate(&m, self.rotation);
        matrix::scale(&m, self.scale[0], self.scale[1])
    }

    /// Apply this transform to a point.
    #[must_use]
    pub fn transform_point(&self, point: Point2) -> Point2 {
        vector::transform_point(&self.to_matrix(), point)
    }

    /// Move by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: Point2) -> Self {
        self.position[0] += offset[0];
        self.position[1] += offset[1];
        self
    }

    /// Add `angle_in_radians` to the rotation.
    #[must_use]
    pub fn rotated(mut self, angle_in_radians: f64) -> Self {
        self.rotation += angle_in_radians;
        self
    }

    /// Multiply both scale factors by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale[0] *= factor;
        self.scale[1] *= factor;
        self
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
