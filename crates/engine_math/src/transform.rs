//! Spatial transform record.
//!
//! [`Transform`] stores the position, rotation and scale of a single game
//! object. There is no parent/child linkage: every transform is expressed in
//! world space.

use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;
use crate::vector3::Vector3;

/// Position, rotation and scale of an object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vector3,
    /// World-space rotation.
    pub rotation: Quaternion,
    /// Per-axis scale.
    pub scale: Vector3,
}

impl Transform {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vector3::ZERO,
        rotation: Quaternion::IDENTITY,
        scale: Vector3::ONE,
    };

    /// Create a new transform with the given position and default rotation/scale.
    #[must_use]
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Create a new transform with position and rotation.
    #[must_use]
    pub fn from_position_rotation(position: Vector3, rotation: Quaternion) -> Self {
        Self {
            position,
            rotation,
            ..Self::IDENTITY
        }
    }

    /// The local forward axis (`+z`) rotated into world space.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        self.rotation * Vector3::FORWARD
    }

    /// The local right axis (`+x`) rotated into world space.
    #[must_use]
    pub fn right(&self) -> Vector3 {
        self.rotation * Vector3::RIGHT
    }

    /// The local up axis (`+y`) rotated into world space.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.rotation * Vector3::UP
    }

    /// Maps a point from local space to world space: scale, then rotate, then
    /// translate.
    #[must_use]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.position + self.rotation * point.scale(self.scale)
    }

    /// Compute the 4×4 model matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(
            self.scale.into(),
            self.rotation.into(),
            self.position.into(),
        )
    }

    /// Translate the transform by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: Vector3) -> Self {
        self.position += offset;
        self
    }

    /// Rotate the transform by the given quaternion.
    #[must_use]
    pub fn rotated(mut self, rotation: Quaternion) -> Self {
        self.rotation = rotation * self.rotation;
        self
    }

    /// Apply a uniform scale factor.
    #[must_use]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
