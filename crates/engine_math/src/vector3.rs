//! 3D vectors and points.
//!
//! [`Vector3`] is the workhorse of the scene model: positions, scales and
//! direction vectors are all `Vector3` values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::ops::{angle_degrees, impl_vector_ops, length};
use crate::vector2::Vector2;

/// A 3D vector with `f32` components.
///
/// Components are read through [`x`](Self::x), [`y`](Self::y) and
/// [`z`](Self::z) and can only be overwritten all at once with
/// [`set`](Self::set). Equality is exact, component-wise; use
/// [`abs_diff_eq`](Self::abs_diff_eq) when comparing computed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 0, 1)`.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// X component.
    #[inline]
    #[must_use]
    pub const fn x(self) -> f32 {
        self.x
    }

    /// Y component.
    #[inline]
    #[must_use]
    pub const fn y(self) -> f32 {
        self.y
    }

    /// Z component.
    #[inline]
    #[must_use]
    pub const fn z(self) -> f32 {
        self.z
    }

    /// Overwrites all three components with those of `other`.
    #[inline]
    pub fn set(&mut self, other: Self) {
        *self = other;
    }

    /// Returns the components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length of the vector. Finite for every finite vector.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        length(&self.to_array())
    }

    /// Squared length. Cheaper than [`magnitude`](Self::magnitude) when only
    /// comparing lengths.
    #[inline]
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Returns this vector scaled to a magnitude of 1.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] if the vector has zero (or
    /// non-finite) length.
    pub fn try_normalize(self) -> Result<Self, MathError> {
        let length = self.magnitude();
        if length == 0.0 || !length.is_finite() {
            return Err(MathError::ZeroLength {
                type_name: "Vector3",
            });
        }
        Ok(self / length)
    }

    /// Returns this vector scaled to a magnitude of 1, or [`Vector3::ZERO`]
    /// if it cannot be normalised.
    #[must_use]
    pub fn normalized(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product. With the direction constants, `RIGHT x UP == FORWARD`.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Distance between two points.
    #[inline]
    #[must_use]
    pub fn distance(self, to: Self) -> f32 {
        (self - to).magnitude()
    }

    /// Unsigned angle in degrees between `self` and `to`, in `[0, 180]`.
    ///
    /// Returns `0.0` if either vector is zero-length.
    #[must_use]
    pub fn angle(self, to: Self) -> f32 {
        angle_degrees(self.to_array(), to.to_array())
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    /// Multiplies two vectors component-wise.
    #[must_use]
    pub fn scale(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    /// Returns a copy with its magnitude clamped to `max_length`.
    ///
    /// Vectors already shorter than `max_length` are returned unchanged. A
    /// negative `max_length` is treated as zero.
    #[must_use]
    pub fn clamp_magnitude(self, max_length: f32) -> Self {
        let max_length = max_length.max(0.0);
        if self.magnitude() > max_length {
            self.normalized() * max_length
        } else {
            self
        }
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self + (to - self) * t
    }
}

impl_vector_ops!(Vector3 { x, y, z });

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Vector2> for Vector3 {
    /// Extends a 2D vector with `z = 0`.
    fn from(v: Vector2) -> Self {
        Self::new(v.x(), v.y(), 0.0)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}
