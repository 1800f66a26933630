//! 4D vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::ops::{angle_degrees, impl_vector_ops, length};
use crate::vector2::Vector2;
use crate::vector3::Vector3;

/// A 4D vector with `f32` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> f32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> f32 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn z(self) -> f32 {
        self.z
    }

    #[inline]
    #[must_use]
    pub const fn w(self) -> f32 {
        self.w
    }

    #[inline]
    pub fn set(&mut self, other: Self) {
        *self = other;
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        length(&self.to_array())
    }

    #[inline]
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] if the vector has zero (or
    /// non-finite) length.
    pub fn try_normalize(self) -> Result<Self, MathError> {
        let length = self.magnitude();
        if length == 0.0 || !length.is_finite() {
            return Err(MathError::ZeroLength {
                type_name: "Vector4",
            });
        }
        Ok(self / length)
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    #[must_use]
    pub fn distance(self, to: Self) -> f32 {
        (self - to).magnitude()
    }

    #[must_use]
    pub fn angle(self, to: Self) -> f32 {
        angle_degrees(self.to_array(), to.to_array())
    }

    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(
            self.x.min(rhs.x),
            self.y.min(rhs.y),
            self.z.min(rhs.z),
            self.w.min(rhs.w),
        )
    }

    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(
            self.x.max(rhs.x),
            self.y.max(rhs.y),
            self.z.max(rhs.z),
            self.w.max(rhs.w),
        )
    }

    #[must_use]
    pub fn scale(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }

    #[must_use]
    pub fn clamp_magnitude(self, max_length: f32) -> Self {
        let max_length = max_length.max(0.0);
        if self.magnitude() > max_length {
            self.normalized() * max_length
        } else {
            self
        }
    }

    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self + (to - self) * t
    }
}

impl_vector_ops!(Vector4 { x, y, z, w });

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector4({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<Vector2> for Vector4 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x(), v.y(), 0.0, 0.0)
    }
}

impl From<Vector3> for Vector4 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x(), v.y(), v.z(), 0.0)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}
