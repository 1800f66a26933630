//! 2D vectors and points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::ops::{angle_degrees, impl_vector_ops, length};
use crate::vector3::Vector3;

/// A 2D vector with `f32` components. See [`Vector3`] for the conventions
/// shared by all vector types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

impl Vector2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
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

    /// Overwrites both components with those of `other`.
    #[inline]
    pub fn set(&mut self, other: Self) {
        *self = other;
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
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
                type_name: "Vector2",
            });
        }
        Ok(self / length)
    }

    /// Unit-length copy, or [`Vector2::ZERO`] if it cannot be normalised.
    #[must_use]
    pub fn normalized(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    #[must_use]
    pub fn distance(self, to: Self) -> f32 {
        (self - to).magnitude()
    }

    /// Unsigned angle in degrees, `0.0` if either vector is zero-length.
    #[must_use]
    pub fn angle(self, to: Self) -> f32 {
        angle_degrees(self.to_array(), to.to_array())
    }

    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y))
    }

    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y))
    }

    /// Multiplies two vectors component-wise.
    #[must_use]
    pub fn scale(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }

    /// Returns a copy with its magnitude clamped to `max_length` (negative
    /// limits count as zero).
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

impl_vector_ops!(Vector2 { x, y });

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl From<Vector3> for Vector2 {
    /// Drops the z component.
    fn from(v: Vector3) -> Self {
        Self::new(v.x(), v.y())
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn samples() -> Vec<Vector2> {
        vec![
            Vector2::new(1.0, 2.0),
            Vector2::new(-4.5, 0.25),
            Vector2::new(0.001, -0.002),
            Vector2::new(1000.0, -250.0),
            Vector2::UP,
            Vector2::LEFT,
        ]
    }

    #[test]
    fn test_distance_3_4() {
        assert_eq!(
            Vector2::distance(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)),
            5.0
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(Vector2::UP, -Vector2::DOWN);
        assert_eq!(Vector2::RIGHT, -Vector2::LEFT);
        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::dot(Vector2::RIGHT, Vector2::UP), 0.0);
    }

    #[test]
    fn test_max_min() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(3.0, 2.0);
        assert_eq!(Vector2::max(a, b), Vector2::new(3.0, 5.0));
        assert_eq!(Vector2::min(a, b), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_normalized() {
        let n = Vector2::new(-3.0, 4.0).normalized();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert!(n.abs_diff_eq(Vector2::new(-0.6, 0.8), 1e-6));
        for v in samples() {
            assert_relative_eq!(v.normalized().magnitude(), 1.0, epsilon = 1e-5);
        }
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
        assert_eq!(
            Vector2::ZERO.try_normalize(),
            Err(MathError::ZeroLength {
                type_name: "Vector2"
            })
        );
    }

    #[test]
    fn test_huge_and_tiny_vectors() {
        let huge = Vector2::new(0.0, -1e20);
        assert_eq!(huge.normalized(), Vector2::DOWN);
        let tiny = Vector2::new(1e-8, 1e-8);
        assert_relative_eq!(tiny.normalized().magnitude(), 1.0, epsilon = 1e-5);
        assert_eq!(tiny.angle(-tiny), 180.0);
    }

    #[test]
    fn test_distance_and_dot_symmetry() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.distance(b), (a - b).magnitude());
                assert_eq!(a.dot(b), b.dot(a));
            }
        }
    }

    #[test]
    fn test_additive_round_trip() {
        for a in samples() {
            for b in samples() {
                assert!((a + b - b).abs_diff_eq(a, 1e-3));
            }
        }
    }

    #[test]
    fn test_scalar_round_trip() {
        for a in samples() {
            assert_eq!(a * 1.0, a);
            assert!((a / 3.0 * 3.0).abs_diff_eq(a, 1e-3));
        }
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(Vector2::RIGHT.angle(Vector2::UP), 90.0, epsilon = 1e-4);
        for a in samples() {
            assert_eq!(a.angle(a), 0.0);
            assert_eq!(a.angle(-a), 180.0);
        }
        assert_eq!(Vector2::ZERO.angle(Vector2::UP), 0.0);
    }

    #[test]
    fn test_clamp_magnitude_rescales() {
        let v = Vector2::new(30.0, 40.0);
        assert!(v.clamp_magnitude(5.0).abs_diff_eq(Vector2::new(3.0, 4.0), 1e-5));
        assert_eq!(Vector2::new(0.3, 0.4).clamp_magnitude(5.0), Vector2::new(0.3, 0.4));
        assert_eq!(v.clamp_magnitude(-1.0), Vector2::ZERO);
    }

    #[test]
    fn test_checked_div() {
        let v = Vector2::new(2.0, -4.0);
        assert_eq!(v.checked_div(2.0), Ok(Vector2::new(1.0, -2.0)));
        assert_eq!(v.checked_div(0.0), Err(MathError::DivisionByZero));
        assert!(!(v / 0.0).is_finite());
    }

    #[test]
    fn test_lerp_and_set() {
        let a = Vector2::ZERO;
        let b = Vector2::new(4.0, -8.0);
        assert_eq!(a.lerp(b, 0.25), Vector2::new(1.0, -2.0));
        assert_eq!(a.lerp(b, -1.0), a);
        let mut v = Vector2::ONE;
        v.set(b);
        assert_eq!((v.x(), v.y()), (4.0, -8.0));
    }

    #[test]
    fn test_conversions() {
        let v = Vector2::from(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert_eq!(Vector2::from([4.0, 5.0]), Vector2::new(4.0, 5.0));
        let g: glam::Vec2 = v.into();
        assert_eq!(g, glam::Vec2::new(1.0, 2.0));
        assert_eq!(Vector2::from(g), v);
    }

    #[test]
    fn test_operators() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::ONE;
        assert_eq!(v, Vector2::new(2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vector2::new(4.0, 6.0));
        v -= Vector2::ONE;
        v /= 0.5;
        assert_eq!(v, Vector2::new(6.0, 10.0));
        assert_eq!(2.0 * Vector2::ONE, Vector2::new(2.0, 2.0));
        assert_eq!(v.scale(Vector2::new(0.5, -1.0)), Vector2::new(3.0, -10.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.5, -2.0).to_string(), "Vector2(1.5, -2)");
    }
}
