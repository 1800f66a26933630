//! Rotation quaternions.
//!
//! [`Quaternion`] stores `(x, y, z, w)` with `(x, y, z)` the vector part and `w`
//! the scalar part. `q1 * q2` is the Hamilton product (apply `q2` first, then
//! `q1`) and `q * v` rotates a [`Vector3`].

use std::fmt;
use std::ops::{Mul, MulAssign};

use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::ops::{cos_between, length};
use crate::vector3::Vector3;

/// A quaternion representing a rotation in 3D space.
///
/// Most constructors produce unit quaternions, but composition and rotation
/// are defined for any non-zero quaternion. Equality is exact and
/// component-wise, so `q` and `-q` (the same rotation) compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// The identity rotation, `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Constructs a quaternion from raw components. No normalisation is done.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A rotation of `degrees` around `axis`.
    ///
    /// The axis does not need to be normalised. A zero-length axis yields
    /// [`Quaternion::IDENTITY`].
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, degrees: f32) -> Self {
        let Ok(axis) = axis.try_normalize() else {
            return Self::IDENTITY;
        };
        let (sin, cos) = (degrees.to_radians() * 0.5).sin_cos();
        Self::new(axis.x() * sin, axis.y() * sin, axis.z() * sin, cos)
    }

    /// A rotation from Euler angles in degrees, applied around z first, then
    /// x, then y.
    #[must_use]
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_axis_angle(Vector3::UP, y)
            * Self::from_axis_angle(Vector3::RIGHT, x)
            * Self::from_axis_angle(Vector3::FORWARD, z)
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

    /// W component (scalar part).
    #[inline]
    #[must_use]
    pub const fn w(self) -> f32 {
        self.w
    }

    /// Overwrites all four components with those of `other`.
    #[inline]
    pub fn set(&mut self, other: Self) {
        *self = other;
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    #[must_use]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Dot product of two quaternions viewed as 4D vectors.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// The components as `[x, y, z, w]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Length of the quaternion viewed as a 4D vector; finite for every
    /// finite quaternion.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        length(&self.to_array())
    }

    /// Unit-length copy.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] for the zero quaternion.
    pub fn try_normalize(self) -> Result<Self, MathError> {
        let length = self.magnitude();
        if length == 0.0 || !length.is_finite() {
            return Err(MathError::ZeroLength {
                type_name: "Quaternion",
            });
        }
        Ok(Self::new(
            self.x / length,
            self.y / length,
            self.z / length,
            self.w / length,
        ))
    }

    /// Unit-length copy, or [`Quaternion::IDENTITY`] for the zero quaternion.
    #[must_use]
    pub fn normalized(self) -> Self {
        self.try_normalize().unwrap_or(Self::IDENTITY)
    }

    /// `(-x, -y, -z, w)`. Equal to the inverse for unit quaternions.
    #[inline]
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// The multiplicative inverse, `conjugate / |q|²`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] for the zero quaternion, which has
    /// no inverse.
    pub fn try_inverse(self) -> Result<Self, MathError> {
        // conjugate(q / |q|) / |q|, which avoids squaring the components.
        let unit = self.try_normalize()?.conjugate();
        let length = self.magnitude();
        Ok(Self::new(
            unit.x / length,
            unit.y / length,
            unit.z / length,
            unit.w / length,
        ))
    }

    /// Rotates `v` by this quaternion: the vector part of `q · (0, v) · q⁻¹`.
    ///
    /// The zero quaternion has no inverse; rotating by it leaves `v`
    /// unchanged.
    #[must_use]
    pub fn rotate(self, v: Vector3) -> Vector3 {
        let Ok(inverse) = self.try_inverse() else {
            return v;
        };
        let pure = Self::new(v.x(), v.y(), v.z(), 0.0);
        (self * pure * inverse).xyz()
    }

    /// The angle in degrees of the rotation that takes `self` to `to`, in
    /// `[0, 180]`.
    ///
    /// `q` and `-q` describe the same rotation, so the absolute value of the
    /// normalised dot product is used. Returns `0.0` if either quaternion is
    /// zero.
    #[must_use]
    pub fn angle(self, to: Self) -> f32 {
        cos_between(self.to_array(), to.to_array())
            .map_or(0.0, |cos_half| 2.0 * cos_half.abs().acos().to_degrees())
    }

    /// Returns `true` if every component differs from `rhs` by at most
    /// `max_abs_diff`.
    #[must_use]
    pub fn abs_diff_eq(self, rhs: Self, max_abs_diff: f32) -> bool {
        (self.x - rhs.x).abs() <= max_abs_diff
            && (self.y - rhs.y).abs() <= max_abs_diff
            && (self.z - rhs.z).abs() <= max_abs_diff
            && (self.w - rhs.w).abs() <= max_abs_diff
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product: the rotation `rhs` followed by `self`.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate(rhs)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({}, {}, {}, {})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl From<glam::Quat> for Quaternion {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for glam::Quat {
    fn from(q: Quaternion) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
