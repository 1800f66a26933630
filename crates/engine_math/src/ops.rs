//! Operator impls and helpers shared by the vector types.

/// Largest absolute component. NaN components are ignored.
fn max_abs(components: &[f32]) -> f32 {
    components.iter().fold(0.0, |max, c| c.abs().max(max))
}

/// Euclidean length of `components`.
///
/// The components are divided by the largest of them before squaring, so the
/// result is finite for every finite input instead of overflowing past
/// roughly `1.8e19` or flushing to zero below roughly `1e-19`.
pub(crate) fn length(components: &[f32]) -> f32 {
    let scale = max_abs(components);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let sum: f32 = components.iter().map(|c| (c / scale) * (c / scale)).sum();
    scale * sum.sqrt()
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// Returns `None` when either input is zero-length or not finite. Both inputs
/// are rescaled to a largest component of 1 first, which leaves the angle
/// unchanged and keeps the products in range. `a` against itself gives exactly
/// `1` and against `-a` exactly `-1`.
pub(crate) fn cos_between<const N: usize>(a: [f32; N], b: [f32; N]) -> Option<f32> {
    let (scale_a, scale_b) = (max_abs(&a), max_abs(&b));
    if scale_a == 0.0 || scale_b == 0.0 || !scale_a.is_finite() || !scale_b.is_finite() {
        return None;
    }
    let a = a.map(|c| c / scale_a);
    let b = b.map(|c| c / scale_b);
    let dot: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    let sqr_a: f32 = a.iter().map(|x| x * x).sum();
    let sqr_b: f32 = b.iter().map(|x| x * x).sum();
    Some((dot / (sqr_a * sqr_b).sqrt()).clamp(-1.0, 1.0))
}

/// Unsigned angle in degrees between two vectors, `0.0` if either is
/// degenerate.
pub(crate) fn angle_degrees<const N: usize>(a: [f32; N], b: [f32; N]) -> f32 {
    cos_between(a, b).map_or(0.0, |cos| cos.acos().to_degrees())
}

/// Implements the component-wise arithmetic operators for a vector type whose
/// fields are listed in `{ ... }`.
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl ::std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl ::std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl ::std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl ::std::ops::Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl ::std::ops::Mul<$ty> for f32 {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl ::std::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        /// IEEE-754 division: dividing by zero yields infinities or NaN. Use
        /// `checked_div` to have a zero divisor reported as an error.
        impl ::std::ops::Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl ::std::ops::DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                $(self.$field /= rhs;)+
            }
        }

        impl $ty {
            /// Divides every component by `rhs`, failing on a zero divisor.
            ///
            /// # Errors
            ///
            /// Returns [`MathError::DivisionByZero`](crate::MathError::DivisionByZero)
            /// if `rhs == 0.0`.
            pub fn checked_div(self, rhs: f32) -> Result<Self, $crate::MathError> {
                if rhs == 0.0 {
                    return Err($crate::MathError::DivisionByZero);
                }
                Ok(self / rhs)
            }

            /// Returns `true` if every component differs from `rhs` by at most
            /// `max_abs_diff`.
            #[must_use]
            pub fn abs_diff_eq(self, rhs: Self, max_abs_diff: f32) -> bool {
                true $(&& (self.$field - rhs.$field).abs() <= max_abs_diff)+
            }

            /// Returns `true` if every component is finite.
            #[must_use]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }
        }
    };
}

pub(crate) use impl_vector_ops;
