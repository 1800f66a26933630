//! Math-layer error types.

/// Errors raised by the checked math operations.
///
/// The total operations (`normalized`, the `/` operator) never return these;
/// they follow the documented fallbacks instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Normalising or inverting a value whose length is zero (or not finite).
    #[error("cannot normalise a zero-length {type_name}")]
    ZeroLength {
        /// The value type, e.g. `"Vector3"`.
        type_name: &'static str,
    },

    /// Dividing by a scalar that is zero.
    #[error("division by zero")]
    DivisionByZero,
}
