//! # engine_math
//!
//! Value types for the engine scene model:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] — component-wise vector algebra.
//! - [`Quaternion`] — rotations, composed with the Hamilton product.
//! - [`Transform`] — position, rotation and scale of a game object.
//! - [`MathError`] — failures of the checked (`try_*`, `checked_*`) operations.
//!
//! Every type converts to and from its [`glam`] counterpart, which is
//! re-exported for callers that need matrices.

pub mod error;
mod ops;
pub mod quaternion;
pub mod transform;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use glam;

pub use error::MathError;
pub use quaternion::Quaternion;
pub use transform::Transform;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
