//! Errors raised by the world registry and component handles.

use crate::entity::Entity;

/// Errors that can occur when resolving game objects and components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// The handle does not refer to a live game object.
    #[error("{0} is not a live game object")]
    EntityNotFound(Entity),

    /// The game object has no component of the requested type.
    #[error("{entity} has no {component} component")]
    ComponentNotFound {
        entity: Entity,
        component: &'static str,
    },

    /// A component is stored under the requested type id but holds a
    /// different Rust type (two component types share a `type_name`).
    #[error("component stored on {entity} as {component} has a different type")]
    TypeMismatch {
        entity: Entity,
        component: &'static str,
    },

    /// The game object already has a component of this type and the world is
    /// not configured to replace it.
    #[error("{entity} already has a {component} component")]
    DuplicateComponent {
        entity: Entity,
        component: &'static str,
    },

    /// The component handle was never attached to a game object.
    #[error("component is not attached to a game object")]
    Detached,
}
