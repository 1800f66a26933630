//! Game objects: named scene entities that own exactly one transform.

use std::fmt;

use engine_math::Transform;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::object::Object;

/// A named scene entity.
///
/// The transform is created with the game object and lives exactly as long as
/// it: it can be mutated in place through [`transform_mut`](Self::transform_mut)
/// but never swapped for another or shared. Equality compares the [`Object`]
/// identity only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameObject {
    object: Object,
    transform: Transform,
}

impl GameObject {
    /// Creates a game object with an empty name and an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game object named `name`.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            object: Object::new(name),
            transform: Transform::IDENTITY,
        }
    }

    #[must_use]
    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// The world entity this game object is registered as.
    #[must_use]
    pub fn instance_id(&self) -> Entity {
        self.object.instance_id()
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub(crate) fn bind(&mut self, entity: Entity) {
        self.object.set_instance_id(entity);
    }
}

impl PartialEq for GameObject {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameObject({:?})", self.name())
    }
}
