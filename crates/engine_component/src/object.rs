//! Base identity shared by game objects and components.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Name and editor visibility of anything the engine can reference.
///
/// Equality is structural: two objects are equal when their names and
/// `hide_flags` match, regardless of which world entity (if any) they belong
/// to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Object {
    name: String,
    hide_flags: bool,
    #[serde(skip)]
    instance_id: Entity,
}

impl Object {
    /// Creates a visible object with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Should the object be hidden from the editor?
    #[must_use]
    pub fn hide_flags(&self) -> bool {
        self.hide_flags
    }

    pub fn set_hide_flags(&mut self, hide_flags: bool) {
        self.hide_flags = hide_flags;
    }

    /// The world entity this object was registered as, or
    /// [`Entity::INVALID`] if it was never spawned.
    #[must_use]
    pub fn instance_id(&self) -> Entity {
        self.instance_id
    }

    pub(crate) fn set_instance_id(&mut self, entity: Entity) {
        self.instance_id = entity;
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.hide_flags == other.hide_flags && self.name == other.name
    }
}

impl Eq for Object {}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({:?})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Object::new("Player");
        let b = Object::new("Player");
        assert_eq!(a, b);

        let mut renamed = b.clone();
        renamed.set_name("Enemy");
        assert_ne!(a, renamed);

        let mut hidden = b.clone();
        hidden.set_hide_flags(true);
        assert_ne!(a, hidden);
    }

    #[test]
    fn test_equality_ignores_instance_id() {
        let a = Object::new("Player");
        let mut b = Object::new("Player");
        b.set_instance_id(Entity::from_raw(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unregistered_instance_id_is_invalid() {
        assert_eq!(Object::default().instance_id(), Entity::INVALID);
    }

    #[test]
    fn test_display() {
        assert_eq!(Object::new("Main Camera").to_string(), "Object(\"Main Camera\")");
    }

    #[test]
    fn test_serialization_skips_instance_id() {
        let mut object = Object::new("Light");
        object.set_instance_id(Entity::from_raw(12));
        let bytes = rmp_serde::to_vec_named(&object).unwrap();
        let restored: Object = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(restored, object);
        assert_eq!(restored.instance_id(), Entity::INVALID);
    }
}
