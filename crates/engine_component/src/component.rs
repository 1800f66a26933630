//! Components: typed capability records attached to game objects.
//!
//! A game object's components live in the [`World`]; callers and other
//! components refer to them through a [`ComponentHandle`], which carries the
//! owning [`Entity`] and a tag but never the component data itself.
//!
//! ## Type identity
//!
//! [`ComponentTypeId`] is derived from the component's **string name** using
//! the FNV-1a 64-bit hash algorithm, so the id is stable across builds and
//! does not depend on `std::any::TypeId`.

use std::any::Any;

use engine_math::Transform;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::ComponentError;
use crate::game_object::GameObject;
use crate::object::Object;
use crate::world::World;

/// A stable identifier for a component type, the FNV-1a 64-bit hash of its
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the [`ComponentTypeId`] for a component name.
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325
    /// for each byte in name.as_bytes():
    ///     hash = (hash XOR byte) * 0x00000100000001b3
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// The id of component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// Data that can be attached to a game object.
///
/// # Examples
///
/// ```rust
/// use engine_component::Component;
///
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
/// ```
pub trait Component: Any + Send + Sync + 'static {
    /// A human-readable name for this component type. It is also the key the
    /// world stores the component under, so it must be unique per type.
    fn type_name() -> &'static str;

    /// Returns the [`ComponentTypeId`] for this component.
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }
}

/// A reference to one component on one game object.
///
/// The handle does not own the game object or the component; both are
/// resolved through the [`World`] on every access, so a handle outliving its
/// game object simply fails with [`ComponentError::EntityNotFound`]. A
/// default-constructed handle is detached and fails every lookup with
/// [`ComponentError::Detached`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentHandle {
    object: Object,
    game_object: Entity,
    component_type: Option<ComponentTypeId>,
    tag: String,
}

impl ComponentHandle {
    /// A handle that is not attached to any game object.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    pub(crate) fn attached<T: Component>(game_object: Entity) -> Self {
        let mut object = Object::new(T::type_name());
        object.set_instance_id(game_object);
        Self {
            object,
            game_object,
            component_type: Some(T::component_type_id()),
            tag: String::new(),
        }
    }

    /// Identity of the component; its name is the component type name.
    #[must_use]
    pub fn object(&self) -> &Object {
        &self.object
    }

    /// The game object this component is attached to, or
    /// [`Entity::INVALID`] if detached.
    #[must_use]
    pub fn game_object(&self) -> Entity {
        self.game_object
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.game_object.is_valid()
    }

    /// The type of component this handle refers to; `None` when detached.
    #[must_use]
    pub fn component_type(&self) -> Option<ComponentTypeId> {
        self.component_type
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets the tag. Tag queries on the [`World`] only see tags set on the
    /// stored handle, as returned by [`World::add_component`] or
    /// [`World::handle_mut`]; a cloned handle is a snapshot.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Is this component tagged with `tag`?
    #[must_use]
    pub fn compare_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    fn owner(&self) -> Result<Entity, ComponentError> {
        if self.is_attached() {
            Ok(self.game_object)
        } else {
            Err(ComponentError::Detached)
        }
    }

    /// Resolves the game object this component is attached to.
    ///
    /// # Errors
    ///
    /// [`ComponentError::Detached`] for a detached handle,
    /// [`ComponentError::EntityNotFound`] if the game object was despawned.
    pub fn resolve<'w>(&self, world: &'w World) -> Result<&'w GameObject, ComponentError> {
        let entity = self.owner()?;
        world
            .game_object(entity)
            .ok_or(ComponentError::EntityNotFound(entity))
    }

    /// The transform of the game object this component is attached to.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn transform<'w>(&self, world: &'w World) -> Result<&'w Transform, ComponentError> {
        self.resolve(world).map(GameObject::transform)
    }

    /// Looks up a sibling component of type `T` on the same game object.
    ///
    /// # Errors
    ///
    /// [`ComponentError::Detached`] for a detached handle, otherwise whatever
    /// [`World::get_component`] reports.
    pub fn get_component<'w, T: Component>(
        &self,
        world: &'w World,
    ) -> Result<&'w T, ComponentError> {
        world.get_component::<T>(self.owner()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(f32);

    impl Component for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    struct Velocity;

    impl Component for Velocity {
        fn type_name() -> &'static str {
            "Velocity"
        }
    }

    #[test]
    fn test_component_type_id_matches_from_name() {
        assert_eq!(Health::component_type_id(), ComponentTypeId::from_name("Health"));
        assert_eq!(ComponentTypeId::of::<Health>(), Health::component_type_id());
    }

    #[test]
    fn test_component_type_id_differs_between_types() {
        assert_ne!(Health::component_type_id(), Velocity::component_type_id());
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(
            ComponentTypeId::from_name(""),
            ComponentTypeId(0xcbf2_9ce4_8422_2325)
        );
        assert_eq!(
            ComponentTypeId::from_name("a"),
            ComponentTypeId(0xaf63_dc4c_8601_ec8c)
        );
    }

    #[test]
    fn test_detached_handle() {
        let handle = ComponentHandle::detached();
        let world = World::new();
        assert!(!handle.is_attached());
        assert_eq!(handle.component_type(), None);
        assert_eq!(handle.resolve(&world).err(), Some(ComponentError::Detached));
        assert_eq!(
            handle.get_component::<Health>(&world).err(),
            Some(ComponentError::Detached)
        );
    }

    #[test]
    fn test_compare_tag() {
        let mut handle = ComponentHandle::detached();
        assert!(handle.compare_tag(""));
        handle.set_tag("Player");
        assert!(handle.compare_tag("Player"));
        assert!(!handle.compare_tag("player"));
    }

    #[test]
    fn test_sibling_lookup_and_transform() {
        let mut world = World::new();
        let entity = world.spawn_named("Hero");
        let handle = world.add_component(entity, Velocity).unwrap().clone();
        world.add_component(entity, Health(75.0)).unwrap();

        assert_eq!(handle.object().name(), "Velocity");
        assert_eq!(handle.object().instance_id(), entity);
        assert_eq!(handle.resolve(&world).unwrap().name(), "Hero");
        assert_eq!(*handle.transform(&world).unwrap(), Transform::IDENTITY);
        assert_eq!(handle.get_component::<Health>(&world).unwrap().0, 75.0);
    }

    #[test]
    fn test_handle_outliving_game_object() {
        let mut world = World::new();
        let entity = world.spawn();
        let handle = world.add_component(entity, Velocity).unwrap().clone();
        assert!(world.despawn(entity));
        assert_eq!(
            handle.resolve(&world).err(),
            Some(ComponentError::EntityNotFound(entity))
        );
    }
}
