//! The world registry.
//!
//! The [`World`] owns every game object and every component. Game objects are
//! addressed by [`Entity`] handles; components are stored per entity in a map
//! keyed by [`ComponentTypeId`] and retrieved with a checked downcast, so a
//! lookup for the wrong type is reported rather than coerced.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use engine_math::Transform;
use tracing::{debug, trace, warn};

use crate::component::{Component, ComponentHandle, ComponentTypeId};
use crate::config::WorldConfig;
use crate::entity::{Entity, EntityAllocator};
use crate::error::ComponentError;
use crate::game_object::GameObject;

/// One attached component: its handle (tag and owner) and its data.
#[derive(Debug)]
struct ComponentSlot {
    handle: ComponentHandle,
    value: Box<dyn Any + Send + Sync>,
}

/// Owner of all game objects and their components.
#[derive(Debug)]
pub struct World {
    config: WorldConfig,
    /// Entity handle allocator.
    allocator: EntityAllocator,
    /// Live game objects.
    game_objects: HashMap<Entity, GameObject>,
    /// Components per game object, keyed by component type.
    components: HashMap<Entity, HashMap<ComponentTypeId, ComponentSlot>>,
}

impl World {
    /// Create an empty world with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create an empty world with the given configuration.
    #[must_use]
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            allocator: EntityAllocator::new(),
            game_objects: HashMap::with_capacity(config.initial_capacity),
            components: HashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Spawn a game object named with [`WorldConfig::default_name`].
    pub fn spawn(&mut self) -> Entity {
        let name = self.config.default_name.clone();
        self.insert(GameObject::with_name(name))
    }

    /// Spawn a game object with the given name.
    pub fn spawn_named(&mut self, name: impl Into<String>) -> Entity {
        self.insert(GameObject::with_name(name))
    }

    /// Take ownership of an existing game object. Its instance id becomes the
    /// returned entity.
    pub fn insert(&mut self, mut game_object: GameObject) -> Entity {
        let entity = self.allocator.allocate();
        game_object.bind(entity);
        debug!(%entity, name = game_object.name(), "spawned game object");
        self.game_objects.insert(entity, game_object);
        entity
    }

    /// Destroy a game object together with all of its components.
    ///
    /// Returns `true` if the game object existed.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let Some(game_object) = self.game_objects.remove(&entity) else {
            return false;
        };
        let removed = self
            .components
            .remove(&entity)
            .map_or(0, |slots| slots.len());
        debug!(
            %entity,
            name = game_object.name(),
            components = removed,
            "despawned game object"
        );
        true
    }

    /// Returns `true` if `entity` is a live game object.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.game_objects.contains_key(&entity)
    }

    #[must_use]
    pub fn game_object(&self, entity: Entity) -> Option<&GameObject> {
        self.game_objects.get(&entity)
    }

    pub fn game_object_mut(&mut self, entity: Entity) -> Option<&mut GameObject> {
        self.game_objects.get_mut(&entity)
    }

    /// The transform of a game object.
    ///
    /// # Errors
    ///
    /// [`ComponentError::EntityNotFound`] if `entity` is not live.
    pub fn transform(&self, entity: Entity) -> Result<&Transform, ComponentError> {
        self.game_object(entity)
            .map(GameObject::transform)
            .ok_or(ComponentError::EntityNotFound(entity))
    }

    /// Mutable access to the transform of a game object.
    ///
    /// # Errors
    ///
    /// [`ComponentError::EntityNotFound`] if `entity` is not live.
    pub fn transform_mut(&mut self, entity: Entity) -> Result<&mut Transform, ComponentError> {
        self.game_object_mut(entity)
            .map(GameObject::transform_mut)
            .ok_or(ComponentError::EntityNotFound(entity))
    }

    /// Find a game object by name. When several share the name, the one
    /// spawned first wins.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Entity> {
        self.game_objects
            .iter()
            .filter(|(_, go)| go.name() == name)
            .map(|(&entity, _)| entity)
            .min()
    }

    /// All live game objects, in spawn order.
    #[must_use]
    pub fn entities(&self) -> Vec<Entity> {
        let mut all: Vec<Entity> = self.game_objects.keys().copied().collect();
        all.sort();
        all
    }

    /// Returns the number of live game objects.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.game_objects.len()
    }

    /// Attach `value` to a game object and return the stored handle, so the
    /// caller can tag it in place.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::EntityNotFound`] if `entity` is not live.
    /// - [`ComponentError::DuplicateComponent`] if the game object already has
    ///   a `T` and [`WorldConfig::replace_components`] is off.
    pub fn add_component<T: Component>(
        &mut self,
        entity: Entity,
        value: T,
    ) -> Result<&mut ComponentHandle, ComponentError> {
        if !self.contains(entity) {
            return Err(ComponentError::EntityNotFound(entity));
        }
        let slot = ComponentSlot {
            handle: ComponentHandle::attached::<T>(entity),
            value: Box::new(value),
        };
        let slots = self.components.entry(entity).or_default();
        let (stored, replaced) = match slots.entry(T::component_type_id()) {
            Entry::Occupied(mut occupied) => {
                if !self.config.replace_components {
                    return Err(ComponentError::DuplicateComponent {
                        entity,
                        component: T::type_name(),
                    });
                }
                occupied.insert(slot);
                (occupied.into_mut(), true)
            }
            Entry::Vacant(vacant) => (vacant.insert(slot), false),
        };
        debug!(%entity, component = T::type_name(), replaced, "attached component");
        Ok(&mut stored.handle)
    }

    fn slot(&self, entity: Entity, type_id: ComponentTypeId) -> Option<&ComponentSlot> {
        self.components.get(&entity)?.get(&type_id)
    }

    fn slot_mut(&mut self, entity: Entity, type_id: ComponentTypeId) -> Option<&mut ComponentSlot> {
        self.components.get_mut(&entity)?.get_mut(&type_id)
    }

    /// Checks that `entity` is live and has a slot for `T`.
    fn ensure_slot<T: Component>(&self, entity: Entity) -> Result<(), ComponentError> {
        if !self.contains(entity) {
            return Err(ComponentError::EntityNotFound(entity));
        }
        if self.slot(entity, T::component_type_id()).is_none() {
            trace!(%entity, component = T::type_name(), "component not found");
            return Err(ComponentError::ComponentNotFound {
                entity,
                component: T::type_name(),
            });
        }
        Ok(())
    }

    fn mismatch<T: Component>(entity: Entity) -> ComponentError {
        warn!(
            %entity,
            component = T::type_name(),
            "stored component has a different type under the same name"
        );
        ComponentError::TypeMismatch {
            entity,
            component: T::type_name(),
        }
    }

    /// Capability query: the `T` attached to `entity`.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::EntityNotFound`] if `entity` is not live.
    /// - [`ComponentError::ComponentNotFound`] if it has no `T`.
    /// - [`ComponentError::TypeMismatch`] if the component stored under
    ///   `T`'s type id is not a `T`.
    pub fn get_component<T: Component>(&self, entity: Entity) -> Result<&T, ComponentError> {
        self.ensure_slot::<T>(entity)?;
        self.slot(entity, T::component_type_id())
            .and_then(|slot| slot.value.downcast_ref::<T>())
            .ok_or_else(|| Self::mismatch::<T>(entity))
    }

    /// Mutable capability query. Fails like [`get_component`](Self::get_component).
    ///
    /// # Errors
    ///
    /// See [`get_component`](Self::get_component).
    pub fn get_component_mut<T: Component>(
        &mut self,
        entity: Entity,
    ) -> Result<&mut T, ComponentError> {
        self.ensure_slot::<T>(entity)?;
        self.slot_mut(entity, T::component_type_id())
            .and_then(|slot| slot.value.downcast_mut::<T>())
            .ok_or_else(|| Self::mismatch::<T>(entity))
    }

    /// Returns `true` if `entity` has a component of type `T`.
    #[must_use]
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_ok()
    }

    /// The handle of the `T` attached to `entity`.
    ///
    /// # Errors
    ///
    /// See [`get_component`](Self::get_component).
    pub fn handle<T: Component>(&self, entity: Entity) -> Result<&ComponentHandle, ComponentError> {
        self.get_component::<T>(entity)?;
        self.slot(entity, T::component_type_id())
            .map(|slot| &slot.handle)
            .ok_or_else(|| Self::mismatch::<T>(entity))
    }

    /// Mutable handle of the `T` attached to `entity`, e.g. to change its tag.
    ///
    /// # Errors
    ///
    /// See [`get_component`](Self::get_component).
    pub fn handle_mut<T: Component>(
        &mut self,
        entity: Entity,
    ) -> Result<&mut ComponentHandle, ComponentError> {
        self.get_component::<T>(entity)?;
        self.slot_mut(entity, T::component_type_id())
            .map(|slot| &mut slot.handle)
            .ok_or_else(|| Self::mismatch::<T>(entity))
    }

    /// Detach the `T` from `entity` and return it.
    ///
    /// # Errors
    ///
    /// See [`get_component`](Self::get_component). On a type mismatch the
    /// stored component is left in place.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Result<T, ComponentError> {
        self.get_component::<T>(entity)?;
        let type_id = T::component_type_id();
        let slot = self
            .components
            .get_mut(&entity)
            .and_then(|slots| slots.remove(&type_id))
            .ok_or(ComponentError::ComponentNotFound {
                entity,
                component: T::type_name(),
            })?;
        match slot.value.downcast::<T>() {
            Ok(value) => {
                debug!(%entity, component = T::type_name(), "detached component");
                Ok(*value)
            }
            Err(value) => {
                if let Some(slots) = self.components.get_mut(&entity) {
                    slots.insert(
                        type_id,
                        ComponentSlot {
                            handle: slot.handle,
                            value,
                        },
                    );
                }
                Err(Self::mismatch::<T>(entity))
            }
        }
    }

    /// The component types attached to `entity`, sorted by id.
    ///
    /// # Errors
    ///
    /// [`ComponentError::EntityNotFound`] if `entity` is not live.
    pub fn component_types(&self, entity: Entity) -> Result<Vec<ComponentTypeId>, ComponentError> {
        if !self.contains(entity) {
            return Err(ComponentError::EntityNotFound(entity));
        }
        let mut types: Vec<ComponentTypeId> = self
            .components
            .get(&entity)
            .map(|slots| slots.keys().copied().collect())
            .unwrap_or_default();
        types.sort();
        Ok(types)
    }

    /// All game objects that have a `T`, in spawn order.
    #[must_use]
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        let type_id = T::component_type_id();
        let mut matches: Vec<Entity> = self
            .components
            .iter()
            .filter(|(_, slots)| {
                slots
                    .get(&type_id)
                    .is_some_and(|slot| slot.value.is::<T>())
            })
            .map(|(&entity, _)| entity)
            .collect();
        matches.sort();
        matches
    }

    /// Handles of every component tagged `tag`, ordered by game object.
    #[must_use]
    pub fn components_with_tag(&self, tag: &str) -> Vec<&ComponentHandle> {
        let mut matches: Vec<&ComponentHandle> = self
            .components
            .values()
            .flat_map(HashMap::values)
            .map(|slot| &slot.handle)
            .filter(|handle| handle.compare_tag(tag))
            .collect();
        matches.sort_by_key(|handle| (handle.game_object(), handle.component_type()));
        matches
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
