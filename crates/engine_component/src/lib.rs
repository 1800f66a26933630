//! # engine_component
//!
//! The scene object model: what a game object is, how components attach to
//! it, and the registry that owns both.
//!
//! This crate provides:
//!
//! - [`Object`] — name and visibility flag, compared structurally.
//! - [`GameObject`] — an `Object` that owns exactly one
//!   [`Transform`](engine_math::Transform).
//! - [`Entity`] — the handle through which game objects are referenced.
//! - [`Component`] trait and [`ComponentTypeId`] — typed capability records.
//! - [`ComponentHandle`] — a tagged, non-owning reference to one component.
//! - [`World`] — owns game objects and answers capability queries.
//! - [`WorldConfig`] — world settings, optionally read from the environment.

pub mod component;
pub mod config;
pub mod entity;
pub mod error;
pub mod game_object;
pub mod object;
pub mod world;

pub use component::{Component, ComponentHandle, ComponentTypeId};
pub use config::WorldConfig;
pub use entity::{Entity, EntityAllocator};
pub use error::ComponentError;
pub use game_object::GameObject;
pub use object::Object;
pub use world::World;
