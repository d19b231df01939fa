//! Host-side entity layer
//!
//! The hitbox layer decorates sprites it does not own. This module provides
//! the pieces a game engine normally supplies: sprite identity and frames,
//! a kind index, and a frame/interval scheduler.

pub mod entity;
pub mod sprite;
pub mod world;
pub mod scheduler;

pub use entity::Entity;
pub use sprite::{Sprite, SpriteKind};
pub use world::World;
pub use scheduler::{Scheduler, TaskHandle};
