//! # Hitbox Engine
//!
//! Secondary axis-aligned hitboxes for 2D sprites.
//!
//! A sprite's visual frame is often a poor collision shape. This crate lets a
//! game attach an independently sized and offset hitbox to any sprite, then:
//!
//! - **Test overlap** between a sprite's frame and a hitbox, or between two hitboxes
//! - **Resolve the side** of a collision for directional response (landing vs. bumping)
//! - **Watch sprite kinds** for pairwise hitbox collisions every frame
//! - **Animate** a hitbox parameter smoothly over time
//!
//! ## Quick Start
//!
//! ```rust
//! use hitbox_engine::prelude::*;
//!
//! let mut session = Session::default();
//! let player = session.world.spawn(SpriteKind(0), Rect::new(0.0, 0.0, 16.0, 16.0));
//! let crate_box = session.world.spawn(SpriteKind(1), Rect::new(4.0, 14.0, 16.0, 16.0));
//!
//! for sprite in session.world.sprites() {
//!     session.hitboxes.create(sprite)?;
//! }
//!
//! let engine = session.collision();
//! let player = session.world.get(player).unwrap();
//! let crate_box = session.world.get(crate_box).unwrap();
//! assert!(engine.are_hitting(player, crate_box)?);
//! assert_eq!(engine.side_of_collision(player, crate_box)?, Some(CollisionSide::Top));
//! # Ok::<(), HitboxError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;

mod session;

pub use session::Session;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        Session,
        config::{Config, ConfigError, HitboxConfig},
        ecs::{Entity, Scheduler, Sprite, SpriteKind, TaskHandle, World},
        foundation::math::{Rect, Vec2},
        physics::{
            increase_smoothly, increase_smoothly_with_period, on_hitbox_collide,
            CollisionEngine, CollisionSide, HitboxError, HitboxField, HitboxParameter,
            HitboxRecord, HitboxRegistry,
        },
    };
}
