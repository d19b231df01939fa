//! Hitbox registry and AABB collision queries
//!
//! - [`hitbox`] - hitbox records, field selectors and errors
//! - [`registry`] - entity to hitbox record mapping
//! - [`collision`] - overlap and side-of-collision queries
//! - [`collision_system`] - per-frame pairwise notifier by sprite kind
//! - [`smoothing`] - interval-driven hitbox parameter animation

pub mod hitbox;
pub mod registry;
pub mod collision;
pub mod collision_system;
pub mod smoothing;

pub use hitbox::{HitboxRecord, HitboxParameter, HitboxField, HitboxError};
pub use registry::HitboxRegistry;
pub use collision::{CollisionEngine, CollisionSide};
pub use collision_system::on_hitbox_collide;
pub use smoothing::{increase_smoothly, increase_smoothly_with_period, SmoothIncrease};
