//! Game session context handed to scheduled tasks

use crate::config::HitboxConfig;
use crate::ecs::World;
use crate::physics::{CollisionEngine, HitboxRegistry};

/// Mutable state for one game session
///
/// The hitbox registry lives here rather than in global state; its lifetime
/// is the session's lifetime.
#[derive(Default)]
pub struct Session {
    /// Sprites and the kind index
    pub world: World,
    /// Hitbox records
    pub hitboxes: HitboxRegistry,
    /// Session settings; `increase_smoothly` takes its step period from here
    pub config: HitboxConfig,
}

impl Session {
    /// Create an empty session
    pub fn new(config: HitboxConfig) -> Self {
        Self {
            world: World::new(),
            hitboxes: HitboxRegistry::new(),
            config,
        }
    }

    /// Collision queries against this session's registry
    pub fn collision(&self) -> CollisionEngine<'_> {
        CollisionEngine::new(&self.hitboxes)
    }
}
