//! Demo configuration

use hitbox_engine::config::{Config, HitboxConfig};
use serde::{Deserialize, Serialize};

/// Settings for the headless platformer run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated frame length in milliseconds
    pub frame_ms: f64,
    /// Coins scattered over the level
    pub coin_count: u32,
    /// Seed for coin placement
    pub seed: u64,
    /// Seconds the hazard keeps growing before its animation is cancelled
    pub hazard_growth_seconds: f32,
    /// Hitbox layer settings
    pub hitbox: HitboxConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_ms: 1000.0 / 60.0,
            coin_count: 12,
            seed: 7,
            hazard_growth_seconds: 3.0,
            hitbox: HitboxConfig::default().with_log_level("platformer_demo=info,hitbox_engine=warn"),
        }
    }
}

impl Config for DemoConfig {}
