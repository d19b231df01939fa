//! Hitbox records
//!
//! A hitbox is stored relative to its sprite's visual frame, so it follows
//! the sprite as the game moves it. The world-space rectangle is derived on
//! demand by [`HitboxRecord::effective_rect`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ecs::{Entity, Sprite};
use crate::foundation::math::Rect;

/// Offset and extent of a sprite's hitbox
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitboxRecord {
    /// Horizontal offset of the hitbox origin from the sprite's left edge
    pub x_offset: f32,
    /// Vertical offset of the hitbox origin from the sprite's top edge
    pub y_offset: f32,
    /// Hitbox width
    pub width: f32,
    /// Hitbox height
    pub height: f32,
}

impl HitboxRecord {
    /// Create a record from explicit parameters
    pub const fn new(x_offset: f32, y_offset: f32, width: f32, height: f32) -> Self {
        Self { x_offset, y_offset, width, height }
    }

    /// Record that coincides with the sprite's current visual frame
    pub const fn for_sprite(sprite: &Sprite) -> Self {
        Self::new(0.0, 0.0, sprite.width(), sprite.height())
    }

    /// World-space hitbox for a sprite at `frame`.
    ///
    /// Offsets are subtracted from the frame origin: a positive `x_offset`
    /// moves the hitbox left, a positive `y_offset` moves it up.
    pub fn effective_rect(&self, frame: &Rect) -> Rect {
        Rect::new(
            frame.x - self.x_offset,
            frame.y - self.y_offset,
            self.width,
            self.height,
        )
    }

    /// Read one scalar parameter
    pub const fn get(&self, parameter: HitboxParameter) -> f32 {
        match parameter {
            HitboxParameter::XOffset => self.x_offset,
            HitboxParameter::YOffset => self.y_offset,
            HitboxParameter::Width => self.width,
            HitboxParameter::Height => self.height,
        }
    }

    /// Mutable access to one scalar parameter
    pub fn get_mut(&mut self, parameter: HitboxParameter) -> &mut f32 {
        match parameter {
            HitboxParameter::XOffset => &mut self.x_offset,
            HitboxParameter::YOffset => &mut self.y_offset,
            HitboxParameter::Width => &mut self.width,
            HitboxParameter::Height => &mut self.height,
        }
    }
}

/// Stored hitbox parameter that can be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitboxParameter {
    /// Horizontal offset
    XOffset,
    /// Vertical offset
    YOffset,
    /// Width
    Width,
    /// Height
    Height,
}

/// Readable hitbox value, stored or derived from the sprite's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitboxField {
    /// Left edge of the effective hitbox
    Left,
    /// Right edge of the effective hitbox
    Right,
    /// Top edge of the effective hitbox
    Top,
    /// Bottom edge of the effective hitbox
    Bottom,
    /// Stored horizontal offset
    XOffset,
    /// Stored vertical offset
    YOffset,
    /// Stored width
    Width,
    /// Stored height
    Height,
}

/// Hitbox layer errors
///
/// All of these are caller errors: the failing operation changes nothing.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HitboxError {
    /// The entity already has a hitbox
    #[error("{0} already has a hitbox")]
    DuplicateHitbox(Entity),

    /// The entity has no hitbox
    #[error("{0} doesn't have a hitbox yet")]
    MissingHitbox(Entity),

    /// Smooth increase duration must be positive and finite
    #[error("Invalid smooth increase duration: {0}s")]
    InvalidDuration(f32),
}
