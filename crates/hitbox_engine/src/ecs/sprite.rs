//! Sprites: an entity with a visual frame and a kind tag

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::foundation::math::Rect;

/// Opaque category tag used to select sprite subsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteKind(pub u32);

/// A game entity as seen by the hitbox layer
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    entity: Entity,
    kind: SpriteKind,
    /// Visual frame, moved by the game every tick
    pub frame: Rect,
}

impl Sprite {
    pub(crate) const fn new(entity: Entity, kind: SpriteKind, frame: Rect) -> Self {
        Self { entity, kind, frame }
    }

    /// Identity of this sprite
    pub const fn entity(&self) -> Entity {
        self.entity
    }

    /// Category tag
    pub const fn kind(&self) -> SpriteKind {
        self.kind
    }

    /// Left edge of the visual frame
    pub const fn left(&self) -> f32 {
        self.frame.x
    }

    /// Top edge of the visual frame
    pub const fn top(&self) -> f32 {
        self.frame.y
    }

    /// Right edge of the visual frame
    pub fn right(&self) -> f32 {
        self.frame.right()
    }

    /// Bottom edge of the visual frame
    pub fn bottom(&self) -> f32 {
        self.frame.bottom()
    }

    /// Visual width
    pub const fn width(&self) -> f32 {
        self.frame.width
    }

    /// Visual height
    pub const fn height(&self) -> f32 {
        self.frame.height
    }

    /// Move the top-left corner of the visual frame
    pub fn set_position(&mut self, left: f32, top: f32) {
        self.frame.x = left;
        self.frame.y = top;
    }

    /// Move the visual frame by `(dx, dy)`
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.frame = self.frame.translated(dx, dy);
    }
}
