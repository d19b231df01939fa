//! Overlap and side-of-collision queries
//!
//! All queries are read-only against the registry and use the sprites'
//! current visual frames, so results always reflect where the game has moved
//! things this tick. Overlap is strict: rectangles that only touch along an
//! edge are not colliding.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hitbox::{HitboxError, HitboxField};
use super::registry::HitboxRegistry;
use crate::ecs::Sprite;
use crate::foundation::math::Rect;

/// Face of the target hitbox that the probe struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionSide {
    /// Probe came from above
    Top,
    /// Probe came from below
    Bottom,
    /// Probe came from the left
    Left,
    /// Probe came from the right
    Right,
}

impl CollisionSide {
    /// Lowercase label ("top", "bottom", "left", "right")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for CollisionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve which face of `target` the `probe` rectangle struck.
///
/// Compares the center delta against the combined half extents, which splits
/// the overlap region into four triangles along its diagonals. Returns `None`
/// when the rectangles are too far apart along either axis.
pub fn side_between(probe: &Rect, target: &Rect) -> Option<CollisionSide> {
    let delta = probe.center() - target.center();
    let extents = probe.half_extents() + target.half_extents();

    if delta.x.abs() > extents.x || delta.y.abs() > extents.y {
        return None;
    }

    let cross_width = extents.x * delta.y;
    let cross_height = extents.y * delta.x;

    let side = if cross_width > cross_height {
        if cross_width > -cross_height {
            CollisionSide::Bottom
        } else {
            CollisionSide::Left
        }
    } else if cross_width > -cross_height {
        CollisionSide::Right
    } else {
        CollisionSide::Top
    };
    Some(side)
}

/// Collision queries bound to a hitbox registry
#[derive(Debug, Clone, Copy)]
pub struct CollisionEngine<'a> {
    registry: &'a HitboxRegistry,
}

impl<'a> CollisionEngine<'a> {
    /// Query against `registry`
    pub const fn new(registry: &'a HitboxRegistry) -> Self {
        Self { registry }
    }

    /// World-space hitbox of a registered sprite
    pub fn hitbox_rect(&self, sprite: &Sprite) -> Result<Rect, HitboxError> {
        let record = self.registry.get(sprite.entity())?;
        Ok(record.effective_rect(&sprite.frame))
    }

    /// Does the probe's visual frame overlap the target's hitbox?
    ///
    /// Only `target` needs a hitbox.
    pub fn is_hitting(&self, probe: &Sprite, target: &Sprite) -> Result<bool, HitboxError> {
        let hitbox = self.hitbox_rect(target)?;
        Ok(hitbox.overlaps(&probe.frame))
    }

    /// Do the two hitboxes overlap? Symmetric in its arguments.
    pub fn are_hitting(&self, probe: &Sprite, target: &Sprite) -> Result<bool, HitboxError> {
        let target_rect = self.hitbox_rect(target)?;
        let probe_rect = self.hitbox_rect(probe)?;
        Ok(target_rect.overlaps(&probe_rect))
    }

    /// Face of the target's hitbox struck by the probe's hitbox, or `None`
    /// when the hitboxes are not overlapping.
    pub fn side_of_collision(
        &self,
        probe: &Sprite,
        target: &Sprite,
    ) -> Result<Option<CollisionSide>, HitboxError> {
        let target_rect = self.hitbox_rect(target)?;
        let probe_rect = self.hitbox_rect(probe)?;

        if !target_rect.overlaps(&probe_rect) {
            return Ok(None);
        }
        Ok(side_between(&probe_rect, &target_rect))
    }

    /// Read a stored or derived hitbox value
    pub fn hitbox_data(&self, field: HitboxField, sprite: &Sprite) -> Result<f32, HitboxError> {
        let record = self.registry.get(sprite.entity())?;
        let rect = record.effective_rect(&sprite.frame);

        Ok(match field {
            HitboxField::Left => rect.left(),
            HitboxField::Right => rect.right(),
            HitboxField::Top => rect.top(),
            HitboxField::Bottom => rect.bottom(),
            HitboxField::XOffset => record.x_offset,
            HitboxField::YOffset => record.y_offset,
            HitboxField::Width => record.width,
            HitboxField::Height => record.height,
        })
    }
}
