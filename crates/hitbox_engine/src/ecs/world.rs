//! Sprite world: entity allocation and the kind index

use super::{Entity, Sprite, SpriteKind};
use crate::foundation::math::Rect;

/// World containing all sprites, kept in spawn order
pub struct World {
    next_entity_id: u32,
    sprites: Vec<Sprite>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            next_entity_id: 0,
            sprites: Vec::new(),
        }
    }

    /// Spawn a sprite and return its entity
    pub fn spawn(&mut self, kind: SpriteKind, frame: Rect) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.sprites.push(Sprite::new(entity, kind, frame));
        log::trace!("Spawned {entity} of kind {kind:?} at {frame:?}");
        entity
    }

    /// Remove a sprite from the world
    ///
    /// Any hitbox attached to the entity is left untouched; callers remove it
    /// from the registry themselves.
    pub fn despawn(&mut self, entity: Entity) -> Option<Sprite> {
        let index = self.sprites.iter().position(|s| s.entity() == entity)?;
        Some(self.sprites.remove(index))
    }

    /// Get a sprite
    pub fn get(&self, entity: Entity) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.entity() == entity)
    }

    /// Get a mutable sprite
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut Sprite> {
        self.sprites.iter_mut().find(|s| s.entity() == entity)
    }

    /// Whether the entity is alive in this world
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Get an iterator over all sprites in spawn order
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    /// All sprites tagged with `kind`, in spawn order
    pub fn sprites_of_kind(&self, kind: SpriteKind) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(move |s| s.kind() == kind)
    }

    /// Snapshot of the entities tagged with `kind`
    pub fn entities_of_kind(&self, kind: SpriteKind) -> Vec<Entity> {
        self.sprites_of_kind(kind).map(Sprite::entity).collect()
    }

    /// Number of live sprites
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the world has no sprites
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: SpriteKind = SpriteKind(0);
    const COIN: SpriteKind = SpriteKind(1);

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut world = World::new();
        let a = world.spawn(PLAYER, Rect::new(0.0, 0.0, 8.0, 8.0));
        let b = world.spawn(PLAYER, Rect::new(0.0, 0.0, 8.0, 8.0));

        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_despawn() {
        let mut world = World::new();
        let a = world.spawn(COIN, Rect::default());
        world.despawn(a).unwrap();
        let b = world.spawn(COIN, Rect::default());

        assert_ne!(a, b);
        assert!(!world.contains(a));
        assert!(world.contains(b));
    }

    #[test]
    fn test_kind_index_preserves_spawn_order() {
        let mut world = World::new();
        let c1 = world.spawn(COIN, Rect::default());
        let _p = world.spawn(PLAYER, Rect::default());
        let c2 = world.spawn(COIN, Rect::default());

        assert_eq!(world.entities_of_kind(COIN), vec![c1, c2]);
        assert_eq!(world.sprites_of_kind(PLAYER).count(), 1);
    }

    #[test]
    fn test_get_mut_moves_sprite() {
        let mut world = World::new();
        let e = world.spawn(PLAYER, Rect::new(0.0, 0.0, 4.0, 4.0));
        world.get_mut(e).unwrap().translate(3.0, -2.0);

        let sprite = world.get(e).unwrap();
        assert_eq!(sprite.left(), 3.0);
        assert_eq!(sprite.top(), -2.0);
        assert_eq!(sprite.right(), 7.0);
    }
}
