//! Hitbox registry
//!
//! Owns every hitbox record. A record exists for an entity exactly while it
//! is registered: records are only created by [`HitboxRegistry::create`] and
//! only destroyed by [`HitboxRegistry::remove`] (or [`HitboxRegistry::clear`]).

use std::collections::HashMap;

use super::hitbox::{HitboxError, HitboxParameter, HitboxRecord};
use crate::ecs::{Entity, Sprite};

/// Entity to hitbox record mapping
#[derive(Debug, Default, Clone)]
pub struct HitboxRegistry {
    records: HashMap<Entity, HitboxRecord>,
}

impl HitboxRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Give `sprite` a hitbox matching its current visual frame
    pub fn create(&mut self, sprite: &Sprite) -> Result<(), HitboxError> {
        let entity = sprite.entity();
        if self.records.contains_key(&entity) {
            return Err(HitboxError::DuplicateHitbox(entity));
        }

        let record = HitboxRecord::for_sprite(sprite);
        self.records.insert(entity, record);
        log::debug!("Created hitbox for {entity}: {record:?}");
        Ok(())
    }

    /// Replace the whole record
    pub fn set_parameters(
        &mut self,
        entity: Entity,
        x_offset: f32,
        y_offset: f32,
        width: f32,
        height: f32,
    ) -> Result<(), HitboxError> {
        let record = self.get_mut(entity)?;
        *record = HitboxRecord::new(x_offset, y_offset, width, height);
        log::trace!("Set hitbox parameters for {entity}: {record:?}");
        Ok(())
    }

    /// Add `delta` to one parameter, returning the new value
    pub fn adjust(
        &mut self,
        entity: Entity,
        parameter: HitboxParameter,
        delta: f32,
    ) -> Result<f32, HitboxError> {
        let value = self.get_mut(entity)?.get_mut(parameter);
        *value += delta;
        Ok(*value)
    }

    /// Drop the entity's hitbox
    pub fn remove(&mut self, entity: Entity) -> Result<HitboxRecord, HitboxError> {
        let record = self
            .records
            .remove(&entity)
            .ok_or(HitboxError::MissingHitbox(entity))?;
        log::debug!("Removed hitbox for {entity}");
        Ok(record)
    }

    /// Copy of the entity's record
    pub fn get(&self, entity: Entity) -> Result<HitboxRecord, HitboxError> {
        self.records
            .get(&entity)
            .copied()
            .ok_or(HitboxError::MissingHitbox(entity))
    }

    fn get_mut(&mut self, entity: Entity) -> Result<&mut HitboxRecord, HitboxError> {
        self.records
            .get_mut(&entity)
            .ok_or(HitboxError::MissingHitbox(entity))
    }

    /// Whether the entity has a hitbox
    pub fn contains(&self, entity: Entity) -> bool {
        self.records.contains_key(&entity)
    }

    /// Number of registered hitboxes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no hitboxes are registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &HitboxRecord)> {
        self.records.iter().map(|(&entity, record)| (entity, record))
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{SpriteKind, World};
    use crate::foundation::math::Rect;

    fn world_with_sprite(frame: Rect) -> (World, Entity) {
        let mut world = World::new();
        let entity = world.spawn(SpriteKind(0), frame);
        (world, entity)
    }

    #[test]
    fn test_create_matches_visual_frame() {
        let (world, entity) = world_with_sprite(Rect::new(5.0, 7.0, 16.0, 24.0));
        let mut registry = HitboxRegistry::new();

        registry.create(world.get(entity).unwrap()).unwrap();

        let record = registry.get(entity).unwrap();
        assert_eq!(record, HitboxRecord::new(0.0, 0.0, 16.0, 24.0));
    }

    #[test]
    fn test_duplicate_create_fails() {
        let (world, entity) = world_with_sprite(Rect::new(0.0, 0.0, 8.0, 8.0));
        let mut registry = HitboxRegistry::new();
        let sprite = world.get(entity).unwrap();

        registry.create(sprite).unwrap();
        registry.set_parameters(entity, 1.0, 1.0, 4.0, 4.0).unwrap();

        assert_eq!(registry.create(sprite), Err(HitboxError::DuplicateHitbox(entity)));
        // The failed create did not reset the record
        assert_eq!(registry.get(entity).unwrap(), HitboxRecord::new(1.0, 1.0, 4.0, 4.0));
    }

    #[test]
    fn test_unregistered_accessors_fail() {
        let (_world, entity) = world_with_sprite(Rect::default());
        let mut registry = HitboxRegistry::new();
        let missing = Err(HitboxError::MissingHitbox(entity));

        assert_eq!(registry.get(entity), missing);
        assert_eq!(registry.set_parameters(entity, 0.0, 0.0, 1.0, 1.0), Err(HitboxError::MissingHitbox(entity)));
        assert_eq!(registry.adjust(entity, HitboxParameter::Width, 1.0), Err(HitboxError::MissingHitbox(entity)));
        assert_eq!(registry.remove(entity), missing);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_then_recreate_resets_defaults() {
        let (mut world, entity) = world_with_sprite(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut registry = HitboxRegistry::new();

        registry.create(world.get(entity).unwrap()).unwrap();
        registry.set_parameters(entity, 3.0, 3.0, 2.0, 2.0).unwrap();
        registry.remove(entity).unwrap();
        assert_eq!(registry.get(entity), Err(HitboxError::MissingHitbox(entity)));

        world.get_mut(entity).unwrap().frame.width = 12.0;
        registry.create(world.get(entity).unwrap()).unwrap();
        assert_eq!(registry.get(entity).unwrap(), HitboxRecord::new(0.0, 0.0, 12.0, 10.0));
    }

    #[test]
    fn test_adjust_returns_new_value() {
        let (world, entity) = world_with_sprite(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut registry = HitboxRegistry::new();
        registry.create(world.get(entity).unwrap()).unwrap();

        assert_eq!(registry.adjust(entity, HitboxParameter::YOffset, -2.5), Ok(-2.5));
        assert_eq!(registry.adjust(entity, HitboxParameter::Width, 5.0), Ok(15.0));
    }

    #[test]
    fn test_iter_and_clear() {
        let mut world = World::new();
        let a = world.spawn(SpriteKind(0), Rect::default());
        let b = world.spawn(SpriteKind(1), Rect::default());
        let mut registry = HitboxRegistry::new();
        for sprite in world.sprites() {
            registry.create(sprite).unwrap();
        }

        let mut entities: Vec<Entity> = registry.iter().map(|(e, _)| e).collect();
        entities.sort();
        assert_eq!(entities, vec![a, b]);

        registry.clear();
        assert_eq!(registry.len(), 0);
        assert!(!registry.contains(a));
    }
}
