//! Smooth hitbox parameter animation
//!
//! A smooth increase adds a fixed step to one hitbox parameter on every
//! scheduler interval. It has no end condition: it keeps stepping until its
//! task is cancelled.

use super::hitbox::{HitboxError, HitboxParameter};
use crate::config::steps_per_second;
use crate::ecs::{Entity, Scheduler, TaskHandle};
use crate::session::Session;

/// One installed parameter animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothIncrease {
    /// Parameter being changed
    pub parameter: HitboxParameter,
    /// Target entity
    pub entity: Entity,
    /// Amount added per firing
    pub step: f32,
}

impl SmoothIncrease {
    /// Spread `total_delta` over `duration_seconds` of steps fired every `period_ms`
    pub fn new(
        parameter: HitboxParameter,
        entity: Entity,
        total_delta: f32,
        duration_seconds: f32,
        period_ms: u32,
    ) -> Result<Self, HitboxError> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(HitboxError::InvalidDuration(duration_seconds));
        }

        Ok(Self {
            parameter,
            entity,
            step: total_delta / (duration_seconds * steps_per_second(period_ms)),
        })
    }

    /// Apply one step. A missing hitbox is logged and otherwise ignored.
    pub fn apply(&self, session: &mut Session) {
        match session.hitboxes.adjust(self.entity, self.parameter, self.step) {
            Ok(value) => log::trace!("{:?} of {} is now {value}", self.parameter, self.entity),
            Err(err) => log::debug!("Smooth increase step skipped: {err}"),
        }
    }
}

/// Install a smooth increase at the session's configured step period
///
/// With the default [`HitboxConfig`](crate::config::HitboxConfig) that is
/// 10 steps per second.
pub fn increase_smoothly(
    scheduler: &mut Scheduler,
    session: &Session,
    parameter: HitboxParameter,
    entity: Entity,
    total_delta: f32,
    duration_seconds: f32,
) -> Result<TaskHandle, HitboxError> {
    increase_smoothly_with_period(
        scheduler,
        parameter,
        entity,
        total_delta,
        duration_seconds,
        session.config.smooth_step_period_ms,
    )
}

/// Install a smooth increase stepping every `period_ms`
///
/// Each call installs an independent task; two increases on the same
/// parameter add up.
pub fn increase_smoothly_with_period(
    scheduler: &mut Scheduler,
    parameter: HitboxParameter,
    entity: Entity,
    total_delta: f32,
    duration_seconds: f32,
    period_ms: u32,
) -> Result<TaskHandle, HitboxError> {
    let increase = SmoothIncrease::new(parameter, entity, total_delta, duration_seconds, period_ms)?;
    log::debug!(
        "Increasing {parameter:?} of {entity} by {} every {period_ms}ms",
        increase.step
    );

    Ok(scheduler.on_every_interval(period_ms, move |session| increase.apply(session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HitboxConfig;
    use crate::ecs::SpriteKind;
    use crate::foundation::math::Rect;
    use approx::assert_relative_eq;

    fn session_with_sprite() -> (Session, Entity) {
        let mut session = Session::default();
        let entity = session.world.spawn(SpriteKind(0), Rect::new(0.0, 0.0, 20.0, 20.0));
        let sprite = session.world.get(entity).unwrap();
        session.hitboxes.create(sprite).unwrap();
        (session, entity)
    }

    fn width(session: &Session, entity: Entity) -> f32 {
        session.hitboxes.get(entity).unwrap().width
    }

    #[test]
    fn test_step_size() {
        let (_session, entity) = session_with_sprite();
        let increase = SmoothIncrease::new(HitboxParameter::Width, entity, 50.0, 5.0, 100).unwrap();
        assert_relative_eq!(increase.step, 1.0);
    }

    #[test]
    fn test_ten_firings_add_ten() {
        let (mut session, entity) = session_with_sprite();
        let mut scheduler = Scheduler::new();
        increase_smoothly(&mut scheduler, &session, HitboxParameter::Width, entity, 50.0, 5.0).unwrap();

        for _ in 0..10 {
            scheduler.tick(&mut session, 100.0);
        }
        assert_relative_eq!(width(&session, entity), 30.0, epsilon = 1e-4);

        // No end condition: keeps going past the nominal duration
        for _ in 0..50 {
            scheduler.tick(&mut session, 100.0);
        }
        assert_relative_eq!(width(&session, entity), 80.0, epsilon = 1e-3);
    }

    #[test]
    fn test_independent_increases_stack() {
        let (mut session, entity) = session_with_sprite();
        let mut scheduler = Scheduler::new();
        increase_smoothly(&mut scheduler, &session, HitboxParameter::YOffset, entity, 10.0, 1.0).unwrap();
        increase_smoothly(&mut scheduler, &session, HitboxParameter::YOffset, entity, -5.0, 1.0).unwrap();

        for _ in 0..10 {
            scheduler.tick(&mut session, 100.0);
        }

        assert_relative_eq!(session.hitboxes.get(entity).unwrap().y_offset, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_removed_entity_does_not_crash() {
        let (mut session, entity) = session_with_sprite();
        let mut scheduler = Scheduler::new();
        let handle = increase_smoothly(&mut scheduler, &session, HitboxParameter::Height, entity, 10.0, 1.0).unwrap();

        scheduler.tick(&mut session, 100.0);
        session.hitboxes.remove(entity).unwrap();
        scheduler.tick(&mut session, 100.0);

        assert!(scheduler.is_active(handle));
        assert_eq!(session.hitboxes.get(entity), Err(HitboxError::MissingHitbox(entity)));
    }

    #[test]
    fn test_cancel_freezes_value() {
        let (mut session, entity) = session_with_sprite();
        let mut scheduler = Scheduler::new();
        let handle = increase_smoothly(&mut scheduler, &session, HitboxParameter::Width, entity, 10.0, 1.0).unwrap();

        for _ in 0..3 {
            scheduler.tick(&mut session, 100.0);
        }
        scheduler.cancel(handle);
        for _ in 0..3 {
            scheduler.tick(&mut session, 100.0);
        }

        assert_relative_eq!(width(&session, entity), 23.0, epsilon = 1e-4);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let (session, entity) = session_with_sprite();
        let mut scheduler = Scheduler::new();

        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = increase_smoothly(&mut scheduler, &session, HitboxParameter::Width, entity, 1.0, duration);
            assert!(matches!(result, Err(HitboxError::InvalidDuration(_))));
        }
        assert_eq!(scheduler.task_count(), 0);
    }

    #[test]
    fn test_custom_period() {
        let (mut session, entity) = session_with_sprite();
        let mut scheduler = Scheduler::new();
        increase_smoothly_with_period(&mut scheduler, HitboxParameter::Width, entity, 10.0, 1.0, 250)
            .unwrap();

        // 4 steps per second, 2.5 per step
        scheduler.tick(&mut session, 500.0);
        assert_relative_eq!(width(&session, entity), 25.0, epsilon = 1e-4);
    }

    #[test]
    fn test_configured_period_drives_default_cadence() {
        let (mut session, entity) = session_with_sprite();
        session.config = HitboxConfig::default().with_smooth_step_period_ms(250);
        let mut scheduler = Scheduler::new();
        increase_smoothly(&mut scheduler, &session, HitboxParameter::Width, entity, 10.0, 1.0).unwrap();

        // Too short for a 250 ms step
        scheduler.tick(&mut session, 100.0);
        assert_relative_eq!(width(&session, entity), 20.0);

        scheduler.tick(&mut session, 150.0);
        assert_relative_eq!(width(&session, entity), 22.5, epsilon = 1e-4);
    }
}
