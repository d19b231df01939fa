//! Per-frame pairwise hitbox collision notifier
//!
//! Brute-force: every frame, every sprite of one kind is tested against every
//! sprite of another kind. There is no broad phase.

use crate::ecs::{Entity, Scheduler, SpriteKind, TaskHandle};
use crate::session::Session;

/// Call `handler(session, a, b)` every frame for each `a` of `kind_a` whose
/// hitbox overlaps the hitbox of a different sprite `b` of `kind_b`.
///
/// Candidates are snapshotted from the kind index at the start of the frame;
/// overlap is tested against the current state right before each call, so a
/// handler that moves, despawns or un-registers a sprite affects the pairs
/// that follow it. Sprites without a hitbox are skipped.
///
/// When `kind_a == kind_b` both `(a, b)` and `(b, a)` are reported.
pub fn on_hitbox_collide<F>(
    scheduler: &mut Scheduler,
    kind_a: SpriteKind,
    kind_b: SpriteKind,
    mut handler: F,
) -> TaskHandle
where
    F: FnMut(&mut Session, Entity, Entity) + 'static,
{
    log::debug!("Watching hitbox collisions between {kind_a:?} and {kind_b:?}");

    scheduler.on_every_frame(move |session| {
        let probes = session.world.entities_of_kind(kind_a);
        let targets = session.world.entities_of_kind(kind_b);

        for &a in &probes {
            for &b in &targets {
                if a == b {
                    continue;
                }
                if hitboxes_overlap(session, a, b) {
                    handler(session, a, b);
                }
            }
        }
    })
}

fn hitboxes_overlap(session: &Session, a: Entity, b: Entity) -> bool {
    let (Some(sprite_a), Some(sprite_b)) = (session.world.get(a), session.world.get(b)) else {
        return false;
    };

    match session.collision().are_hitting(sprite_a, sprite_b) {
        Ok(hitting) => hitting,
        Err(err) => {
            log::trace!("Skipping pair ({a}, {b}): {err}");
            false
        }
    }
}
