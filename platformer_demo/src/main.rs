//! Headless Platformer Demo
//!
//! Runs a small platformer level without rendering and logs what happens:
//! - The player falls, lands on platforms and bounces off walls using
//!   side-of-collision queries
//! - Coins with shrunken hitboxes are collected through a kind-pair notifier
//! - A hazard's hitbox widens smoothly until its animation is cancelled

mod config;

use std::cell::Cell;
use std::rc::Rc;

use hitbox_engine::config::{Config, ConfigError};
use hitbox_engine::foundation::logging;
use hitbox_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::config::DemoConfig;

const CONFIG_PATH: &str = "demo.toml";

const PLAYER: SpriteKind = SpriteKind(0);
const PLATFORM: SpriteKind = SpriteKind(1);
const COIN: SpriteKind = SpriteKind(2);
const HAZARD: SpriteKind = SpriteKind(3);

const PLAYER_START: (f32, f32) = (8.0, 0.0);
const RUN_SPEED: f32 = 1.5;
const GRAVITY: f32 = 0.35;
const MAX_FALL_SPEED: f32 = 6.0;
const LEVEL_WIDTH: f32 = 320.0;
const LEVEL_HEIGHT: f32 = 180.0;
const TILE_SIZE: f32 = 32.0;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Hitbox error: {0}")]
    Hitbox(#[from] HitboxError),

    #[error("{0} is not in the world")]
    MissingSprite(Entity),
}

struct PlatformerDemo {
    config: DemoConfig,
    session: Session,
    scheduler: Scheduler,
    player: Entity,
    velocity: (f32, f32),
    coins_collected: Rc<Cell<u32>>,
    hazard_growth: Option<TaskHandle>,
    respawns: u32,
}

impl PlatformerDemo {
    fn new(config: DemoConfig) -> Result<Self, DemoError> {
        config.hitbox.validate()?;

        let mut session = Session::new(config.hitbox.clone());
        let player = session.world.spawn(
            PLAYER,
            Rect::new(PLAYER_START.0, PLAYER_START.1, 16.0, 24.0),
        );

        Ok(Self {
            config,
            session,
            scheduler: Scheduler::new(),
            player,
            velocity: (RUN_SPEED, 0.0),
            coins_collected: Rc::new(Cell::new(0)),
            hazard_growth: None,
            respawns: 0,
        })
    }

    fn build_level(&mut self) -> Result<(), DemoError> {
        let world = &mut self.session.world;
        // Floor and ledge are built from tiles; side resolution works best on
        // boxes of similar size to the player
        let mut x = 0.0;
        while x < LEVEL_WIDTH {
            world.spawn(PLATFORM, Rect::new(x, 150.0, TILE_SIZE, 30.0));
            x += TILE_SIZE;
        }
        world.spawn(PLATFORM, Rect::new(120.0, 110.0, TILE_SIZE, 12.0));
        world.spawn(PLATFORM, Rect::new(120.0 + TILE_SIZE, 110.0, TILE_SIZE, 12.0));
        // Walls at both ends of the level
        world.spawn(PLATFORM, Rect::new(-16.0, 0.0, 16.0, LEVEL_HEIGHT));
        world.spawn(PLATFORM, Rect::new(LEVEL_WIDTH, 0.0, 16.0, LEVEL_HEIGHT));
        let hazard = world.spawn(HAZARD, Rect::new(220.0, 142.0, 8.0, 8.0));

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        for _ in 0..self.config.coin_count {
            let x = rng.gen_range(16.0..LEVEL_WIDTH - 24.0);
            let y = rng.gen_range(90.0..140.0);
            world.spawn(COIN, Rect::new(x, y, 12.0, 12.0));
        }

        for sprite in self.session.world.sprites() {
            self.session.hitboxes.create(sprite)?;
        }

        // Player hitbox ignores the sprite's transparent margins
        self.session.hitboxes.set_parameters(self.player, -3.0, -4.0, 10.0, 20.0)?;

        // Coins are forgiving: the hitbox is the centre 6x6 of the sprite
        for coin in self.session.world.entities_of_kind(COIN) {
            self.session.hitboxes.set_parameters(coin, -3.0, -3.0, 6.0, 6.0)?;
        }

        self.hazard_growth = Some(increase_smoothly(
            &mut self.scheduler,
            &self.session,
            HitboxParameter::Width,
            hazard,
            24.0,
            self.config.hazard_growth_seconds,
        )?);

        let collected = Rc::clone(&self.coins_collected);
        on_hitbox_collide(&mut self.scheduler, PLAYER, COIN, move |session, _player, coin| {
            if session.hitboxes.remove(coin).is_ok() {
                session.world.despawn(coin);
                collected.set(collected.get() + 1);
                log::info!("Collected {coin} ({} total)", collected.get());
            }
        });

        log::info!(
            "Level built: {} sprites, {} hitboxes",
            self.session.world.len(),
            self.session.hitboxes.len()
        );
        Ok(())
    }

    fn sprite(&self, entity: Entity) -> Result<&Sprite, DemoError> {
        self.session.world.get(entity).ok_or(DemoError::MissingSprite(entity))
    }

    fn run(&mut self) -> Result<(), DemoError> {
        self.build_level()?;

        for frame in 0..self.config.frames {
            self.step_player()?;
            self.scheduler.tick(&mut self.session, self.config.frame_ms);
            self.stop_hazard_growth(frame);
        }

        let hazard_width = self
            .session
            .world
            .entities_of_kind(HAZARD)
            .first()
            .map(|&hazard| self.session.hitboxes.get(hazard))
            .transpose()?
            .map_or(0.0, |record| record.width);

        log::info!(
            "Finished {} frames: {} coins, {} respawns, hazard hitbox width {:.1}",
            self.scheduler.frame_count(),
            self.coins_collected.get(),
            self.respawns,
            hazard_width
        );
        Ok(())
    }

    fn stop_hazard_growth(&mut self, frame: u32) {
        let elapsed_seconds = f64::from(frame + 1) * self.config.frame_ms / 1000.0;
        if elapsed_seconds < f64::from(self.config.hazard_growth_seconds) {
            return;
        }
        if let Some(handle) = self.hazard_growth.take() {
            self.scheduler.cancel(handle);
            log::info!("Hazard stopped growing after {elapsed_seconds:.2}s");
        }
    }

    fn step_player(&mut self) -> Result<(), DemoError> {
        self.velocity.1 = (self.velocity.1 + GRAVITY).min(MAX_FALL_SPEED);
        let (dx, dy) = self.velocity;
        self.session
            .world
            .get_mut(self.player)
            .ok_or(DemoError::MissingSprite(self.player))?
            .translate(dx, dy);

        self.resolve_platforms()?;

        let player = self.sprite(self.player)?;
        let touching_hazard = self
            .session
            .world
            .sprites_of_kind(HAZARD)
            .map(|hazard| self.session.collision().is_hitting(player, hazard))
            .collect::<Result<Vec<bool>, HitboxError>>()?
            .into_iter()
            .any(|hit| hit);

        if touching_hazard || player.top() > LEVEL_HEIGHT {
            self.respawn_player()?;
        }
        Ok(())
    }

    fn resolve_platforms(&mut self) -> Result<(), DemoError> {
        // Vertical contacts first so seams between floor tiles don't read as walls
        self.resolve_sides(|side| matches!(side, CollisionSide::Top | CollisionSide::Bottom))?;
        self.resolve_sides(|side| matches!(side, CollisionSide::Left | CollisionSide::Right))
    }

    fn resolve_sides(&mut self, accept: impl Fn(CollisionSide) -> bool) -> Result<(), DemoError> {
        for platform in self.session.world.entities_of_kind(PLATFORM) {
            let engine = self.session.collision();
            let player = self.sprite(self.player)?;
            let target = self.sprite(platform)?;

            let Some(side) = engine.side_of_collision(player, target)? else {
                continue;
            };
            if !accept(side) {
                continue;
            }

            let (shift_x, shift_y) = match side {
                CollisionSide::Top => {
                    let depth = engine.hitbox_data(HitboxField::Bottom, player)?
                        - engine.hitbox_data(HitboxField::Top, target)?;
                    self.velocity.1 = 0.0;
                    (0.0, -depth)
                }
                CollisionSide::Bottom => {
                    let depth = engine.hitbox_data(HitboxField::Bottom, target)?
                        - engine.hitbox_data(HitboxField::Top, player)?;
                    self.velocity.1 = 0.0;
                    (0.0, depth)
                }
                CollisionSide::Left => {
                    let depth = engine.hitbox_data(HitboxField::Right, player)?
                        - engine.hitbox_data(HitboxField::Left, target)?;
                    self.velocity.0 = -RUN_SPEED;
                    (-depth, 0.0)
                }
                CollisionSide::Right => {
                    let depth = engine.hitbox_data(HitboxField::Right, target)?
                        - engine.hitbox_data(HitboxField::Left, player)?;
                    self.velocity.0 = RUN_SPEED;
                    (depth, 0.0)
                }
            };

            log::trace!("Player hit {side} of {platform}");
            self.session
                .world
                .get_mut(self.player)
                .ok_or(DemoError::MissingSprite(self.player))?
                .translate(shift_x, shift_y);
        }
        Ok(())
    }

    fn respawn_player(&mut self) -> Result<(), DemoError> {
        self.respawns += 1;
        self.velocity = (RUN_SPEED, 0.0);
        self.session
            .world
            .get_mut(self.player)
            .ok_or(DemoError::MissingSprite(self.player))?
            .set_position(PLAYER_START.0, PLAYER_START.1);
        log::info!("Player respawned ({} so far)", self.respawns);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load_or_default(CONFIG_PATH)?;

    logging::init_with_level(&config.hitbox.log_level);

    log::info!("Starting headless platformer demo");

    let mut demo = PlatformerDemo::new(config)?;
    match demo.run() {
        Ok(()) => {
            log::info!("Platformer demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Platformer demo failed: {:?}", e);
            Err(e.into())
        }
    }
}
