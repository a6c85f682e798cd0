//! Session state and core simulation types
//!
//! Everything a host needs to draw a frame or snapshot a run lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Collision;
use crate::config::{Config, ConfigError};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended on a collision; only `reset` leaves this phase
    Over,
}

/// The player-controlled falling entity
///
/// Its x never changes; the world scrolls past it. Vertical velocity is the
/// only degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, positive = downward
    pub velocity: f32,
}

impl Avatar {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.avatar_start,
            size: config.avatar_size,
            velocity: 0.0,
        }
    }

    /// One Euler step: accelerate, then move
    pub fn integrate(&mut self, gravity_accel: f32) {
        self.velocity += gravity_accel;
        self.pos.y += self.velocity;
    }

    /// Apply a flap impulse, replacing any prior velocity
    pub fn flap(&mut self, jump_impulse: f32) {
        self.velocity = jump_impulse;
    }

    /// Clamp against the floor band; a clamp is a collision
    pub fn clamp_to_floor(&mut self, floor_y: f32) -> Option<Collision> {
        if self.pos.y + self.size.y > floor_y {
            self.pos.y = floor_y - self.size.y;
            self.velocity = 0.0;
            return Some(Collision::Floor);
        }
        None
    }

    /// Clamp against the top of the playfield; a clamp is a collision
    pub fn clamp_to_ceiling(&mut self) -> Option<Collision> {
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
            return Some(Collision::Ceiling);
        }
        None
    }
}

/// One vertical barrier pair with a passable gap
///
/// Invariant at creation: `gap_top + gap_size + gap_bottom + floor_height ==
/// playfield_height`. `gap_bottom` is always derived, never drawn on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Height of the top segment (the gap starts at this y)
    pub gap_top: f32,
    /// Height of the bottom segment, measured up from the floor band
    pub gap_bottom: f32,
    /// Set once the avatar has passed the gap center
    pub scored: bool,
}

impl Obstacle {
    /// Horizontal center of the gap
    #[inline]
    pub fn gap_center_x(&self, obstacle_width: f32) -> f32 {
        self.x + obstacle_width / 2.0
    }
}

/// The scrolling obstacle stream
///
/// Insertion order is spatial left-to-right order: all obstacles move at the
/// same speed, so it is never reordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Spawn one obstacle at the right edge if the cadence says so
    ///
    /// Returns true if an obstacle was created this tick.
    pub fn maybe_spawn(&mut self, frame: u64, config: &Config, rng: &mut Pcg32) -> bool {
        if !frame.is_multiple_of(config.spawn_interval) {
            return false;
        }
        let gap_top = rng.random_range(config.gap_margin..config.max_gap_top());
        let gap_bottom = config.playfield_height - gap_top - config.gap_size - config.floor_height;
        self.obstacles.push(Obstacle {
            x: config.playfield_width,
            gap_top,
            gap_bottom,
            scored: false,
        });
        true
    }

    /// Scroll every obstacle left
    pub fn advance(&mut self, scroll_speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= scroll_speed;
        }
    }

    /// Award unscored obstacles whose gap center entered the avatar's span
    ///
    /// The span is half-open, `[avatar_x - w/2, avatar_x + w/2)`, and each
    /// obstacle is marked so it can never be awarded twice.
    pub fn test_and_mark_score(
        &mut self,
        avatar_x: f32,
        avatar_width: f32,
        obstacle_width: f32,
    ) -> u32 {
        let mut gained = 0;
        for obstacle in &mut self.obstacles {
            if obstacle.scored {
                continue;
            }
            let center = obstacle.gap_center_x(obstacle_width);
            if center >= avatar_x - avatar_width / 2.0 && center < avatar_x + avatar_width / 2.0 {
                obstacle.scored = true;
                gained += 1;
            }
        }
        gained
    }

    /// Drop obstacles whose right edge left the playfield
    ///
    /// Single compaction pass, never element removal mid-iteration.
    pub fn retire_offscreen(&mut self, obstacle_width: f32) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.x + obstacle_width >= 0.0);
        before - self.obstacles.len()
    }
}

/// Complete session state (deterministic, serializable)
///
/// Single owner of avatar, obstacle field, score, frame counter and input
/// latch. Hosts read it as their render snapshot and mutate it only through
/// `tick` / `jump` / `release_jump` / `reset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed, kept for reproducibility
    pub seed: u64,
    pub config: Config,
    pub phase: GamePhase,
    /// Tick counter driving spawn cadence; frozen once the session is Over
    pub frame: u64,
    /// Non-decreasing within a session
    pub score: u32,
    pub avatar: Avatar,
    pub field: ObstacleField,
    /// Edge-trigger latch: a held key produces exactly one flap
    pub flap_held: bool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session, failing fast on invalid tuning
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let avatar = Avatar::new(&config);
        Ok(Self {
            seed,
            config,
            phase: GamePhase::Running,
            frame: 0,
            score: 0,
            avatar,
            field: ObstacleField::default(),
            flap_held: false,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Obstacles for rendering, left-to-right
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.field.obstacles
    }

    /// Edge-triggered flap: fires once per press
    ///
    /// No-op while the latch is set or the session is Over.
    pub fn jump(&mut self) {
        if self.phase == GamePhase::Over || self.flap_held {
            return;
        }
        self.avatar.flap(self.config.jump_impulse);
        self.flap_held = true;
    }

    /// Clear the flap latch (mirrors the physical key release)
    pub fn release_jump(&mut self) {
        self.flap_held = false;
    }

    /// Restart after game over
    ///
    /// Gated on `Over`: a running session cannot be reset. The RNG stream
    /// continues; construct a new `GameState` to replay a seed from scratch.
    pub fn reset(&mut self) {
        if self.phase != GamePhase::Over {
            log::debug!("reset ignored: session still running");
            return;
        }
        self.avatar = Avatar::new(&self.config);
        self.field = ObstacleField::default();
        self.score = 0;
        self.frame = 0;
        self.flap_held = false;
        self.phase = GamePhase::Running;
        log::info!("session reset (seed {})", self.seed);
    }
}
