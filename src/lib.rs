//! Gapwing - a gap-runner arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `config`: Construction-time tuning, validated before a session starts
//!
//! Rendering and raw input capture are the host's job: the host reads the
//! serializable session state each frame and feeds discrete `jump` /
//! `release_jump` events between ticks. The crate itself never draws or
//! blocks.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::{Avatar, Collision, GamePhase, GameState, Obstacle, tick};

/// Default tuning constants
///
/// These are the values `Config::default()` is built from. Everything is
/// fixed at session construction; there is no runtime reconfiguration.
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 320.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;
    /// Height of the floor band at the bottom of the playfield
    pub const FLOOR_HEIGHT: f32 = 60.0;

    /// Avatar defaults - x never changes, the world scrolls past it
    pub const AVATAR_START_X: f32 = 50.0;
    pub const AVATAR_START_Y: f32 = 150.0;
    pub const AVATAR_WIDTH: f32 = 20.0;
    pub const AVATAR_HEIGHT: f32 = 20.0;

    /// Downward acceleration per tick
    pub const GRAVITY_ACCEL: f32 = 0.1;
    /// Velocity set by a flap (negative = upward)
    pub const JUMP_IMPULSE: f32 = -4.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    /// Vertical clearance between an obstacle's top and bottom segments
    pub const GAP_SIZE: f32 = 200.0;
    /// Minimum drawable height of either obstacle segment
    pub const GAP_MARGIN: f32 = 20.0;
    /// Leftward obstacle movement per tick
    pub const SCROLL_SPEED: f32 = 2.0;
    /// One obstacle spawns every this many ticks
    pub const SPAWN_INTERVAL: u64 = 90;
}
