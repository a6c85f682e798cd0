//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, one per rendered frame (no wall-clock delta time)
//! - Seeded RNG only
//! - Single-owner state, no sharing across component boundaries
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Collision, avatar_hits_obstacle};
pub use state::{Avatar, GamePhase, GameState, Obstacle, ObstacleField};
pub use tick::tick;
