//! Collision predicates
//!
//! Axis-aligned overlap tests between the avatar and the obstacle stream.
//! Floor and ceiling contact is detected where the clamp happens (see
//! `Avatar::clamp_to_floor` / `clamp_to_ceiling`); both report through the
//! same `Collision` value so every terminal event looks alike to the session.

use serde::{Deserialize, Serialize};

use super::state::{Avatar, Obstacle};
use crate::config::Config;

/// What the avatar hit
///
/// All three are equivalent terminal events; the variant exists for logs and
/// tests, not for gameplay branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Floor,
    Ceiling,
    Obstacle,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collision::Floor => write!(f, "floor"),
            Collision::Ceiling => write!(f, "ceiling"),
            Collision::Obstacle => write!(f, "obstacle"),
        }
    }
}

/// Check whether the avatar overlaps an obstacle's solid segments
///
/// Overlap requires the horizontal spans to intersect and the avatar to poke
/// above the gap top or below the gap bottom.
pub fn avatar_hits_obstacle(avatar: &Avatar, obstacle: &Obstacle, config: &Config) -> bool {
    let horizontal = avatar.pos.x < obstacle.x + config.obstacle_width
        && avatar.pos.x + avatar.size.x > obstacle.x;
    if !horizontal {
        return false;
    }

    let gap_bottom_y = config.playfield_height - obstacle.gap_bottom - config.floor_height;
    avatar.pos.y < obstacle.gap_top || avatar.pos.y + avatar.size.y > gap_bottom_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn avatar_at(y: f32) -> Avatar {
        Avatar {
            pos: Vec2::new(50.0, y),
            size: Vec2::new(20.0, 20.0),
            velocity: 0.0,
        }
    }

    // Default geometry: gap spans y 100..300, floor at y 420.
    fn obstacle_over_avatar() -> Obstacle {
        Obstacle {
            x: 40.0,
            gap_top: 100.0,
            gap_bottom: 120.0,
            scored: false,
        }
    }

    #[test]
    fn test_avatar_inside_gap_misses() {
        let cfg = Config::default();
        let obstacle = obstacle_over_avatar();
        assert!(!avatar_hits_obstacle(&avatar_at(150.0), &obstacle, &cfg));
        // Flush against both gap edges still misses
        assert!(!avatar_hits_obstacle(&avatar_at(100.0), &obstacle, &cfg));
        assert!(!avatar_hits_obstacle(&avatar_at(280.0), &obstacle, &cfg));
    }

    #[test]
    fn test_avatar_above_gap_hits() {
        let cfg = Config::default();
        let obstacle = obstacle_over_avatar();
        assert!(avatar_hits_obstacle(&avatar_at(99.0), &obstacle, &cfg));
    }

    #[test]
    fn test_avatar_below_gap_hits() {
        let cfg = Config::default();
        let obstacle = obstacle_over_avatar();
        // Bottom edge at 301 pokes into the bottom segment (gap ends at 300)
        assert!(avatar_hits_obstacle(&avatar_at(281.0), &obstacle, &cfg));
    }

    #[test]
    fn test_horizontally_clear_obstacle_misses() {
        let cfg = Config::default();
        let mut obstacle = obstacle_over_avatar();
        // Entirely right of the avatar (avatar spans x 50..70)
        obstacle.x = 71.0;
        assert!(!avatar_hits_obstacle(&avatar_at(99.0), &obstacle, &cfg));
        // Entirely left: right edge at 50 exactly does not overlap
        obstacle.x = 0.0;
        assert!(!avatar_hits_obstacle(&avatar_at(99.0), &obstacle, &cfg));
    }
}
