//! Session tuning
//!
//! All tuning is fixed when a session is constructed; invalid geometry is
//! rejected up front rather than discovered mid-simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Complete tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Playfield width in world units
    pub playfield_width: f32,
    /// Playfield height in world units
    pub playfield_height: f32,
    /// Height of the floor band at the bottom of the playfield
    pub floor_height: f32,

    /// Avatar spawn position (x stays fixed for the whole session)
    pub avatar_start: Vec2,
    /// Avatar bounding-box size
    pub avatar_size: Vec2,

    /// Downward acceleration applied every tick
    pub gravity_accel: f32,
    /// Velocity a flap sets (must be negative, i.e. upward)
    pub jump_impulse: f32,

    /// Obstacle width
    pub obstacle_width: f32,
    /// Vertical clearance between an obstacle's top and bottom segments
    pub gap_size: f32,
    /// Minimum height of either obstacle segment
    pub gap_margin: f32,
    /// Leftward obstacle movement per tick
    pub scroll_speed: f32,
    /// One obstacle spawns every this many ticks
    pub spawn_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            floor_height: FLOOR_HEIGHT,
            avatar_start: Vec2::new(AVATAR_START_X, AVATAR_START_Y),
            avatar_size: Vec2::new(AVATAR_WIDTH, AVATAR_HEIGHT),
            gravity_accel: GRAVITY_ACCEL,
            jump_impulse: JUMP_IMPULSE,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            scroll_speed: SCROLL_SPEED,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl Config {
    /// Y coordinate of the top of the floor band
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.playfield_height - self.floor_height
    }

    /// Largest gap-top height a spawn may draw (exclusive upper bound)
    ///
    /// Both obstacle segments keep at least `gap_margin` of height.
    #[inline]
    pub fn max_gap_top(&self) -> f32 {
        self.playfield_height - self.gap_size - self.floor_height - self.gap_margin
    }

    /// Check the tuning before a session starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(ConfigError::EmptyPlayfield);
        }
        if self.floor_height < 0.0 || self.floor_height >= self.playfield_height {
            return Err(ConfigError::FloorOutOfRange);
        }
        if self.avatar_size.x <= 0.0 || self.avatar_size.y <= 0.0 {
            return Err(ConfigError::DegenerateAvatar);
        }
        if self.avatar_start.x < 0.0
            || self.avatar_start.y < 0.0
            || self.avatar_start.x + self.avatar_size.x > self.playfield_width
            || self.avatar_start.y + self.avatar_size.y > self.floor_y()
        {
            return Err(ConfigError::AvatarOutOfBounds);
        }
        if self.gravity_accel < 0.0 {
            return Err(ConfigError::NegativeGravity);
        }
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::DownwardImpulse);
        }
        if self.obstacle_width <= 0.0 || self.gap_size <= 0.0 || self.gap_margin <= 0.0 {
            return Err(ConfigError::DegenerateObstacle);
        }
        // A spawn draws gap_top from [gap_margin, max_gap_top); the range
        // must be non-empty or no obstacle can ever be placed.
        if self.max_gap_top() <= self.gap_margin {
            return Err(ConfigError::GapTooLarge {
                gap_size: self.gap_size,
                available: self.floor_y() - 2.0 * self.gap_margin,
            });
        }
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::NonPositiveScroll);
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        Ok(())
    }
}

/// Rejected tuning, reported at session construction
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyPlayfield,
    FloorOutOfRange,
    DegenerateAvatar,
    AvatarOutOfBounds,
    NegativeGravity,
    /// Jump impulse must be negative (upward)
    DownwardImpulse,
    DegenerateObstacle,
    /// Gap plus margins does not fit above the floor
    GapTooLarge { gap_size: f32, available: f32 },
    NonPositiveScroll,
    ZeroSpawnInterval,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyPlayfield => write!(f, "playfield dimensions must be positive"),
            ConfigError::FloorOutOfRange => {
                write!(f, "floor height must be in [0, playfield height)")
            }
            ConfigError::DegenerateAvatar => write!(f, "avatar size must be positive"),
            ConfigError::AvatarOutOfBounds => {
                write!(f, "avatar start position must lie inside the playfield")
            }
            ConfigError::NegativeGravity => write!(f, "gravity must be non-negative"),
            ConfigError::DownwardImpulse => write!(f, "jump impulse must be negative (upward)"),
            ConfigError::DegenerateObstacle => {
                write!(f, "obstacle width, gap size and gap margin must be positive")
            }
            ConfigError::GapTooLarge { gap_size, available } => write!(
                f,
                "gap size {gap_size} does not fit: {available} units available above the floor"
            ),
            ConfigError::NonPositiveScroll => write!(f, "scroll speed must be positive"),
            ConfigError::ZeroSpawnInterval => write!(f, "spawn interval must be at least 1 tick"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_oversized_gap_rejected() {
        let cfg = Config {
            gap_size: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_downward_impulse_rejected() {
        let cfg = Config {
            jump_impulse: 4.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::DownwardImpulse));
    }

    #[test]
    fn test_avatar_below_floor_rejected() {
        let cfg = Config {
            avatar_start: glam::Vec2::new(50.0, 410.0),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::AvatarOutOfBounds));
    }
}
