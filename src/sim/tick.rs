//! Per-frame simulation tick
//!
//! One `tick` call per rendered frame. The host applies `jump` /
//! `release_jump` between ticks; nothing here blocks or touches a clock.

use super::collision::{Collision, avatar_hits_obstacle};
use super::state::{GamePhase, GameState};

/// Advance the session by one frame
///
/// No-op once the session is Over. While Running, in order: integrate the
/// avatar, clamp-and-flag against floor and ceiling, spawn on cadence,
/// scroll the field, award passed gaps, retire off-screen obstacles, test
/// the avatar against every live obstacle. Any collision ends the session;
/// the frame counter only advances on ticks that stay Running.
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::Over {
        return;
    }

    state.avatar.integrate(state.config.gravity_accel);
    let mut collision = state.avatar.clamp_to_floor(state.config.floor_y());
    if collision.is_none() {
        collision = state.avatar.clamp_to_ceiling();
    }

    if state
        .field
        .maybe_spawn(state.frame, &state.config, &mut state.rng)
    {
        if let Some(obstacle) = state.field.obstacles.last() {
            log::debug!(
                "frame {}: spawned obstacle (gap {:.0}..{:.0})",
                state.frame,
                obstacle.gap_top,
                obstacle.gap_top + state.config.gap_size
            );
        }
    }

    state.field.advance(state.config.scroll_speed);

    let gained = state.field.test_and_mark_score(
        state.avatar.pos.x,
        state.avatar.size.x,
        state.config.obstacle_width,
    );
    if gained > 0 {
        state.score += gained;
        log::debug!("frame {}: score {}", state.frame, state.score);
    }

    state.field.retire_offscreen(state.config.obstacle_width);

    if collision.is_none() {
        collision = state
            .field
            .obstacles
            .iter()
            .find(|o| avatar_hits_obstacle(&state.avatar, o, &state.config))
            .map(|_| Collision::Obstacle);
    }

    match collision {
        Some(hit) => {
            state.phase = GamePhase::Over;
            log::info!(
                "game over: hit {} at frame {} with score {}",
                hit,
                state.frame,
                state.score
            );
        }
        None => state.frame += 1,
    }
}
