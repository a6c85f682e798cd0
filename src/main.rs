//! Gapwing entry point
//!
//! Headless demo host: owns the session, drives one tick per "frame" and
//! feeds it edge-triggered input from a small autopilot. A rendering host
//! embeds the library the same way, drawing from the session state where
//! this binary logs it.
//!
//! Usage: `gapwing [seed] [--json]`
//! With `--json`, the final session snapshot is printed to stdout.

use std::time::{SystemTime, UNIX_EPOCH};

use gapwing::{Config, GamePhase, GameState, tick};

/// Sessions played before exiting
const SESSIONS: u32 = 3;
/// Safety cap per session; the autopilot is fallible enough not to need it
const MAX_TICKS: u64 = 100_000;

/// Host-side input state across frames
///
/// Tracks whether the virtual key is down so jump/release are delivered as
/// clean edges, the way a key handler would.
#[derive(Default)]
struct Host {
    pressing: bool,
}

impl Host {
    /// Decide and deliver this frame's input before the tick runs
    fn apply_input(&mut self, state: &mut GameState) {
        let wants_flap = autopilot_wants_flap(state);
        if wants_flap && !self.pressing {
            state.jump();
            self.pressing = true;
        } else if !wants_flap && self.pressing {
            state.release_jump();
            self.pressing = false;
        }
    }
}

/// Flap whenever the avatar's center sits below the next gap's center
///
/// "Next" is the nearest obstacle whose right edge has not passed the
/// avatar; with no obstacle in sight, hold the spawn altitude.
fn autopilot_wants_flap(state: &GameState) -> bool {
    let target_y = state
        .obstacles()
        .iter()
        .filter(|o| o.x + state.config.obstacle_width >= state.avatar.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_top + state.config.gap_size / 2.0)
        .unwrap_or(state.config.avatar_start.y);

    state.avatar.pos.y + state.avatar.size.y / 2.0 > target_y
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut seed = None;
    let mut dump_json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => dump_json = true,
            other => seed = Some(other.parse::<u64>()?),
        }
    }
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut state = GameState::new(Config::default(), seed)?;
    log::info!("starting demo run, seed {seed}");

    let mut host = Host::default();
    for session in 1..=SESSIONS {
        let mut ticks = 0u64;
        while state.phase == GamePhase::Running && ticks < MAX_TICKS {
            host.apply_input(&mut state);
            tick(&mut state);
            ticks += 1;
        }
        log::info!(
            "session {session}: score {} after {} frames",
            state.score,
            state.frame
        );
        if session < SESSIONS {
            state.reset();
            host.pressing = false;
        }
    }

    if dump_json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
