//! Neon Dash entry point
//!
//! Headless native run: an autopilot presses the button whenever an obstacle
//! gets close, frames are driven back-to-back, and the result is logged.
//!
//! Environment:
//! - `NEON_DASH_TUNING`: path to a JSON tuning file
//! - `NEON_DASH_SAVE`: path to the high-score file (in-memory if unset)
//! - `NEON_DASH_SEED`: obstacle seed
//! - `NEON_DASH_FRAMES`: frame cap for the run

use std::env;

use neon_dash::sim::{GameState, SessionPhase, SpawnSource};
use neon_dash::{HighScoreStore, JsonFileStore, MemoryStore, SessionController, Tuning};

/// Press when the nearest obstacle's left edge is this close to the player
const AUTOPILOT_LOOKAHEAD: f32 = 40.0;
const DEFAULT_FRAME_CAP: u64 = 20_000;

fn main() {
    env_logger::init();
    log::info!("Neon Dash (headless) starting...");

    let tuning = match env::var("NEON_DASH_TUNING") {
        Ok(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Falling back to default tuning: {}", e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let seed = env_u64("NEON_DASH_SEED").unwrap_or(0x5eed);
    let frame_cap = env_u64("NEON_DASH_FRAMES").unwrap_or(DEFAULT_FRAME_CAP);

    match env::var("NEON_DASH_SAVE") {
        Ok(path) => play(JsonFileStore::new(path), tuning, seed, frame_cap),
        Err(_) => play(MemoryStore::new(), tuning, seed, frame_cap),
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a number", key, value);
            None
        }
    }
}

fn play<H: HighScoreStore>(store: H, tuning: Tuning, seed: u64, frame_cap: u64) {
    let mut session = SessionController::seeded(store, tuning, seed);
    let seed = session.state().obstacles.source().seed();
    log::info!("Game initialized with seed: {}", seed);

    let mut next = session.press();
    let mut frames = 0u64;
    while let Some(request) = next {
        if frames >= frame_cap {
            session.cancel_pending();
            log::info!("Frame cap {} reached, stopping", frame_cap);
            break;
        }
        if should_jump(session.state()) {
            session.press();
        }
        next = session.on_frame(request);
        frames += 1;
    }

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&session.snapshot()) {
            Ok(json) => log::debug!("Final frame: {}", json),
            Err(e) => log::warn!("Could not encode final frame: {}", e),
        }
    }

    let (distance, best) = session.state().scoreboard().lines();
    let status = match session.phase() {
        SessionPhase::Ended => "GAME OVER",
        _ => "STILL RUNNING",
    };
    println!("{status}  {distance}  {best}  ({frames} frames)");
}

/// Jump if an obstacle is about to reach the player and we are on the ground
fn should_jump<S: SpawnSource>(state: &GameState<S>) -> bool {
    if !state.is_running() || state.player.is_airborne {
        return false;
    }
    let player_right = state.tuning.player_x + state.tuning.player_size;
    state
        .obstacles
        .obstacles()
        .iter()
        .map(|o| o.position_x - player_right)
        .any(|gap| gap > 0.0 && gap <= AUTOPILOT_LOOKAHEAD)
}
