//! Neon Dash - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `controller`: Session state machine, frame scheduling and high-score reporting
//! - `persistence`: High-score storage collaborators
//! - `tuning`: Data-driven game balance
//! - `hud`: Scoreboard formatting for whatever draws the frame

pub mod controller;
pub mod hud;
pub mod persistence;
pub mod sim;
pub mod tuning;

pub use controller::{Command, FrameRequest, SessionController};
pub use persistence::{HighScoreStore, JsonFileStore, MemoryStore};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
///
/// Coordinates share one viewport-independent frame: x grows to the right,
/// y grows downward, and the ground line sits at y = 0.
pub mod consts {
    /// Downward acceleration added to the player's velocity each airborne tick
    pub const GRAVITY: f32 = 0.6;
    /// Velocity applied on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Horizontal distance obstacles travel toward the player per tick
    pub const RUN_SPEED: f32 = 5.0;

    /// Spawn gap bounds in ticks (inclusive)
    pub const MIN_SPAWN_TICKS: u32 = 60;
    pub const MAX_SPAWN_TICKS: u32 = 120;

    /// Obstacles enter here, well off the right edge
    pub const SPAWN_X: f32 = 1200.0;
    /// Obstacles whose right edge is at or left of this are discarded
    pub const DESPAWN_X: f32 = -100.0;

    /// Player sprite left edge and square size
    pub const PLAYER_X: f32 = 40.0;
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Obstacle dimensions (width, height)
    pub const BLOCK_SIZE: (f32, f32) = (40.0, 40.0);
    pub const SPIKE_SIZE: (f32, f32) = (30.0, 50.0);

    /// Ticks per displayed distance unit
    pub const SCORE_DIVISOR: u64 = 10;
}
