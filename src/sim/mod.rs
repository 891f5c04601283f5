//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Injected random source only
//! - Obstacles kept in spawn order
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_overlap, overlaps, player_box};
pub use obstacles::{Obstacle, ObstacleGenerator, ObstacleKind};
pub use physics::PhysicsBody;
pub use spawn::{ScriptedSource, SeededSource, SpawnSource};
pub use state::{GameState, SessionPhase, Snapshot};
pub use tick::{TickOutcome, tick};
