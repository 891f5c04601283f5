//! Game state and core simulation types

use serde::Serialize;

use super::collision::{Rect, player_box};
use super::obstacles::{Obstacle, ObstacleGenerator};
use super::physics::PhysicsBody;
use super::spawn::{SeededSource, SpawnSource};
use crate::hud::Scoreboard;
use crate::tuning::Tuning;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SessionPhase {
    /// Waiting at the start prompt
    #[default]
    Idle,
    /// Active tick loop
    Running,
    /// Round over, showing the final score
    Ended,
}

/// Complete session state
///
/// Survives across rounds: the best score is carried over, everything else
/// is reset on [`GameState::start`].
#[derive(Debug, Clone)]
pub struct GameState<S: SpawnSource = SeededSource> {
    pub phase: SessionPhase,
    /// Ticks survived this round
    pub score: u64,
    /// Best score seen (in ticks)
    pub high_score: u64,
    /// Rounds started since creation
    pub rounds: u32,
    pub player: PhysicsBody,
    pub obstacles: ObstacleGenerator<S>,
    pub tuning: Tuning,
}

impl<S: SpawnSource> GameState<S> {
    pub fn new(tuning: Tuning, high_score: u64, source: S) -> Self {
        Self {
            phase: SessionPhase::Idle,
            score: 0,
            high_score,
            rounds: 0,
            player: PhysicsBody::new(tuning.gravity, tuning.jump_impulse),
            obstacles: ObstacleGenerator::new(tuning, source),
            tuning,
        }
    }

    /// Begin a fresh round (from Idle or Ended)
    ///
    /// Returns false if a round is already running.
    pub fn start(&mut self) -> bool {
        if self.phase == SessionPhase::Running {
            return false;
        }
        self.score = 0;
        self.player.reset();
        self.obstacles.reset();
        self.rounds += 1;
        self.phase = SessionPhase::Running;
        true
    }

    /// Forward a jump to the player; ignored outside a running round
    pub fn jump(&mut self) -> bool {
        self.phase == SessionPhase::Running && self.player.jump()
    }

    /// Player hitbox at the current offset
    pub fn player_box(&self) -> Rect {
        player_box(
            self.tuning.player_x,
            self.tuning.player_size,
            self.player.vertical_offset,
        )
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            distance: self.tuning.distance(self.score),
            best: self.high_score,
        }
    }

    /// Read-only view for drawing the current frame
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            vertical_offset: self.player.vertical_offset,
            airborne: self.player.is_airborne,
            player: self.player_box(),
            obstacles: self.obstacles.obstacles(),
            scoreboard: self.scoreboard(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: SessionPhase,
    pub vertical_offset: f32,
    pub airborne: bool,
    pub player: Rect,
    pub obstacles: &'a [Obstacle],
    pub scoreboard: Scoreboard,
}
