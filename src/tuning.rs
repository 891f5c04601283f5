//! Game balance configuration
//!
//! Every gameplay constant in one serializable struct. Missing JSON fields
//! fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::ObstacleKind;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub run_speed: f32,
    pub min_spawn_ticks: u32,
    pub max_spawn_ticks: u32,
    pub spawn_x: f32,
    pub despawn_x: f32,
    pub player_x: f32,
    pub player_size: f32,
    /// (width, height)
    pub block_size: (f32, f32),
    /// (width, height)
    pub spike_size: (f32, f32),
    pub score_divisor: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            run_speed: RUN_SPEED,
            min_spawn_ticks: MIN_SPAWN_TICKS,
            max_spawn_ticks: MAX_SPAWN_TICKS,
            spawn_x: SPAWN_X,
            despawn_x: DESPAWN_X,
            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            block_size: BLOCK_SIZE,
            spike_size: SPIKE_SIZE,
            score_divisor: SCORE_DIVISOR,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(msg: impl Into<String>) -> Result<(), TuningError> {
            Err(TuningError::Invalid(msg.into()))
        }

        if !(self.gravity > 0.0) {
            return invalid(format!("gravity must be positive, got {}", self.gravity));
        }
        if !(self.jump_impulse < 0.0) {
            return invalid(format!(
                "jump_impulse must be negative (upward), got {}",
                self.jump_impulse
            ));
        }
        if !(self.run_speed > 0.0) {
            return invalid(format!("run_speed must be positive, got {}", self.run_speed));
        }
        if self.min_spawn_ticks == 0 || self.min_spawn_ticks > self.max_spawn_ticks {
            return invalid(format!(
                "spawn gap {}..={} is empty or zero",
                self.min_spawn_ticks, self.max_spawn_ticks
            ));
        }
        if !(self.spawn_x > self.despawn_x) {
            return invalid("spawn_x must lie right of despawn_x");
        }
        let sizes = [
            ("player", (self.player_size, self.player_size)),
            ("block", self.block_size),
            ("spike", self.spike_size),
        ];
        for (name, (w, h)) in sizes {
            if !(w > 0.0 && h > 0.0) {
                return invalid(format!("{name} size must be positive, got {w}x{h}"));
            }
        }
        if self.score_divisor == 0 {
            return invalid("score_divisor must be non-zero");
        }
        Ok(())
    }

    /// (width, height) for an obstacle kind
    pub fn obstacle_size(&self, kind: ObstacleKind) -> (f32, f32) {
        match kind {
            ObstacleKind::Block => self.block_size,
            ObstacleKind::Spike => self.spike_size,
        }
    }

    /// Internal tick counter converted to displayed distance
    pub fn distance(&self, ticks: u64) -> u64 {
        ticks / self.score_divisor.max(1)
    }
}
