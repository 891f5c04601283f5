//! Random source for obstacle spawning
//!
//! Kept behind a trait so runs can be replayed from a seed, or scripted outright.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacles::ObstacleKind;

/// Draws the two random decisions the obstacle generator makes
pub trait SpawnSource {
    /// Ticks until the next spawn, uniform over `min..=max`
    fn spawn_delay(&mut self, min: u32, max: u32) -> u32;
    /// Kind of the obstacle being spawned (fair coin flip)
    fn pick_kind(&mut self) -> ObstacleKind;
}

/// Seeded PCG source (the default for real play)
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SpawnSource for SeededSource {
    fn spawn_delay(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    fn pick_kind(&mut self) -> ObstacleKind {
        if self.rng.random_bool(0.5) {
            ObstacleKind::Block
        } else {
            ObstacleKind::Spike
        }
    }
}

/// Replays fixed delays and kinds, cycling when exhausted
///
/// Delays are clamped into the requested range so a script can never break
/// the spawn-gap bounds.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    delays: VecDeque<u32>,
    kinds: VecDeque<ObstacleKind>,
}

impl ScriptedSource {
    pub fn new(
        delays: impl IntoIterator<Item = u32>,
        kinds: impl IntoIterator<Item = ObstacleKind>,
    ) -> Self {
        Self {
            delays: delays.into_iter().collect(),
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Always the longest gap and always blocks
    pub fn sparse() -> Self {
        Self::new([u32::MAX], [ObstacleKind::Block])
    }
}

impl SpawnSource for ScriptedSource {
    fn spawn_delay(&mut self, min: u32, max: u32) -> u32 {
        let delay = self.delays.pop_front().unwrap_or(max);
        self.delays.push_back(delay);
        delay.clamp(min, max)
    }

    fn pick_kind(&mut self) -> ObstacleKind {
        let kind = self.kinds.pop_front().unwrap_or(ObstacleKind::Block);
        self.kinds.push_back(kind);
        kind
    }
}
