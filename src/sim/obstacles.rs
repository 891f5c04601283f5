//! Obstacle stream
//!
//! Obstacles enter at the right, scroll left at the run speed and are dropped
//! once they are well past the left edge. Spawns are spaced by a random tick
//! delay.

use serde::Serialize;

use super::collision::Rect;
use super::spawn::{SeededSource, SpawnSource};
use crate::tuning::Tuning;

/// Obstacle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObstacleKind {
    /// Square box
    Block,
    /// Narrow, tall triangle (hit-tested by its bounding box)
    Spike,
}

/// A ground obstacle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub position_x: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn right_edge(&self) -> f32 {
        self.position_x + self.width
    }

    /// Bounding box, standing on the ground line
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position_x, -self.height, self.width, self.height)
    }
}

/// Owns the active obstacles (in spawn order) and the spawn timer
#[derive(Debug, Clone)]
pub struct ObstacleGenerator<S: SpawnSource = SeededSource> {
    obstacles: Vec<Obstacle>,
    next_id: u32,
    /// Ticks until the next spawn; a spawn happens once this hits zero or below
    spawn_countdown: i64,
    source: S,
    tuning: Tuning,
}

impl<S: SpawnSource> ObstacleGenerator<S> {
    pub fn new(tuning: Tuning, source: S) -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 0,
            spawn_countdown: 0,
            source,
            tuning,
        }
    }

    /// Clear everything; the next step spawns immediately
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.next_id = 0;
        self.spawn_countdown = 0;
    }

    /// Advance one tick: scroll, prune, count down, maybe spawn
    ///
    /// Returns the id of the obstacle spawned this tick, if any.
    pub fn step(&mut self, speed: f32) -> Option<u32> {
        for obstacle in &mut self.obstacles {
            obstacle.position_x -= speed;
        }

        let despawn_x = self.tuning.despawn_x;
        self.obstacles.retain(|o| o.right_edge() > despawn_x);

        self.spawn_countdown -= 1;
        if self.spawn_countdown > 0 {
            return None;
        }

        let kind = self.source.pick_kind();
        let id = self.place(kind, self.tuning.spawn_x);
        let delay = self
            .source
            .spawn_delay(self.tuning.min_spawn_ticks, self.tuning.max_spawn_ticks);
        self.spawn_countdown = i64::from(delay);
        log::debug!("Spawned {:?} #{} (next in {} ticks)", kind, id, delay);
        Some(id)
    }

    /// Insert an obstacle of `kind` with its left edge at `x`
    ///
    /// Takes the next id, exactly like a timed spawn. Does not touch the timer.
    pub fn place(&mut self, kind: ObstacleKind, x: f32) -> u32 {
        let (width, height) = self.tuning.obstacle_size(kind);
        debug_assert!(width > 0.0 && height > 0.0, "obstacle with empty extent");

        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            position_x: x,
            width,
            height,
            kind,
        });
        id
    }

    /// Active obstacles in spawn order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn spawn_countdown(&self) -> i64 {
        self.spawn_countdown
    }
}
