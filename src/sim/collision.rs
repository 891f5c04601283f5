//! Collision detection
//!
//! Axis-aligned boxes in the shared ground frame (y down, ground line at 0).
//! Both the hit test and the sprite placement go through [`player_box`], so
//! what is drawn is what is tested.

use glam::Vec2;
use serde::Serialize;

use super::obstacles::Obstacle;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Strict overlap on both axes; shared edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min().cmplt(other.max()).all() && self.max().cmpgt(other.min()).all()
    }
}

/// Player hitbox for a given vertical offset
///
/// The sprite sits on the ground line at `x`, lifted by the (negative) offset.
pub fn player_box(x: f32, size: f32, vertical_offset: f32) -> Rect {
    Rect::new(x, vertical_offset - size, size, size)
}

/// First obstacle (in spawn order) whose bounds overlap `player`
pub fn first_overlap<'a>(player: &Rect, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| player.overlaps(&o.bounds()))
}

/// Does `player` overlap any obstacle?
pub fn overlaps(player: &Rect, obstacles: &[Obstacle]) -> bool {
    first_overlap(player, obstacles).is_some()
}
