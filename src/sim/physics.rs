//! Vertical player physics
//!
//! The player never moves horizontally; the world scrolls instead. Vertical
//! motion is a discrete integration under constant gravity with the ground
//! line as a hard floor at offset 0 (negative offsets are above the ground).

use serde::Serialize;

/// Player vertical state, integrated once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsBody {
    /// Offset from the ground line (0 = grounded, negative = airborne)
    pub vertical_offset: f32,
    /// Velocity applied on the next step (negative = rising)
    pub vertical_velocity: f32,
    pub is_airborne: bool,
    gravity: f32,
    jump_impulse: f32,
}

impl PhysicsBody {
    pub fn new(gravity: f32, jump_impulse: f32) -> Self {
        Self {
            vertical_offset: 0.0,
            vertical_velocity: 0.0,
            is_airborne: false,
            gravity,
            jump_impulse,
        }
    }

    /// Put the player back on the ground at rest
    pub fn reset(&mut self) {
        self.vertical_offset = 0.0;
        self.vertical_velocity = 0.0;
        self.is_airborne = false;
    }

    /// Advance one tick
    ///
    /// Applies the pending velocity, then either lands (clamping to the
    /// ground, no gravity this tick) or accumulates gravity for the next tick.
    pub fn step(&mut self) {
        self.vertical_offset += self.vertical_velocity;

        if !self.land_if_at_or_below_ground() {
            self.vertical_velocity += self.gravity;
            self.is_airborne = true;
        }

        debug_assert!(self.vertical_offset <= 0.0, "player sank below the ground");
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if self.is_airborne {
            return false;
        }
        self.vertical_velocity = self.jump_impulse;
        self.is_airborne = true;
        true
    }

    /// Clamp to the ground if the player reached or passed it
    ///
    /// Landing zeroes the velocity so a grounded body rests with nothing pending.
    pub fn land_if_at_or_below_ground(&mut self) -> bool {
        if self.vertical_offset < 0.0 {
            return false;
        }
        self.vertical_offset = 0.0;
        self.vertical_velocity = 0.0;
        self.is_airborne = false;
        true
    }

    pub fn is_grounded(&self) -> bool {
        !self.is_airborne
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRAVITY, JUMP_IMPULSE};
    use proptest::prelude::*;

    fn body() -> PhysicsBody {
        PhysicsBody::new(GRAVITY, JUMP_IMPULSE)
    }

    #[test]
    fn test_resting_body_stays_put() {
        let mut body = body();
        for _ in 0..100 {
            body.step();
        }
        assert_eq!(body.vertical_offset, 0.0);
        assert_eq!(body.vertical_velocity, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_single_jump() {
        let mut body = body();
        assert!(body.jump());
        assert_eq!(body.vertical_velocity, JUMP_IMPULSE);

        // Second press before landing is dropped
        body.step();
        let velocity = body.vertical_velocity;
        assert!(!body.jump());
        assert_eq!(body.vertical_velocity, velocity);

        // Back-to-back presses with no step in between
        let mut body = self::body();
        body.jump();
        assert!(!body.jump());
        assert_eq!(body.vertical_velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_first_airborne_step_applies_impulse_then_gravity() {
        let mut body = body();
        body.jump();
        body.step();
        assert_eq!(body.vertical_offset, JUMP_IMPULSE);
        assert!((body.vertical_velocity - (JUMP_IMPULSE + GRAVITY)).abs() < 1e-5);
        assert!(body.is_airborne);
    }

    #[test]
    fn test_jump_trajectory_is_symmetric() {
        let mut body = body();
        body.jump();
        let launch_speed = body.vertical_velocity.abs();

        let mut apex = 0.0f32;
        let mut impact_speed = None;
        for _ in 0..1000 {
            let pending = body.vertical_velocity;
            body.step();
            apex = apex.min(body.vertical_offset);
            if body.is_grounded() {
                impact_speed = Some(pending.abs());
                break;
            }
        }

        let impact_speed = impact_speed.expect("player never landed");
        assert_eq!(body.vertical_offset, 0.0);
        assert!(apex < 0.0);
        // Discrete parabola: impact speed matches launch speed to within one
        // tick of gravity
        assert!(
            (impact_speed - launch_speed).abs() <= GRAVITY + 1e-4,
            "launch {launch_speed} vs impact {impact_speed}"
        );
    }

    #[test]
    fn test_can_jump_again_after_landing() {
        let mut body = body();
        body.jump();
        body.step();
        while body.is_airborne {
            body.step();
        }
        assert!(body.jump());
    }

    proptest! {
        #[test]
        fn test_ground_clamp(jump_at in proptest::option::of(0usize..50), steps in 1usize..400) {
            let mut body = body();
            let mut was_grounded = true;
            for i in 0..steps {
                let jumped = Some(i) == jump_at && body.jump();
                body.step();
                prop_assert!(body.vertical_offset <= 0.0);
                if was_grounded && !jumped {
                    prop_assert_eq!(body.vertical_offset, 0.0);
                    prop_assert!(body.is_grounded());
                }
                was_grounded = body.is_grounded();
            }
        }
    }
}
