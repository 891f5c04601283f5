//! Fixed timestep simulation tick
//!
//! One tick per display frame: physics, obstacles, hit test, score.

use super::collision::first_overlap;
use super::spawn::SpawnSource;
use super::state::{GameState, SessionPhase};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Stopped,
    /// Survived; schedule the next tick
    Continue,
    /// Collided this tick and the round is over
    Ended {
        score: u64,
        /// Set when `score` beat the previous best
        new_high_score: Option<u64>,
        /// Obstacle that was hit
        obstacle_id: u32,
    },
}

/// Advance the game state by one tick
pub fn tick<S: SpawnSource>(state: &mut GameState<S>) -> TickOutcome {
    if state.phase != SessionPhase::Running {
        return TickOutcome::Stopped;
    }

    state.player.step();
    state.obstacles.step(state.tuning.run_speed);

    let player = state.player_box();
    if let Some(hit) = first_overlap(&player, state.obstacles.obstacles()) {
        let obstacle_id = hit.id;
        state.phase = SessionPhase::Ended;

        let new_high_score = (state.score > state.high_score).then(|| {
            state.high_score = state.score;
            state.score
        });
        return TickOutcome::Ended {
            score: state.score,
            new_high_score,
            obstacle_id,
        };
    }

    state.score += 1;
    TickOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::obstacles::ObstacleKind;
    use crate::sim::spawn::{ScriptedSource, SeededSource};
    use crate::tuning::Tuning;

    fn running(high_score: u64) -> GameState<ScriptedSource> {
        let mut state = GameState::new(Tuning::default(), high_score, ScriptedSource::sparse());
        state.start();
        state
    }

    #[test]
    fn test_tick_does_nothing_unless_running() {
        let mut state = GameState::new(Tuning::default(), 0, ScriptedSource::sparse());
        assert_eq!(tick(&mut state), TickOutcome::Stopped);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.obstacles().is_empty());
    }

    #[test]
    fn test_score_counts_survived_ticks() {
        let mut state = running(0);
        for _ in 0..50 {
            assert_eq!(tick(&mut state), TickOutcome::Continue);
        }
        assert_eq!(state.score, 50);
        // The immediate spawn is far off to the right
        assert_eq!(state.obstacles.obstacles().len(), 1);
    }

    #[test]
    fn test_collision_on_sixtieth_tick() {
        let mut state = running(1000);
        // Left edge reaches the player's right edge (x = 80) between ticks 59 and 60
        let x = PLAYER_X + PLAYER_SIZE + 59.0 * RUN_SPEED + 1.0;
        let placed = state.obstacles.place(ObstacleKind::Block, x);

        for _ in 0..59 {
            assert_eq!(tick(&mut state), TickOutcome::Continue);
        }
        assert_eq!(
            tick(&mut state),
            TickOutcome::Ended {
                score: 59,
                new_high_score: None,
                obstacle_id: placed,
            }
        );
        assert_eq!(state.phase, SessionPhase::Ended);
        assert_eq!(state.score, 59);
        assert_eq!(state.high_score, 1000);

        // Frozen after the end
        assert_eq!(tick(&mut state), TickOutcome::Stopped);
        assert_eq!(state.score, 59);
    }

    #[test]
    fn test_new_high_score_reported_once() {
        let mut state = running(10);
        state
            .obstacles
            .place(ObstacleKind::Spike, PLAYER_X + PLAYER_SIZE + 20.0 * RUN_SPEED + 1.0);
        let outcome = loop {
            match tick(&mut state) {
                TickOutcome::Continue => continue,
                other => break other,
            }
        };
        assert!(matches!(
            outcome,
            TickOutcome::Ended {
                score: 20,
                new_high_score: Some(20),
                ..
            }
        ));
        assert_eq!(state.high_score, 20);
    }

    #[test]
    fn test_jumping_clears_block() {
        let mut state = running(0);
        // Block arrives around tick 20; a jump at tick 8 spans it
        state
            .obstacles
            .place(ObstacleKind::Block, PLAYER_X + PLAYER_SIZE + 20.0 * RUN_SPEED + 1.0);
        for t in 0..120 {
            if t == 8 {
                assert!(state.jump());
            }
            assert_eq!(tick(&mut state), TickOutcome::Continue, "hit at tick {t}");
        }
        assert!(state.player.is_grounded());
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs end identically
        let run = || {
            let mut state = GameState::new(Tuning::default(), 0, SeededSource::new(99999));
            state.start();
            let mut outcome = TickOutcome::Continue;
            for t in 0..5000u32 {
                if t % 37 == 0 {
                    state.jump();
                }
                outcome = tick(&mut state);
                if outcome != TickOutcome::Continue {
                    break;
                }
            }
            (outcome, state.score, state.obstacles.obstacles().to_vec())
        };
        assert_eq!(run(), run());
    }
}
