//! Session controller
//!
//! Owns the canonical game state and the high-score store, and decides when
//! the host should schedule the next frame. The host calls [`SessionController::on_frame`]
//! once per display refresh with the [`FrameRequest`] it was handed; a request
//! from an earlier round (or one that was cancelled) is dropped without
//! touching state.

use crate::persistence::HighScoreStore;
use crate::sim::{GameState, SeededSource, SessionPhase, Snapshot, SpawnSource, TickOutcome, tick};
use crate::tuning::Tuning;

/// Logical input commands (already debounced by the input layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Jump,
}

impl Command {
    /// What a single primary press (space / tap) means in `phase`
    pub fn for_press(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Idle | SessionPhase::Ended => Command::Start,
            SessionPhase::Running => Command::Jump,
        }
    }
}

/// Permission to run one tick, valid only for the round it was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    epoch: u64,
}

impl FrameRequest {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

pub struct SessionController<H: HighScoreStore, S: SpawnSource = SeededSource> {
    state: GameState<S>,
    store: H,
    /// Bumped whenever outstanding frame requests must stop being honoured
    epoch: u64,
}

impl<H: HighScoreStore> SessionController<H, SeededSource> {
    /// Controller with a seeded obstacle stream
    pub fn seeded(store: H, tuning: Tuning, seed: u64) -> Self {
        Self::new(store, tuning, SeededSource::new(seed))
    }
}

impl<H: HighScoreStore, S: SpawnSource> SessionController<H, S> {
    /// Load the best score once and sit at the start prompt
    pub fn new(store: H, tuning: Tuning, source: S) -> Self {
        let high_score = store.load_high_score().unwrap_or(0);
        log::info!("Session ready (best {})", high_score);
        Self {
            state: GameState::new(tuning, high_score, source),
            store,
            epoch: 0,
        }
    }

    /// Handle a command. Returns a frame request when a round begins.
    pub fn command(&mut self, command: Command) -> Option<FrameRequest> {
        match command {
            Command::Start => {
                if !self.state.start() {
                    return None;
                }
                self.epoch += 1;
                log::info!("Round {} started", self.state.rounds);
                Some(FrameRequest { epoch: self.epoch })
            }
            Command::Jump => {
                self.state.jump();
                None
            }
        }
    }

    /// Single-button input: start when stopped, jump while running
    pub fn press(&mut self) -> Option<FrameRequest> {
        self.command(Command::for_press(self.state.phase))
    }

    /// Run one tick for `request`. Returns the request for the next frame
    /// while the round continues.
    pub fn on_frame(&mut self, request: FrameRequest) -> Option<FrameRequest> {
        if request.epoch != self.epoch {
            log::debug!(
                "Dropping stale frame (epoch {} != {})",
                request.epoch,
                self.epoch
            );
            return None;
        }

        match tick(&mut self.state) {
            TickOutcome::Continue => Some(request),
            TickOutcome::Stopped => None,
            TickOutcome::Ended {
                score,
                new_high_score,
                obstacle_id,
            } => {
                self.epoch += 1;
                log::info!(
                    "Round {} over: hit obstacle #{} at score {}",
                    self.state.rounds,
                    obstacle_id,
                    score
                );
                if let Some(best) = new_high_score {
                    log::info!("New best: {}", best);
                    self.store.save_high_score(best);
                }
                None
            }
        }
    }

    /// Invalidate any scheduled frame (host is tearing down or hiding)
    pub fn cancel_pending(&mut self) {
        self.epoch += 1;
    }

    /// Fresh request for a round whose frames were cancelled
    pub fn resume(&mut self) -> Option<FrameRequest> {
        self.state.is_running().then(|| {
            self.epoch += 1;
            FrameRequest { epoch: self.epoch }
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    /// Mutable state access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState<S> {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    pub fn into_store(self) -> H {
        self.store
    }
}
