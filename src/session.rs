use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::GridSize;
use crate::game::{GameState, StepOutcome};
use crate::input::Command;
use crate::scheduler::TickScheduler;
use crate::score::BestScoreStore;

/// Owns the game state, its tick timer and the best-score store.
///
/// Commands and timer expirations are handled one at a time, each to
/// completion, so the state never sees interleaved writers.
#[derive(Debug)]
pub struct Session<S> {
    state: GameState,
    scheduler: TickScheduler,
    store: S,
}

impl<S: BestScoreStore> Session<S> {
    /// Loads the best score and prepares an idle board.
    pub fn new(grid: GridSize, tick_interval: Duration, seed: Option<u64>, store: S) -> Self {
        let best = store.load();
        info!(best, width = grid.width, height = grid.height, "session created");

        let state = match seed {
            Some(seed) => GameState::new_with_seed(grid, best, seed),
            None => GameState::new(grid, best),
        };

        Self::from_state(state, tick_interval, store)
    }

    /// Wraps a prepared state; it must not be running yet.
    pub fn from_state(state: GameState, tick_interval: Duration, store: S) -> Self {
        Self {
            state,
            scheduler: TickScheduler::new(tick_interval),
            store,
        }
    }

    /// Applies one command. Returns whether the screen needs a redraw.
    pub fn handle(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Turn(direction) => self.state.request_direction(direction),
            Command::Start => {
                let changed = self.state.start();
                self.sync_timer(now);
                changed
            }
            Command::TogglePause => {
                let changed = self.state.toggle_pause();
                self.sync_timer(now);
                changed
            }
            Command::Restart => {
                self.state.restart();
                self.sync_timer(now);
                true
            }
            Command::Quit => false,
        }
    }

    /// Keeps exactly one tick pending while running and none otherwise.
    fn sync_timer(&mut self, now: Instant) {
        if !self.state.is_running() {
            self.scheduler.cancel();
        } else if !self.scheduler.is_armed() {
            self.scheduler.arm(now);
        }
    }

    /// Runs the pending tick if it is due and re-arms the timer while the game runs.
    pub fn fire_due(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.scheduler.take_due(now) {
            return None;
        }

        let outcome = self.state.step();
        if self.state.is_running() {
            self.scheduler.arm(now);
        }

        if let Some(best) = outcome.new_best() {
            self.persist_best(best);
        }

        Some(outcome)
    }

    fn persist_best(&mut self, best: u32) {
        match self.store.save(best) {
            Ok(()) => info!(best, "new best score"),
            Err(error) => warn!(%error, best, "failed to save best score"),
        }
    }

    /// When the next tick is due, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    /// Time left until the next tick.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until(now)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn tick_armed(&self) -> bool {
        self.scheduler.is_armed()
    }
}
