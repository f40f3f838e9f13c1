use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GridSize;
use crate::food::place_food;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Fresh board waiting for the first start.
    Idle,
    Running,
    Paused,
    /// The head hit the body.
    Over,
    /// The snake covers every cell.
    Won,
}

/// Result of one call to [`GameState::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was not running; nothing changed.
    Skipped,
    Moved,
    Ate,
    /// Self-collision ended the run. `new_best` is set when the score beat the record.
    Collided { new_best: Option<u32> },
    /// The last free cell was eaten.
    Filled { new_best: Option<u32> },
}

impl StepOutcome {
    /// Returns the record to persist, if this step set one.
    #[must_use]
    pub fn new_best(self) -> Option<u32> {
        match self {
            Self::Collided { new_best } | Self::Filled { new_best } => new_best,
            _ => None,
        }
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    direction: Direction,
    next_direction: Direction,
    food: Option<Position>,
    score: u32,
    best: u32,
    new_record: bool,
    status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates an idle board seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize, best: u32) -> Self {
        Self::with_rng(bounds, best, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, best: u32, seed: u64) -> Self {
        Self::with_rng(bounds, best, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, best: u32, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(bounds.center()),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            score: 0,
            best,
            new_record: false,
            status: GameStatus::Idle,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Replaces the board with an explicit layout and makes it idle.
    ///
    /// Fixture constructor for scenario tests: the layout is taken as given,
    /// so callers must pass a connected snake and food off its body.
    #[doc(hidden)]
    pub fn arrange(
        &mut self,
        snake: Snake,
        direction: Direction,
        food: Option<Position>,
        score: u32,
    ) {
        self.snake = snake;
        self.direction = direction;
        self.next_direction = direction;
        self.food = food;
        self.score = score;
        self.new_record = false;
        self.status = GameStatus::Idle;
    }

    /// Puts a single segment in the center heading right, with fresh food.
    ///
    /// `best` survives a reset.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.bounds.center());
        self.direction = Direction::Right;
        self.next_direction = self.direction;
        self.score = 0;
        self.new_record = false;
        self.status = GameStatus::Idle;
        self.food = place_food(&mut self.rng, self.bounds, &self.snake);
    }

    /// Stores a turn for the next tick unless it reverses the committed direction.
    ///
    /// Returns whether the request was accepted; the last accepted request
    /// before a tick wins.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.next_direction = direction;
        true
    }

    /// Idle or Paused → Running. Returns whether the status changed.
    pub fn start(&mut self) -> bool {
        if !matches!(self.status, GameStatus::Idle | GameStatus::Paused) {
            return false;
        }

        self.status = GameStatus::Running;
        info!(score = self.score, "run started");
        true
    }

    /// Running → Paused. Returns whether the status changed.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.status = GameStatus::Paused;
        info!(score = self.score, "run paused");
        true
    }

    /// Pauses a running game, starts any other startable one.
    pub fn toggle_pause(&mut self) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Any state → Idle with a fresh board.
    pub fn restart(&mut self) {
        self.pause();
        self.reset();
        info!("board restarted");
    }

    /// Advances simulation by one gameplay tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Skipped;
        }

        self.direction = self.next_direction;
        let head = self.snake.head().offset(self.direction).wrapped(self.bounds);
        let eats = self.food == Some(head);

        if self.snake.occupies(head) {
            let new_best = self.finish(GameStatus::Over);
            return StepOutcome::Collided { new_best };
        }

        self.snake.advance(head, eats);
        if !eats {
            return StepOutcome::Moved;
        }

        self.score += 1;
        debug!(score = self.score, length = self.snake.len(), "food eaten");

        self.food = place_food(&mut self.rng, self.bounds, &self.snake);
        if self.food.is_none() {
            let new_best = self.finish(GameStatus::Won);
            return StepOutcome::Filled { new_best };
        }

        StepOutcome::Ate
    }

    /// Ends the run and returns the new record when the score beat `best`.
    fn finish(&mut self, status: GameStatus) -> Option<u32> {
        self.status = status;
        info!(?status, score = self.score, best = self.best, "run finished");

        if self.score > self.best {
            self.best = self.score;
            self.new_record = true;
            return Some(self.best);
        }
        None
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction committed by the last tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will commit.
    #[must_use]
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Current food cell; `None` once the snake fills the board.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }

    /// True when the finished run beat the previous best.
    #[must_use]
    pub fn new_record(&self) -> bool {
        self.new_record
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// True after a collision or a filled board, until restart.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over | GameStatus::Won)
    }
}
