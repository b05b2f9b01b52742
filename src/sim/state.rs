//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: seeded RNG, snake,
//! apple, phase, frame counter. Identical seeds plus identical per-frame
//! inputs replay identically.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Direction;
use super::snake::Snake;
use crate::consts;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first direction input
    NotStarted,
    /// Active gameplay
    Running,
    /// Snake hit a wall or itself; terminal until restart
    GameOver,
    /// Snake fills the whole grid; nowhere left to place an apple
    BoardFull,
}

impl GamePhase {
    /// True for the states a restart input recovers from
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::BoardFull)
    }
}

/// One-shot events produced by a tick, drained by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AppleEaten,
    GameOver,
    BoardFull,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub(crate) cols: i32,
    pub(crate) rows: i32,
    /// Frames between movement steps
    pub(crate) ticks_per_move: u64,
    /// Monotonic frame counter; movement happens when it hits a multiple
    /// of `ticks_per_move`
    pub frame_counter: u64,
    pub phase: GamePhase,
    pub snake: Snake,
    pub apple: IVec2,
    /// Open while a direction change is still acceptable this movement tick
    pub(crate) move_gate: bool,
    /// Events since the frame loop last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh game on the standard grid
    pub fn new(seed: u64) -> Self {
        Self::with_grid(seed, consts::COLS, consts::ROWS)
    }

    /// Grid dimensions are fixed per process; tests exercise small boards
    /// through this constructor.
    pub(crate) fn with_grid(seed: u64, cols: i32, rows: i32) -> Self {
        let capacity = (cols * rows) as usize;
        let center = IVec2::new(cols / 2, rows / 2);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            cols,
            rows,
            ticks_per_move: consts::ticks_per_move(consts::TARGET_FPS),
            frame_counter: 0,
            phase: GamePhase::NotStarted,
            snake: Snake::new(capacity, center),
            apple: IVec2::ZERO,
            move_gate: true,
            events: Vec::new(),
        };
        state.spawn_apple();
        state
    }

    /// Reset for a new run on the same grid
    pub fn restart(&mut self, seed: u64) {
        *self = Self::with_grid(seed, self.cols, self.rows);
    }

    /// Grid width in cells
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Grid height in cells
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Apples eaten so far
    #[inline]
    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    /// Request a direction change for the next movement step.
    ///
    /// Accepted at most once per movement tick, and never into the reverse
    /// of the current heading. Returns whether the request was accepted;
    /// rejections are silent.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !matches!(self.phase, GamePhase::NotStarted | GamePhase::Running) {
            return false;
        }
        if !self.move_gate {
            return false;
        }
        if let Some(current) = self.snake.dir
            && requested == current.reverse()
        {
            return false;
        }

        self.snake.dir = Some(requested);
        self.move_gate = false;
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
        true
    }

    /// Place the apple on a uniformly random free cell.
    ///
    /// A fully occupied board has no free cell; that run is won and the
    /// phase becomes `BoardFull` instead of resampling forever.
    pub fn spawn_apple(&mut self) {
        if self.snake.len() >= self.snake.capacity() {
            self.phase = GamePhase::BoardFull;
            self.events.push(GameEvent::BoardFull);
            return;
        }
        loop {
            let cell = IVec2::new(
                self.rng.random_range(0..self.cols),
                self.rng.random_range(0..self.rows),
            );
            if !self.snake.occupies(cell) {
                self.apple = cell;
                return;
            }
        }
    }

    /// Draw a fresh seed for the next run from the current stream
    pub(crate) fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}
