//! Per-frame simulation tick
//!
//! Called exactly once per rendered frame. Direction intents land before
//! the movement step reads them, and movement itself runs at most once per
//! `ticks_per_move` frames, decoupling snake speed from render rate.

use super::grid::{self, Direction};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single frame (edge-triggered)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction intent from this frame's key presses
    pub direction: Option<Direction>,
    /// Restart after a terminal state
    pub restart: bool,
    /// Demo mode - the autopilot chases the apple
    pub autopilot: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_terminal() {
        if input.restart {
            let seed = state.next_seed();
            state.restart(seed);
            log::info!("restarted with seed {seed}");
        }
        return;
    }

    let direction = if input.autopilot {
        autopilot(state).or(input.direction)
    } else {
        input.direction
    };
    if let Some(dir) = direction {
        state.set_direction(dir);
    }

    state.frame_counter += 1;

    // Movement is gated to the fixed timestep; every other frame only
    // advances the counter. NotStarted idles here until the first input.
    if state.phase != GamePhase::Running {
        return;
    }
    if state.frame_counter % state.ticks_per_move != 0 {
        return;
    }

    move_snake(state);
}

/// One movement step: advance the body, settle apple growth, then check
/// the new head against the walls and the rest of the body.
fn move_snake(state: &mut GameState) {
    let Some(dir) = state.snake.dir else {
        return;
    };

    let new_head = state.snake.advance_head(dir);
    if new_head == state.apple {
        state.snake.grow();
        state.events.push(GameEvent::AppleEaten);
        state.spawn_apple();
    } else {
        state.snake.drop_tail();
    }
    state.move_gate = true;

    // A step that filled the board already ended the run as a win
    if state.phase != GamePhase::Running {
        return;
    }

    if !grid::in_bounds(new_head, state.cols, state.rows) || state.snake.self_collision() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "game over at {new_head} with score {} on frame {}",
            state.score(),
            state.frame_counter
        );
    }
}

/// Greedy apple chase used by the demo binary: close the larger axis gap
/// first, never reverse, and step around cells that would end the run.
fn autopilot(state: &GameState) -> Option<Direction> {
    let head = state.snake.head();
    let to_apple = state.apple - head;

    let horizontal = if to_apple.x > 0 {
        Direction::Right
    } else {
        Direction::Left
    };
    let vertical = if to_apple.y > 0 {
        Direction::Down
    } else {
        Direction::Up
    };

    let mut candidates = if to_apple.x.abs() >= to_apple.y.abs() {
        vec![horizontal, vertical]
    } else {
        vec![vertical, horizontal]
    };
    for dir in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        if !candidates.contains(&dir) {
            candidates.push(dir);
        }
    }

    candidates.into_iter().find(|&dir| {
        if let Some(current) = state.snake.dir
            && dir == current.reverse()
        {
            return false;
        }
        let next = head + dir.offset();
        // The tail cell vacates this step unless the apple is eaten
        let blocked = state.snake.occupies(next) && next != state.snake.tail();
        grid::in_bounds(next, state.cols, state.rows) && !blocked
    })
}
