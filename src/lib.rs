//! Grid Snake - a classic snake game on a fixed grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `platform`: Renderer/audio interfaces the embedding frame loop drives

pub mod platform;
pub mod sim;

pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Grid width in cells
    pub const COLS: i32 = 30;
    /// Grid height in cells
    pub const ROWS: i32 = 30;
    /// Total cell count; maximum snake length and body-buffer capacity
    pub const GRID_CELLS: usize = (COLS * ROWS) as usize;

    /// Render rate the movement interval is derived from
    pub const TARGET_FPS: u32 = 60;
    /// Seconds between movement steps
    pub const MOVE_INTERVAL: f32 = 0.15;

    /// Frames between movement steps at the given render rate (9 at 60 FPS)
    pub fn ticks_per_move(fps: u32) -> u64 {
        ((fps as f32 * MOVE_INTERVAL).round() as u64).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::consts::*;

    #[test]
    fn test_ticks_per_move() {
        assert_eq!(ticks_per_move(TARGET_FPS), 9);
        assert_eq!(ticks_per_move(30), 5);
        // Degenerate rates still move every frame rather than never
        assert_eq!(ticks_per_move(1), 1);
    }
}
