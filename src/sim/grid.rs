//! Grid geometry: movement directions and bounds checks
//!
//! Cells are `glam::IVec2` with x as the column and y as the row; y grows
//! downward to match screen rows.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset applied to the head each movement step
    #[inline]
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// The opposite direction; turning into it would cut through the neck
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// True if `cell` lies inside the playable `[0, cols) x [0, rows)` area
///
/// Strict bounds: a head at `x == cols` is already a wall collision.
#[inline]
pub fn in_bounds(cell: IVec2, cols: i32, rows: i32) -> bool {
    cell.x >= 0 && cell.x < cols && cell.y >= 0 && cell.y < rows
}
