//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use grid::{Direction, in_bounds};
pub use snake::Snake;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
