//! Platform interfaces the embedding frame loop drives
//!
//! The simulation knows nothing about pixels or speakers. Each frame the
//! loop captures a `FrameSnapshot` for its renderer and forwards drained
//! simulation events to an `AudioSink`. Headless implementations live here
//! so the demo binary and tests can run without a window.

use glam::IVec2;
use serde::Serialize;

use crate::sim::{GameEvent, GamePhase, GameState};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Apple eaten this movement step
    AppleEaten,
    /// Run ended (collision or full board)
    GameOver,
}

impl SoundEffect {
    /// Map a simulation event to its sound, if it has one
    pub fn from_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::AppleEaten => Some(SoundEffect::AppleEaten),
            GameEvent::GameOver | GameEvent::BoardFull => Some(SoundEffect::GameOver),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub cols: i32,
    pub rows: i32,
    /// Body cells ordered tail to head
    pub body: Vec<IVec2>,
    pub apple: IVec2,
    pub phase: GamePhase,
    pub score: u32,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            cols: state.cols(),
            rows: state.rows(),
            body: state.snake.iter().collect(),
            apple: state.apple,
            phase: state.phase,
            score: state.score(),
        }
    }
}

/// Turns a frame of state into pixels; in-process call contract only
pub trait Renderer {
    fn render(&mut self, snapshot: &FrameSnapshot);
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Headless renderer: logs phase transitions instead of drawing
#[derive(Debug, Default)]
pub struct NullRenderer {
    last_phase: Option<GamePhase>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, snapshot: &FrameSnapshot) {
        if self.last_phase != Some(snapshot.phase) {
            log::debug!(
                "phase {:?}, score {}, length {}",
                snapshot.phase,
                snapshot.score,
                snapshot.body.len()
            );
            self.last_phase = Some(snapshot.phase);
        }
    }
}

/// Audio sink that logs instead of playing
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx {effect:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, TickInput, tick};

    #[test]
    fn test_snapshot_orders_body_tail_to_head() {
        let mut state = GameState::new(5);
        state.apple = IVec2::new(16, 15);
        state.set_direction(Direction::Right);
        let input = TickInput::default();
        for _ in 0..9 {
            tick(&mut state, &input);
        }

        let snapshot = FrameSnapshot::capture(&state);
        assert_eq!(snapshot.body, vec![IVec2::new(15, 15), IVec2::new(16, 15)]);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert_eq!((snapshot.cols, snapshot.rows), (30, 30));
    }

    #[test]
    fn test_events_map_to_sounds() {
        assert_eq!(
            SoundEffect::from_event(GameEvent::AppleEaten),
            Some(SoundEffect::AppleEaten)
        );
        assert_eq!(
            SoundEffect::from_event(GameEvent::BoardFull),
            Some(SoundEffect::GameOver)
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(5);
        let snapshot = FrameSnapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("NotStarted"));
    }
}
