//! Grid Snake entry point
//!
//! Runs the simulation headless with the autopilot driving; a graphical
//! frontend plugs in through the `platform` traits instead of this loop.

use std::time::{SystemTime, UNIX_EPOCH};

use grid_snake::consts::TARGET_FPS;
use grid_snake::platform::{
    AudioSink, FrameSnapshot, LogAudio, NullRenderer, Renderer, SoundEffect,
};
use grid_snake::sim::{GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    log::info!("grid snake starting with seed {seed}");

    let mut renderer = NullRenderer::default();
    let mut audio = LogAudio;
    let input = TickInput {
        autopilot: true,
        ..TickInput::default()
    };

    // One tick per would-be rendered frame, capped at ten minutes of frames
    let max_frames = TARGET_FPS as u64 * 600;
    while !state.phase.is_terminal() && state.frame_counter < max_frames {
        tick(&mut state, &input);
        for event in state.events.drain(..) {
            if let Some(effect) = SoundEffect::from_event(event) {
                audio.play(effect);
            }
        }
        renderer.render(&FrameSnapshot::capture(&state));
    }

    let snapshot = FrameSnapshot::capture(&state);
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::info!("final frame: {json}"),
        Err(err) => log::warn!("could not serialize final frame: {err}"),
    }
    log::info!(
        "run over: {:?} with score {} after {} frames",
        snapshot.phase,
        snapshot.score,
        state.frame_counter
    );
}
