//! Keyboard surface: polls the window's input state once per frame and
//! converts it into engine events.

use macroquad::prelude::*;
use neon_visualiser_core::{InputEvent, VisualizationMode};

/// Collects every input event pending for this frame without blocking.
/// The caller drains the whole batch before any rendering happens.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();
    if is_quit_requested() || is_key_pressed(KeyCode::Q) {
        events.push(InputEvent::Quit);
    }
    if is_key_pressed(KeyCode::W) {
        events.push(InputEvent::SelectMode(VisualizationMode::Waveform));
    }
    if is_key_pressed(KeyCode::S) {
        events.push(InputEvent::SelectMode(VisualizationMode::Spectrum));
    }
    if is_key_pressed(KeyCode::E) {
        events.push(InputEvent::SelectMode(VisualizationMode::Equalizer));
    }
    if is_key_pressed(KeyCode::Space) {
        events.push(InputEvent::TogglePause);
    }
    if is_key_pressed(KeyCode::R) {
        events.push(InputEvent::ResetCursor);
    }
    events
}
