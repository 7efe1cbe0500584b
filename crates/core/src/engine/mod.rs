//! The render loop state machine.
//!
//! The windowed front end owns the actual event queue and draw calls; the
//! engine here owns every piece of state those touch (mode, transport,
//! cursor and color cycle phase), which keeps the frame body
//! of poll, advance, render, present drivable from tests.

use serde::{Deserialize, Serialize};

use crate::{audio::AudioBuffer, config::EngineConfig, playback::PlaybackCursor};

/// The three interchangeable visualization modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualizationMode {
    Waveform,
    Spectrum,
    Equalizer,
}

impl VisualizationMode {
    /// Uppercase name shown by the overlay.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waveform => "WAVEFORM",
            Self::Spectrum => "SPECTRUM",
            Self::Equalizer => "EQUALIZER",
        }
    }
}

/// Transport state of the render loop. `Terminated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Paused,
    Terminated,
}

/// Input events the front end feeds into the engine, decoupled from any
/// concrete keyboard layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// W, S or E. Orthogonal to transport; touches neither cursor nor
    /// phase.
    SelectMode(VisualizationMode),
    /// SPACE.
    TogglePause,
    /// R. Rewinds the cursor, preserving mode and transport.
    ResetCursor,
    /// Q or a window close request.
    Quit,
}

/// Aggregate render state: mode, transport, cursor and color cycle phase.
///
/// Created once at startup, mutated only through [`Engine::apply`] and
/// [`Engine::advance_frame`], dropped when the loop terminates.
#[derive(Debug)]
pub struct Engine {
    buffer: AudioBuffer,
    cursor: PlaybackCursor,
    mode: VisualizationMode,
    state: EngineState,
    phase: f32,
    chunk_size: usize,
    cursor_step: usize,
    phase_increment: f32,
}

impl Engine {
    /// Builds the engine around a decoded buffer. An empty buffer is
    /// legal and leaves the loop in overlay-only operation.
    pub fn new(buffer: AudioBuffer, config: &EngineConfig) -> Self {
        let cursor = PlaybackCursor::new(buffer.len());
        Self {
            buffer,
            cursor,
            mode: VisualizationMode::Waveform,
            state: EngineState::Running,
            phase: 0.0,
            chunk_size: config.chunk_size,
            cursor_step: config.cursor_step(),
            phase_increment: config.phase_increment,
        }
    }

    pub fn mode(&self) -> VisualizationMode {
        self.mode
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Monotonically increasing animation driver. Never decreases, never
    /// resets while the engine lives.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EngineState::Terminated
    }

    /// Progress through the buffer for the overlay bar, in [0, 1).
    pub fn progress(&self) -> f32 {
        self.cursor.progress()
    }

    /// Applies a single input event to the state machine.
    pub fn apply(&mut self, event: InputEvent) {
        if self.state == EngineState::Terminated {
            return;
        }
        match event {
            InputEvent::SelectMode(mode) => self.mode = mode,
            InputEvent::TogglePause => {
                self.state = if self.state == EngineState::Running {
                    EngineState::Paused
                } else {
                    EngineState::Running
                };
            }
            InputEvent::ResetCursor => self.cursor.reset(),
            InputEvent::Quit => self.state = EngineState::Terminated,
        }
    }

    /// Drains a batch of polled events, oldest first.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// The chunk the current frame renders: `[cursor, cursor + chunk_size)`
    /// truncated at the buffer tail. Empty iff the buffer is empty.
    pub fn chunk(&self) -> &[f32] {
        self.cursor.chunk(self.buffer.samples(), self.chunk_size)
    }

    /// Finishes a rendered frame. While Running over a non-empty buffer
    /// the cursor moves a quarter chunk (wrapping to the start) and the
    /// phase grows by the fixed increment; paused and terminated frames
    /// leave both untouched.
    pub fn advance_frame(&mut self) {
        if self.state != EngineState::Running || self.buffer.is_empty() {
            return;
        }
        self.cursor.advance(self.cursor_step);
        self.phase += self.phase_increment;
    }
}
