//! Core engine for the Neon Audio Visualiser.
//!
//! The crate hosts everything that does not need a display: decoding an
//! audio file into a normalized mono sample buffer, playback cursor
//! bookkeeping, spectral analysis with the per-mode bucketing policies,
//! and the render loop state machine. The windowed application crate
//! drives these pieces once per frame, which keeps the whole engine
//! drivable from tests without opening a window.

pub mod analysis;
pub mod audio;
pub mod config;
pub mod engine;
pub mod error;
pub mod playback;
pub mod theme;

pub use analysis::{SpectralAnalyzer, EQUALIZER_BANDS, SPECTRUM_BARS};
pub use audio::{AudioBuffer, ContainerFormat};
pub use config::{AppConfig, EngineConfig};
pub use engine::{Engine, EngineState, InputEvent, VisualizationMode};
pub use error::{LoadError, Result, VisualiserError};
pub use playback::PlaybackCursor;
pub use theme::{NeonPalette, Rgb};
