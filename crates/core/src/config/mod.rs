use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{theme::NeonPalette, Result};

/// Top-level configuration structure for the application.
///
/// Everything has sensible defaults; an optional JSON file can override
/// individual fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub palette: NeonPalette,
}

impl AppConfig {
    /// Loads a configuration overlay from a JSON file. Missing fields keep
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Tunables for the visualization engine and its frame loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Display width in pixels. The window is not resizable.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    /// Sample rate compressed input is decoded at.
    pub sample_rate: u32,
    /// Number of samples handed to the analyzer per frame.
    pub chunk_size: usize,
    /// Upper bound on the frame rate. Advisory rate limiting, not a
    /// deadline.
    pub target_fps: u32,
    /// Amount the color cycle phase grows per running frame.
    pub phase_increment: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            sample_rate: 44_100,
            chunk_size: 2048,
            target_fps: 60,
            phase_increment: 0.05,
        }
    }
}

impl EngineConfig {
    /// Samples the cursor moves per running frame. A quarter chunk slows
    /// the visual progression relative to literal playback on purpose.
    pub fn cursor_step(&self) -> usize {
        (self.chunk_size / 4).max(1)
    }
}
