//! Mode renderers and the persistent overlay.
//!
//! Every renderer fully repaints its background before drawing the
//! foreground; nothing relies on the previous frame's pixels surviving
//! presentation.

mod equalizer;
mod overlay;
mod spectrum;
mod waveform;

use macroquad::prelude::*;
use neon_visualiser_core::{NeonPalette, Result, Rgb, SpectralAnalyzer, VisualizationMode};

use equalizer::EqualizerRenderer;
use overlay::OverlayRenderer;
use spectrum::SpectrumRenderer;
use waveform::WaveformRenderer;

/// Dispatches each frame to the renderer for the active mode.
pub struct FrameRenderer {
    waveform: WaveformRenderer,
    spectrum: SpectrumRenderer,
    equalizer: EqualizerRenderer,
    overlay: OverlayRenderer,
}

impl FrameRenderer {
    /// The palette is handed to each renderer up front and never changes
    /// during a run.
    pub fn new(palette: NeonPalette) -> Self {
        Self {
            waveform: WaveformRenderer::new(palette.clone()),
            spectrum: SpectrumRenderer::new(palette.clone()),
            equalizer: EqualizerRenderer::new(palette.clone()),
            overlay: OverlayRenderer::new(palette),
        }
    }

    /// Paints the active mode's frame from the current chunk and phase.
    pub fn draw_scene(
        &self,
        mode: VisualizationMode,
        chunk: &[f32],
        phase: f32,
        analyzer: &mut SpectralAnalyzer,
    ) -> Result<()> {
        match mode {
            VisualizationMode::Waveform => self.waveform.draw(chunk, phase),
            VisualizationMode::Spectrum => {
                let bars = analyzer.spectrum_bars(chunk)?;
                self.spectrum.draw(&bars);
            }
            VisualizationMode::Equalizer => {
                let bands = analyzer.equalizer_bands(chunk)?;
                self.equalizer.draw(&bands, phase);
            }
        }
        Ok(())
    }

    /// Background-only frame for the empty-buffer (overlay-only) case.
    pub fn draw_idle(&self) {
        clear_background(color(Rgb::new(5, 5, 15)));
    }

    /// Mode name, control legend and progress bar, drawn after the scene
    /// on every frame regardless of mode.
    pub fn draw_overlay(&self, mode: VisualizationMode, progress: f32) {
        self.overlay.draw(mode, progress);
    }
}

/// Converts a palette color into a drawable color.
pub(crate) fn color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}
