use macroquad::prelude::*;
use neon_visualiser_core::{NeonPalette, Rgb, VisualizationMode};

use super::color;

const FONT_SIZE: f32 = 24.0;
const TRACK: Rgb = Rgb::new(50, 50, 50);
const LEGEND: [&str; 2] = [
    "W: Waveform | S: Spectrum | E: Equalizer",
    "SPACE: Pause | R: Reset | Q: Quit",
];

/// Mode name, control legend and playback progress, drawn after the
/// scene on every frame regardless of mode.
pub struct OverlayRenderer {
    palette: NeonPalette,
}

impl OverlayRenderer {
    pub fn new(palette: NeonPalette) -> Self {
        Self { palette }
    }

    pub fn draw(&self, mode: VisualizationMode, progress: f32) {
        let width = screen_width();
        let height = screen_height();

        draw_text(
            &format!("MODE: {}", mode.label()),
            10.0,
            24.0,
            FONT_SIZE,
            color(self.palette.cyan),
        );
        for (line, text) in LEGEND.iter().enumerate() {
            draw_text(
                text,
                10.0,
                52.0 + line as f32 * 25.0,
                FONT_SIZE,
                color(self.palette.green),
            );
        }

        let bar_width = width - 40.0;
        let bar_y = height - 30.0;
        draw_rectangle(20.0, bar_y, bar_width, 10.0, color(TRACK));
        draw_rectangle(
            20.0,
            bar_y,
            bar_width * progress.clamp(0.0, 1.0),
            10.0,
            color(self.palette.pink),
        );
    }
}
