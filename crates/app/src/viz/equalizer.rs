use macroquad::prelude::*;
use neon_visualiser_core::{NeonPalette, Rgb};

use super::color;

const BACKGROUND: Rgb = Rgb::new(5, 5, 20);
/// Fixed scale from averaged raw magnitude to pixels.
const HEIGHT_SCALE: f32 = 0.01;
/// Bands never reach the top edge; this much stays clear.
const TOP_MARGIN: f32 = 50.0;
/// Depth of the per-band sinusoidal height modulation.
const HEIGHT_SWING: f32 = 0.3;
const BAND_FREQUENCY: f32 = 0.5;
const ROW_FREQUENCY: f32 = 0.1;
/// Horizontal ripple amplitude in pixels.
const RIPPLE_PIXELS: f32 = 5.0;

/// Equalizer mode: 32 bands of averaged raw magnitude, each drawn as a
/// rippling column whose color dims toward its top.
pub struct EqualizerRenderer {
    palette: NeonPalette,
}

impl EqualizerRenderer {
    pub fn new(palette: NeonPalette) -> Self {
        Self { palette }
    }

    pub fn draw(&self, bands: &[f32], phase: f32) {
        clear_background(color(BACKGROUND));
        if bands.is_empty() {
            return;
        }

        let width = screen_width();
        let height = screen_height();
        let slot_width = width / bands.len() as f32;

        for (index, magnitude) in bands.iter().enumerate() {
            let swing = (index as f32 * BAND_FREQUENCY + phase * 2.0).sin();
            let band_height = (magnitude * HEIGHT_SCALE * height * (1.0 + swing * HEIGHT_SWING))
                .min(height - TOP_MARGIN);
            if band_height < 1.0 {
                continue;
            }

            let base = self.palette.cycle(index);
            let x = index as f32 * slot_width + slot_width / 4.0;
            let top = height - band_height;
            let column_width = slot_width / 2.0;

            // Rows are drawn every other pixel; each wobbles horizontally
            // with the phase to ripple the whole column.
            for row in (0..band_height as u32).step_by(2) {
                let depth = row as f32 / band_height;
                let glow = base.scaled(0.3 + 0.7 * depth);
                let ripple = (row as f32 * ROW_FREQUENCY + phase).sin() * RIPPLE_PIXELS;
                let y = top + row as f32;
                draw_line(x + ripple, y, x + ripple + column_width, y, 2.0, color(glow));
            }
        }
    }
}
