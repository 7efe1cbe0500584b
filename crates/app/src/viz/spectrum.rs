use macroquad::prelude::*;
use neon_visualiser_core::{NeonPalette, Rgb};

use super::color;

const BACKGROUND: Rgb = Rgb::new(5, 5, 15);
/// Glow passes per bar; pass `j` insets the rect horizontally, grows it
/// vertically and dims the color.
const GLOW_PASSES: u32 = 3;

/// Spectrum mode: 64 bars of compressed, decimated magnitude, colored by
/// horizontal tertile (low, mid, high frequencies).
pub struct SpectrumRenderer {
    palette: NeonPalette,
}

impl SpectrumRenderer {
    pub fn new(palette: NeonPalette) -> Self {
        Self { palette }
    }

    pub fn draw(&self, bars: &[f32]) {
        clear_background(color(BACKGROUND));
        if bars.is_empty() {
            return;
        }

        let width = screen_width();
        let height = screen_height();
        let bar_width = width / bars.len() as f32;

        for (index, magnitude) in bars.iter().enumerate() {
            let bar_height = magnitude * height / 4.0;
            let ratio = index as f32 / bars.len() as f32;
            let base = if ratio < 0.33 {
                self.palette.pink
            } else if ratio < 0.66 {
                self.palette.green
            } else {
                self.palette.cyan
            };

            let x = index as f32 * bar_width;
            let y = height - bar_height;
            for pass in 0..GLOW_PASSES {
                let glow = base.scaled((GLOW_PASSES - pass) as f32 / GLOW_PASSES as f32);
                let inset = pass as f32;
                draw_rectangle(
                    x + inset,
                    y - inset,
                    (bar_width - 2.0 * inset).max(0.0),
                    bar_height + 2.0 * inset,
                    color(glow),
                );
            }
        }
    }
}
