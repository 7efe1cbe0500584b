use macroquad::prelude::*;
use neon_visualiser_core::{NeonPalette, Rgb};

use super::color;

/// Spatial frequency of the sinusoidal distortion along x. The plot is a
/// stylised wave, not a literal trace of the source audio.
const WAVE_FREQUENCY: f32 = 0.01;
/// Glow passes per segment; each pass drops thickness and intensity
/// together.
const GLOW_PASSES: u32 = 5;

/// Waveform mode: one decimated sample per pixel column, bent by a
/// phase-driven sine and drawn as glowing segments that cycle the
/// palette.
pub struct WaveformRenderer {
    palette: NeonPalette,
}

impl WaveformRenderer {
    pub fn new(palette: NeonPalette) -> Self {
        Self { palette }
    }

    pub fn draw(&self, chunk: &[f32], phase: f32) {
        let width = screen_width();
        let height = screen_height();

        draw_background_gradient(width, height);
        if chunk.is_empty() {
            return;
        }

        let columns = width as usize;
        let stride = (chunk.len() / columns).max(1);
        let mut points = Vec::with_capacity(columns);
        for x in 0..columns {
            let index = (x * stride).min(chunk.len() - 1);
            let amplitude = chunk[index];
            let y = height / 2.0
                + amplitude * height / 3.0 * (x as f32 * WAVE_FREQUENCY + phase).sin();
            points.push(vec2(x as f32, y));
        }

        let cycle_offset = (phase * 10.0) as usize;
        for (segment, pair) in points.windows(2).enumerate() {
            let base = self.palette.cycle(segment + cycle_offset);
            for pass in (1..=GLOW_PASSES).rev() {
                let glow = base.scaled(pass as f32 / GLOW_PASSES as f32);
                draw_line(
                    pair[0].x,
                    pair[0].y,
                    pair[1].x,
                    pair[1].y,
                    pass as f32,
                    color(glow),
                );
            }
        }
    }
}

/// Dark blue vertical gradient fading to black toward the bottom,
/// repainted in full every frame.
fn draw_background_gradient(width: f32, height: f32) {
    for row in 0..height as u32 {
        let depth = row as f32 / height;
        let shade = Rgb::new(
            (10.0 * (1.0 - depth)) as u8,
            (20.0 * (1.0 - depth)) as u8,
            (40.0 * (1.0 - depth)) as u8,
        );
        draw_line(0.0, row as f32, width, row as f32, 1.0, color(shade));
    }
}
