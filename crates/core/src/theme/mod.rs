use serde::{Deserialize, Serialize};

/// A single 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color with every channel scaled by `factor` in [0, 1].
    /// The glow passes use this to redraw a shape at fading intensity.
    pub fn scaled(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
        }
    }
}

/// The fixed, ordered seven-color neon palette cycled through by the
/// renderers.
///
/// Renderers receive the palette at construction time; nothing in the
/// crate reaches for a global theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NeonPalette {
    pub pink: Rgb,
    pub cyan: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub orange: Rgb,
    pub purple: Rgb,
    pub blue: Rgb,
}

impl Default for NeonPalette {
    fn default() -> Self {
        Self {
            pink: Rgb::new(255, 16, 240),
            cyan: Rgb::new(0, 255, 255),
            green: Rgb::new(57, 255, 20),
            yellow: Rgb::new(255, 255, 0),
            orange: Rgb::new(255, 102, 0),
            purple: Rgb::new(191, 0, 255),
            blue: Rgb::new(27, 3, 163),
        }
    }
}

impl NeonPalette {
    /// Number of colors in the cycle.
    pub const LEN: usize = 7;

    /// Returns the color at `index`, wrapping around the palette in its
    /// fixed order.
    pub fn cycle(&self, index: usize) -> Rgb {
        match index % Self::LEN {
            0 => self.pink,
            1 => self.cyan,
            2 => self.green,
            3 => self.yellow,
            4 => self.orange,
            5 => self.purple,
            _ => self.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_around_the_palette() {
        let palette = NeonPalette::default();
        assert_eq!(palette.cycle(0), palette.pink);
        assert_eq!(palette.cycle(6), palette.blue);
        assert_eq!(palette.cycle(7), palette.pink);
        assert_eq!(palette.cycle(7 * 12 + 2), palette.green);
    }

    #[test]
    fn scaling_dims_every_channel() {
        let half = Rgb::new(200, 100, 50).scaled(0.5);
        assert_eq!(half, Rgb::new(100, 50, 25));
    }

    #[test]
    fn scaling_clamps_the_factor() {
        let color = Rgb::new(10, 20, 30);
        assert_eq!(color.scaled(2.0), color);
        assert_eq!(color.scaled(-1.0), Rgb::new(0, 0, 0));
    }
}
