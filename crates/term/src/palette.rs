//! Palette: the presentation layer's mapping from color index to RGB.
//!
//! The board only knows opaque indices (0 = background). Which colors those
//! are is decided here, so swapping a palette never touches the engine.

use crate::fb::Rgb;
use crate::types::PALETTE_LEN;

/// Ordered palette; entry 0 is the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    pub const fn new(colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    /// Black background with cyan, magenta, yellow, green, orange, red.
    pub const fn vivid() -> Self {
        Self::new([
            Rgb::new(0, 0, 0),
            Rgb::new(80, 220, 220),
            Rgb::new(200, 120, 220),
            Rgb::new(240, 220, 80),
            Rgb::new(100, 220, 120),
            Rgb::new(255, 165, 0),
            Rgb::new(220, 80, 80),
        ])
    }

    pub fn background(&self) -> Rgb {
        self.colors[0]
    }

    /// Color for an index; unknown indices render as background
    pub fn color(&self, index: u8) -> Rgb {
        self.colors
            .get(index as usize)
            .copied()
            .unwrap_or(self.colors[0])
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::vivid()
    }
}
