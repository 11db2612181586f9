use eframe::egui::{Color32, Rgba};

/// Top/bottom colors of the vertical background gradients.
pub const GRADIENT_PAIRS: [(Color32, Color32); 7] = [
    (
        Color32::from_rgb(0xEE, 0xBD, 0x89),
        Color32::from_rgb(0xD1, 0x3A, 0xBD),
    ),
    (
        Color32::from_rgb(0x96, 0x00, 0xFF),
        Color32::from_rgb(0xAE, 0xBA, 0xF8),
    ),
    (
        Color32::from_rgb(0xF6, 0xEA, 0x41),
        Color32::from_rgb(0xF0, 0x48, 0xC6),
    ),
    (
        Color32::from_rgb(0xBB, 0x73, 0xE0),
        Color32::from_rgb(0xFF, 0x8D, 0xDB),
    ),
    (
        Color32::from_rgb(0x0C, 0xCD, 0xA3),
        Color32::from_rgb(0xC1, 0xFC, 0xD3),
    ),
    (
        Color32::from_rgb(0xC9, 0x73, 0xFF),
        Color32::from_rgb(0xAE, 0xBA, 0xF8),
    ),
    (
        Color32::from_rgb(0xF9, 0x95, 0x7F),
        Color32::from_rgb(0xF2, 0xF5, 0xD0),
    ),
];

const LIGHT_BACKGROUND_INTENSITY: f32 = 0.5;

/// Picks black or white, whichever reads better on `background`.
#[must_use]
pub fn content_color_for(background: Color32) -> Color32 {
    if Rgba::from(background).intensity() > LIGHT_BACKGROUND_INTENSITY {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

/// Colors for one screen, derived from a gradient pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPalette {
    pub gradient_top: Color32,
    pub gradient_bottom: Color32,
    /// Title text, readable on the top color.
    pub title: Color32,
    /// Dice, button outlines and labels, readable on the bottom color.
    pub content: Color32,
}

impl ScreenPalette {
    /// Palette for `GRADIENT_PAIRS[index]`, wrapping out-of-range indices.
    #[must_use]
    pub fn from_gradient_index(index: usize) -> Self {
        let (top, bottom) = GRADIENT_PAIRS[index % GRADIENT_PAIRS.len()];
        Self {
            gradient_top: top,
            gradient_bottom: bottom,
            title: content_color_for(top),
            content: content_color_for(bottom),
        }
    }
}
