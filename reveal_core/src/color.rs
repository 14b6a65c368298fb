//! # Colors
//!
//! Platform-independent RGBA color with normalized channels, plus the contrast
//! resolver used to pick legible indicator glyphs on top of the slider color.
//! UI frontends convert to and from their own color type at the boundary.

use serde::{Deserialize, Serialize};

/// Luminance above which a color counts as "light"
const LIGHT_THRESHOLD: f32 = 0.5;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    /// Perceptual luminance `0.299 R + 0.587 G + 0.114 B`.
    ///
    /// Returns `None` when any channel is not a finite number.
    pub fn luminance(&self) -> Option<f32> {
        if !(self.r.is_finite() && self.g.is_finite() && self.b.is_finite()) {
            return None;
        }
        Some(0.299 * self.r + 0.587 * self.g + 0.114 * self.b)
    }

    /// Black or white, whichever reads better on top of this color.
    ///
    /// Falls back to black when the luminance cannot be computed.
    ///
    /// ```rust
    /// use reveal_core::color::Color;
    ///
    /// assert_eq!(Color::WHITE.contrast_color(), Color::BLACK);
    /// assert_eq!(Color::from_rgb(0.1, 0.1, 0.4).contrast_color(), Color::WHITE);
    /// ```
    pub fn contrast_color(&self) -> Color {
        match self.luminance() {
            Some(l) if l > LIGHT_THRESHOLD => Color::BLACK,
            Some(_) => Color::WHITE,
            None => Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_for_primaries() {
        // Pure green: L = 0.587
        assert_eq!(Color::from_rgb(0.0, 1.0, 0.0).contrast_color(), Color::BLACK);
        // Pure red: L = 0.299
        assert_eq!(Color::from_rgb(1.0, 0.0, 0.0).contrast_color(), Color::WHITE);
        // Pure blue: L = 0.114
        assert_eq!(Color::from_rgb(0.0, 0.0, 1.0).contrast_color(), Color::WHITE);
    }

    #[test]
    fn test_contrast_threshold_is_exclusive() {
        // Mid gray sits exactly on the threshold and gets white
        assert_eq!(Color::from_rgb(0.5, 0.5, 0.5).contrast_color(), Color::WHITE);
        assert_eq!(Color::from_rgb(0.51, 0.51, 0.51).contrast_color(), Color::BLACK);
    }

    #[test]
    fn test_contrast_fallback_is_black() {
        let broken = Color::from_rgb(f32::NAN, 0.0, 0.0);
        assert_eq!(broken.luminance(), None);
        assert_eq!(broken.contrast_color(), Color::BLACK);
    }

    #[test]
    fn test_alpha_defaults_when_missing() {
        let color: Color = serde_json::from_str(r#"{"r":1.0,"g":0.0,"b":0.0}"#).unwrap();
        assert_eq!(color.a, 1.0);
    }
}
