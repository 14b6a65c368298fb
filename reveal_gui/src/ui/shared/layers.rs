//! Layer content painted under the divider
//!
//! A [`Layer`] draws into the full container; the comparison canvas clips it.
//! The two demo scenes are the same landscape, one muted and one graded, so
//! dragging the divider shows an obvious difference.

use iced::alignment::Horizontal;
use iced::widget::canvas::{Frame, Path, Text};
use iced::{Color, Pixels, Point, Size};

/// Something the comparison canvas can paint as a before or after layer
pub trait Layer {
    fn draw(&self, frame: &mut Frame, size: Size);
}

/// Colors of one rendition of the demo landscape
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub sun: Color,
    pub far_hill: Color,
    pub near_hill: Color,
    pub caption: Color,
}

impl Palette {
    /// Flat, desaturated grade
    pub fn muted() -> Self {
        Palette {
            sky_top: Color::from_rgb(0.55, 0.57, 0.60),
            sky_bottom: Color::from_rgb(0.72, 0.72, 0.70),
            sun: Color::from_rgb(0.85, 0.84, 0.78),
            far_hill: Color::from_rgb(0.45, 0.47, 0.45),
            near_hill: Color::from_rgb(0.33, 0.35, 0.33),
            caption: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
        }
    }

    /// Warm, saturated grade
    pub fn vivid() -> Self {
        Palette {
            sky_top: Color::from_rgb(0.13, 0.32, 0.72),
            sky_bottom: Color::from_rgb(0.98, 0.62, 0.35),
            sun: Color::from_rgb(1.0, 0.85, 0.25),
            far_hill: Color::from_rgb(0.18, 0.52, 0.33),
            near_hill: Color::from_rgb(0.08, 0.36, 0.20),
            caption: Color::from_rgba(1.0, 1.0, 1.0, 0.85),
        }
    }
}

/// Demo landscape: banded sky, a sun and two hills
#[derive(Debug, Clone)]
pub struct SceneLayer {
    palette: Palette,
    caption: String,
}

const SKY_BANDS: usize = 32;

impl SceneLayer {
    pub fn new(palette: Palette, caption: impl Into<String>) -> Self {
        Self {
            palette,
            caption: caption.into(),
        }
    }
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color::from_rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

impl Layer for SceneLayer {
    fn draw(&self, frame: &mut Frame, size: Size) {
        let palette = &self.palette;

        let band_height = size.height / SKY_BANDS as f32;
        for band in 0..SKY_BANDS {
            let t = band as f32 / (SKY_BANDS - 1) as f32;
            frame.fill_rectangle(
                Point::new(0.0, band as f32 * band_height),
                // Overlap by a pixel so bands never show seams
                Size::new(size.width, band_height + 1.0),
                mix(palette.sky_top, palette.sky_bottom, t),
            );
        }

        let unit = size.width.min(size.height);
        frame.fill(
            &Path::circle(Point::new(size.width * 0.7, size.height * 0.35), unit * 0.12),
            palette.sun,
        );
        frame.fill(
            &Path::circle(Point::new(size.width * 0.25, size.height * 1.25), size.width * 0.6),
            palette.far_hill,
        );
        frame.fill(
            &Path::circle(Point::new(size.width * 0.85, size.height * 1.35), size.width * 0.55),
            palette.near_hill,
        );

        frame.fill_text(Text {
            content: self.caption.clone(),
            position: Point::new(size.width / 2.0, size.height * 0.82),
            color: palette.caption,
            size: Pixels((unit * 0.08).max(14.0)),
            align_x: Horizontal::Center.into(),
            ..Text::default()
        });
    }
}
