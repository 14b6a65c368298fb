//! # Divider Control
//!
//! The line, handle and chevrons drawn at the slider boundary. This is a pure
//! description: given the drag emphasis, the noDrag flag and a style it yields
//! a [`DividerLayout`] in coordinates local to the divider's center. It owns no
//! state and emits no events; the surface positions it via
//! [`RenderGeometry::divider_center`](crate::layout::RenderGeometry).
//!
//! Drag emphasis is a value in `0..=1` (0 at rest, 1 while dragging). The
//! surface animates it so the handle grows and the chevrons dim smoothly.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::{Orientation, SliderConfiguration};
use crate::geometry::{Point, Size};

/// Extra handle diameter while dragging
pub const HANDLE_DRAG_GROWTH: f32 = 10.0;

/// Chevron opacity while dragging
pub const INDICATOR_DRAG_OPACITY: f32 = 0.5;

/// Chevron scale while dragging
pub const INDICATOR_DRAG_SCALE: f32 = 1.2;

/// Nominal chevron glyph size at rest
pub const INDICATOR_GLYPH_SIZE: f32 = 14.0;

/// Visual style of the divider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerStyle {
    pub color: Color,
    pub line_width: f32,
    pub handle_size: f32,
    pub orientation: Orientation,
}

impl DividerStyle {
    pub fn from_config(config: &SliderConfiguration) -> Self {
        DividerStyle {
            color: config.slider_color,
            line_width: config.slider_width,
            handle_size: config.handle_size,
            orientation: config.orientation,
        }
    }
}

/// Direction a chevron points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorGlyph {
    ChevronLeft,
    ChevronRight,
    ChevronUp,
    ChevronDown,
}

impl IndicatorGlyph {
    /// The pair drawn inside the handle, in drawing order
    pub fn pair(orientation: Orientation) -> [IndicatorGlyph; 2] {
        match orientation {
            Orientation::Horizontal => [IndicatorGlyph::ChevronLeft, IndicatorGlyph::ChevronRight],
            Orientation::Vertical => [IndicatorGlyph::ChevronUp, IndicatorGlyph::ChevronDown],
        }
    }

    /// Three-point polyline of the chevron centered on `center`
    pub fn polyline(&self, center: Point, size: f32) -> [Point; 3] {
        let half = size / 2.0;
        let depth = size / 4.0;
        let Point { x, y } = center;
        match self {
            IndicatorGlyph::ChevronLeft => [
                Point::new(x + depth, y - half),
                Point::new(x - depth, y),
                Point::new(x + depth, y + half),
            ],
            IndicatorGlyph::ChevronRight => [
                Point::new(x - depth, y - half),
                Point::new(x + depth, y),
                Point::new(x - depth, y + half),
            ],
            IndicatorGlyph::ChevronUp => [
                Point::new(x - half, y + depth),
                Point::new(x, y - depth),
                Point::new(x + half, y + depth),
            ],
            IndicatorGlyph::ChevronDown => [
                Point::new(x - half, y - depth),
                Point::new(x, y + depth),
                Point::new(x + half, y - depth),
            ],
        }
    }
}

/// One chevron, positioned relative to the divider center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorLayout {
    pub glyph: IndicatorGlyph,
    pub center: Point,
    pub size: f32,
}

/// Circular handle with its chevrons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleLayout {
    pub diameter: f32,
    pub fill: Color,
    pub indicator_color: Color,
    pub indicator_opacity: f32,
    pub indicator_scale: f32,
    pub indicators: [IndicatorLayout; 2],
}

/// Everything needed to paint the divider, centered on (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerLayout {
    /// Line size; the line is centered on the divider center
    pub line: Size,
    pub line_color: Color,
    /// Absent when the slider is not interactive
    pub handle: Option<HandleLayout>,
}

/// Stateless divider description.
///
/// The position is not an input: the parent places the divider through
/// [`RenderGeometry::divider_center`](crate::layout::RenderGeometry), and the
/// drag state arrives as the emphasis passed to [`DividerControl::layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerControl {
    pub no_drag: bool,
    pub style: DividerStyle,
}

impl DividerControl {
    pub fn new(no_drag: bool, style: DividerStyle) -> Self {
        DividerControl { no_drag, style }
    }

    /// Layout for a drag emphasis in `0..=1` (0 at rest, 1 while dragging).
    ///
    /// `cross_extent` is the container length across the active axis, which
    /// is how long the line is drawn.
    pub fn layout(&self, emphasis: f32, cross_extent: f32) -> DividerLayout {
        let style = &self.style;
        let emphasis = emphasis.clamp(0.0, 1.0);

        let line = match style.orientation {
            Orientation::Horizontal => Size::new(style.line_width, cross_extent),
            Orientation::Vertical => Size::new(cross_extent, style.line_width),
        };

        let handle = if self.no_drag {
            None
        } else {
            let scale = 1.0 + (INDICATOR_DRAG_SCALE - 1.0) * emphasis;
            let glyph_size = INDICATOR_GLYPH_SIZE * scale;
            let spread = glyph_size * 0.4;
            let [first, second] = IndicatorGlyph::pair(style.orientation);
            let (first_center, second_center) = match style.orientation {
                Orientation::Horizontal => (Point::new(-spread, 0.0), Point::new(spread, 0.0)),
                Orientation::Vertical => (Point::new(0.0, -spread), Point::new(0.0, spread)),
            };
            Some(HandleLayout {
                diameter: style.handle_size + HANDLE_DRAG_GROWTH * emphasis,
                fill: style.color,
                indicator_color: style.color.contrast_color(),
                indicator_opacity: 1.0 - (1.0 - INDICATOR_DRAG_OPACITY) * emphasis,
                indicator_scale: scale,
                indicators: [
                    IndicatorLayout {
                        glyph: first,
                        center: first_center,
                        size: glyph_size,
                    },
                    IndicatorLayout {
                        glyph: second,
                        center: second_center,
                        size: glyph_size,
                    },
                ],
            })
        };

        DividerLayout {
            line,
            line_color: style.color,
            handle,
        }
    }
}
