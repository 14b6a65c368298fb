//! Canvas painting for the divider control
//!
//! The core hands us a [`DividerLayout`] centered on (0, 0); everything here
//! just offsets it to the divider center and turns it into paths.

use iced::widget::canvas::{Frame, LineCap, Path, Stroke};
use iced::{Color, Point, Size, Vector};

use reveal_core::divider::{DividerLayout, HandleLayout};

use super::{to_color, to_point};

/// Soft shadow drawn under the line and handle
const SHADOW: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.3,
};
const SHADOW_SPREAD: f32 = 2.0;

/// Paint the line, then the handle and its chevrons, around `center`
pub fn draw_divider(frame: &mut Frame, layout: &DividerLayout, center: Point) {
    let line = Size::new(layout.line.width, layout.line.height);
    let top_left = Point::new(center.x - line.width / 2.0, center.y - line.height / 2.0);

    frame.fill_rectangle(
        top_left - Vector::new(SHADOW_SPREAD / 2.0, SHADOW_SPREAD / 2.0),
        Size::new(line.width + SHADOW_SPREAD, line.height + SHADOW_SPREAD),
        SHADOW,
    );
    frame.fill_rectangle(top_left, line, to_color(layout.line_color));

    if let Some(handle) = &layout.handle {
        draw_handle(frame, handle, center);
    }
}

fn draw_handle(frame: &mut Frame, handle: &HandleLayout, center: Point) {
    let radius = handle.diameter / 2.0;

    frame.fill(&Path::circle(center + Vector::new(0.0, 1.0), radius + SHADOW_SPREAD), SHADOW);
    frame.fill(&Path::circle(center, radius), to_color(handle.fill));

    let mut indicator_color = to_color(handle.indicator_color);
    indicator_color.a *= handle.indicator_opacity;
    for indicator in &handle.indicators {
        let [a, b, c] = indicator.glyph.polyline(indicator.center, indicator.size);
        let offset = Vector::new(center.x, center.y);
        let chevron = Path::new(|builder| {
            builder.move_to(to_point(a) + offset);
            builder.line_to(to_point(b) + offset);
            builder.line_to(to_point(c) + offset);
        });
        frame.stroke(
            &chevron,
            Stroke::default()
                .with_color(indicator_color)
                .with_width(2.0 * handle.indicator_scale)
                .with_line_cap(LineCap::Round),
        );
    }
}
