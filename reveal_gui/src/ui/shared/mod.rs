//! Shared UI components reusable across panels
//!
//! Contains:
//! - `divider` - Canvas painting for the divider line, handle and indicators
//! - `layers` - The `Layer` trait and the built-in demo scenes

pub mod divider;
pub mod layers;

use iced::{Color, Point, Rectangle, Size};

pub fn to_color(color: reveal_core::color::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

pub fn to_point(point: reveal_core::geometry::Point) -> Point {
    Point::new(point.x, point.y)
}

pub fn to_rectangle(rect: reveal_core::geometry::Rect) -> Rectangle {
    Rectangle {
        x: rect.origin.x,
        y: rect.origin.y,
        width: rect.size.width,
        height: rect.size.height,
    }
}

pub fn from_size(size: Size) -> reveal_core::geometry::Size {
    reveal_core::geometry::Size::new(size.width, size.height)
}
