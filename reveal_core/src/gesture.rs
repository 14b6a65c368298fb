//! # Gestures
//!
//! The surface consumes a three-event contract: a drag is a run of
//! [`GestureEvent::DragChanged`] events closed by [`GestureEvent::DragEnded`],
//! and a press released without moving is a [`GestureEvent::Tap`]. Locations
//! are relative to the container origin.
//!
//! Frontends that only see raw press/move/release can feed a
//! [`PointerTracker`], which applies a small slop to tell taps from drags.

use serde::{Deserialize, Serialize};

use crate::config::Orientation;
use crate::geometry::{clamp_unit, Point, Size};
use crate::layout::axis_extent;

/// Distance a press may travel and still count as a tap
pub const TAP_SLOP: f32 = 3.0;

/// Pointer input as seen by the comparison surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Drag started or moved; location relative to the container origin
    DragChanged(Point),
    /// Pointer released or lost after dragging
    DragEnded,
    /// Discrete tap at a location
    Tap(Point),
}

/// Map a pointer location to a slider position.
///
/// Returns `None` when the active-axis extent is zero (or negative) or the
/// location is not finite, in which case the caller must leave the position
/// untouched. Coordinates outside the container are clamped.
///
/// ```rust
/// use reveal_core::config::Orientation;
/// use reveal_core::geometry::{Point, Size};
/// use reveal_core::gesture::normalized_position;
///
/// let size = Size::new(200.0, 100.0);
/// assert_eq!(normalized_position(Point::new(50.0, 0.0), size, Orientation::Horizontal, 1.0), Some(0.25));
/// assert_eq!(normalized_position(Point::new(500.0, 0.0), size, Orientation::Horizontal, 1.0), Some(1.0));
/// assert_eq!(normalized_position(Point::new(5.0, 0.0), Size::ZERO, Orientation::Horizontal, 1.0), None);
/// ```
pub fn normalized_position(
    location: Point,
    container: Size,
    orientation: Orientation,
    sensitivity: f32,
) -> Option<f32> {
    let extent = axis_extent(container, orientation);
    if extent.is_nan() || extent <= 0.0 || !location.is_finite() {
        return None;
    }
    let coordinate = match orientation {
        Orientation::Horizontal => location.x,
        Orientation::Vertical => location.y,
    };
    Some(clamp_unit(coordinate / extent * sensitivity))
}

/// Turns raw press/move/release into [`GestureEvent`]s
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    pressed_at: Option<Point>,
    dragging: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer went down. Nothing is emitted until it moves or lifts.
    pub fn press(&mut self, location: Point) -> Option<GestureEvent> {
        self.pressed_at = Some(location);
        self.dragging = false;
        None
    }

    /// Pointer moved; emits a drag once the slop is exceeded
    pub fn moved(&mut self, location: Point) -> Option<GestureEvent> {
        let origin = self.pressed_at?;
        if !self.dragging && origin.distance(location) < TAP_SLOP {
            return None;
        }
        self.dragging = true;
        Some(GestureEvent::DragChanged(location))
    }

    /// Pointer lifted: ends a drag, or reports a tap
    pub fn release(&mut self, location: Point) -> Option<GestureEvent> {
        self.pressed_at.take()?;
        if std::mem::take(&mut self.dragging) {
            Some(GestureEvent::DragEnded)
        } else {
            Some(GestureEvent::Tap(location))
        }
    }

    /// Input was lost (window blur, touch cancelled)
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.pressed_at = None;
        if std::mem::take(&mut self.dragging) {
            Some(GestureEvent::DragEnded)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vertical_uses_y_axis() {
        let size = Size::new(100.0, 400.0);
        let position = normalized_position(Point::new(90.0, 100.0), size, Orientation::Vertical, 1.0);
        assert_eq!(position, Some(0.25));
    }

    #[test]
    fn test_sensitivity_scales_then_clamps() {
        let size = Size::new(100.0, 100.0);
        let horizontal = Orientation::Horizontal;
        assert_eq!(normalized_position(Point::new(25.0, 0.0), size, horizontal, 2.0), Some(0.5));
        assert_eq!(normalized_position(Point::new(80.0, 0.0), size, horizontal, 2.0), Some(1.0));
        assert_eq!(normalized_position(Point::new(-10.0, 0.0), size, horizontal, 1.0), Some(0.0));
    }

    #[test]
    fn test_zero_extent_is_ignored() {
        let size = Size::new(0.0, 100.0);
        assert_eq!(normalized_position(Point::new(10.0, 10.0), size, Orientation::Horizontal, 1.0), None);
        // Vertical only cares about height
        assert_eq!(normalized_position(Point::new(10.0, 50.0), size, Orientation::Vertical, 1.0), Some(0.5));
    }

    #[test]
    fn test_non_finite_location_is_ignored() {
        let size = Size::new(100.0, 100.0);
        let location = Point::new(f32::NAN, 0.0);
        assert_eq!(normalized_position(location, size, Orientation::Horizontal, 1.0), None);
    }

    #[test]
    fn test_press_release_is_tap() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.press(Point::new(10.0, 10.0)), None);
        assert_eq!(tracker.moved(Point::new(11.0, 10.0)), None);
        assert_eq!(
            tracker.release(Point::new(11.0, 10.0)),
            Some(GestureEvent::Tap(Point::new(11.0, 10.0)))
        );
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_press_move_release_is_drag() {
        let mut tracker = PointerTracker::new();
        tracker.press(Point::new(10.0, 10.0));
        assert_eq!(
            tracker.moved(Point::new(20.0, 10.0)),
            Some(GestureEvent::DragChanged(Point::new(20.0, 10.0)))
        );
        // Once dragging, every move is reported
        assert_eq!(
            tracker.moved(Point::new(20.5, 10.0)),
            Some(GestureEvent::DragChanged(Point::new(20.5, 10.0)))
        );
        assert_eq!(tracker.release(Point::new(20.5, 10.0)), Some(GestureEvent::DragEnded));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.moved(Point::new(50.0, 50.0)), None);
        assert_eq!(tracker.release(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_cancel_ends_drag() {
        let mut tracker = PointerTracker::new();
        tracker.press(Point::ORIGIN);
        tracker.moved(Point::new(30.0, 0.0));
        assert_eq!(tracker.cancel(), Some(GestureEvent::DragEnded));
        assert_eq!(tracker.cancel(), None);
    }

    proptest! {
        #[test]
        fn prop_position_matches_formula(
            coordinate in -500.0f32..1500.0,
            extent in 1.0f32..1000.0,
            sensitivity in 0.1f32..4.0,
        ) {
            let size = Size::new(extent, 50.0);
            let position = normalized_position(Point::new(coordinate, 0.0), size, Orientation::Horizontal, sensitivity);
            let expected = (coordinate / extent * sensitivity).clamp(0.0, 1.0);
            prop_assert_eq!(position, Some(expected));
        }
    }
}
