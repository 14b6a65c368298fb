//! Comparison canvas
//!
//! Hosts a [`ComparisonSurface`] inside an iced canvas: paints the two layers
//! clipped at the divider, the divider itself and the corner labels, and turns
//! mouse, touch and keyboard input into [`Message`]s.
//!
//! Pointer input goes through a [`PointerTracker`] kept in the canvas state,
//! so a press-and-release without movement becomes a tap and anything past
//! the slop becomes a drag. A surface with `no_drag` set does not capture
//! anything, letting events fall through to whatever sits underneath.

use std::time::Duration;

use iced::keyboard::{self, key::Named};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Text};
use iced::{mouse, touch, Color, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};

use reveal_core::accessibility::AccessibilityAction;
use reveal_core::geometry;
use reveal_core::gesture::PointerTracker;
use reveal_core::layout::LabelAnchor;
use reveal_core::{ComparisonSurface, Orientation};

use super::shared::layers::Layer;
use super::shared::{divider, from_size, to_point, to_rectangle};
use crate::Message;

const LABEL_TEXT_SIZE: f32 = 13.0;
const LABEL_PADDING: f32 = 6.0;
const LABEL_MARGIN: f32 = 12.0;
/// Rough advance per character; canvas text cannot be measured up front
const LABEL_CHAR_WIDTH: f32 = LABEL_TEXT_SIZE * 0.6;

/// Canvas program borrowing the surface for one view pass
pub struct ComparisonCanvas<'a> {
    surface: &'a ComparisonSurface,
    before: &'a dyn Layer,
    after: &'a dyn Layer,
    now: Duration,
}

impl<'a> ComparisonCanvas<'a> {
    pub fn new(surface: &'a ComparisonSurface, before: &'a dyn Layer, after: &'a dyn Layer, now: Duration) -> Self {
        Self {
            surface,
            before,
            after,
            now,
        }
    }

    fn draw_label(&self, frame: &mut Frame, content: &str, anchor: LabelAnchor, opacity: f32, container: Size) {
        if opacity <= 0.0 || content.is_empty() {
            return;
        }
        let label = Size::new(
            content.chars().count() as f32 * LABEL_CHAR_WIDTH + LABEL_PADDING * 2.0,
            LABEL_TEXT_SIZE + LABEL_PADDING * 2.0,
        );
        let top_left = to_point(anchor.place(
            geometry::Size::new(label.width, label.height),
            from_size(container),
            LABEL_MARGIN,
        ));

        let background = Path::rounded_rectangle(top_left, label, 4.0_f32.into());
        frame.fill(&background, Color::from_rgba(0.0, 0.0, 0.0, 0.6 * opacity));
        frame.fill_text(Text {
            content: content.to_string(),
            position: top_left + Vector::new(LABEL_PADDING, LABEL_PADDING),
            color: Color::from_rgba(1.0, 1.0, 1.0, opacity),
            size: Pixels(LABEL_TEXT_SIZE),
            ..Text::default()
        });
    }
}

/// Per-widget input state
#[derive(Debug, Default)]
pub struct CanvasState {
    tracker: PointerTracker,
    finger: Option<touch::Finger>,
}

/// Arrow keys along the active axis move the divider physically: Right and
/// Down increment, Left and Up decrement. The position is the physical
/// fraction in either layout direction, so RTL needs no swap.
fn key_action(key: &keyboard::Key, orientation: Orientation) -> Option<AccessibilityAction> {
    let keyboard::Key::Named(named) = key else {
        return None;
    };
    match (orientation, named) {
        (Orientation::Horizontal, Named::ArrowRight) | (Orientation::Vertical, Named::ArrowDown) => {
            Some(AccessibilityAction::Increment)
        }
        (Orientation::Horizontal, Named::ArrowLeft) | (Orientation::Vertical, Named::ArrowUp) => {
            Some(AccessibilityAction::Decrement)
        }
        _ => None,
    }
}

impl canvas::Program<Message> for ComparisonCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut CanvasState,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if !self.surface.hit_testable() {
            return None;
        }

        let container = geometry::Size::new(bounds.width, bounds.height);
        let local = |position: Point| geometry::Point::new(position.x - bounds.x, position.y - bounds.y);

        let gesture = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.tracker.press(geometry::Point::new(position.x, position.y));
                return Some(canvas::Action::capture());
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if state.tracker.is_pressed() => {
                state.tracker.moved(local(*position))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.tracker.is_pressed() => {
                match cursor.position() {
                    Some(position) => state.tracker.release(local(position)),
                    None => state.tracker.cancel(),
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) if state.finger.is_none() => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.finger = Some(*id);
                state.tracker.press(local(*position));
                return Some(canvas::Action::capture());
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) if state.finger == Some(*id) => {
                state.tracker.moved(local(*position))
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) if state.finger == Some(*id) => {
                state.finger = None;
                state.tracker.release(local(*position))
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) if state.finger == Some(*id) => {
                state.finger = None;
                state.tracker.cancel()
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if cursor.is_over(bounds) => {
                let action = key_action(key, self.surface.config().orientation)?;
                return Some(canvas::Action::publish(Message::Accessibility(action)).and_capture());
            }
            _ => None,
        }?;

        Some(canvas::Action::publish(Message::Gesture(gesture, container)).and_capture())
    }

    fn draw(
        &self,
        _state: &CanvasState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let surface_frame = self.surface.frame(from_size(size), self.now);
        let layout = &surface_frame.geometry;

        // After fills the container, before is clipped at the divider
        for (layer, clip) in [(self.after, layout.after_clip), (self.before, layout.before_clip)] {
            if clip.size.is_empty() {
                continue;
            }
            let region = to_rectangle(clip);
            frame.with_clip(region, |clipped| {
                // Layers draw in container coordinates
                clipped.translate(Vector::new(-region.x, -region.y));
                layer.draw(clipped, size);
            });
        }

        let config = self.surface.config();
        self.draw_label(
            &mut frame,
            &config.before_label,
            layout.before_label_anchor,
            surface_frame.before_label_opacity,
            size,
        );
        self.draw_label(
            &mut frame,
            &config.after_label,
            layout.after_label_anchor,
            surface_frame.after_label_opacity,
            size,
        );

        divider::draw_divider(&mut frame, &surface_frame.divider, to_point(layout.divider_center));

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(&self, state: &CanvasState, bounds: Rectangle, cursor: mouse::Cursor) -> mouse::Interaction {
        if !self.surface.hit_testable() {
            return mouse::Interaction::default();
        }
        if state.tracker.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        if cursor.is_over(bounds) {
            match self.surface.config().orientation {
                Orientation::Horizontal => mouse::Interaction::ResizingHorizontally,
                Orientation::Vertical => mouse::Interaction::ResizingVertically,
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reveal_core::geometry::LayoutDirection;
    use reveal_core::SliderConfiguration;

    #[test]
    fn test_key_action_horizontal() {
        let right = keyboard::Key::Named(Named::ArrowRight);
        let left = keyboard::Key::Named(Named::ArrowLeft);
        assert_eq!(
            key_action(&right, Orientation::Horizontal),
            Some(AccessibilityAction::Increment)
        );
        assert_eq!(
            key_action(&left, Orientation::Horizontal),
            Some(AccessibilityAction::Decrement)
        );
    }

    #[test]
    fn test_right_arrow_moves_divider_right_in_both_directions() {
        let container = geometry::Size::new(400.0, 300.0);
        let right = keyboard::Key::Named(Named::ArrowRight);
        let settled = Duration::from_secs(5);

        for direction in [LayoutDirection::LeftToRight, LayoutDirection::RightToLeft] {
            let mut surface = ComparisonSurface::new(SliderConfiguration::default());
            surface.set_layout_direction(direction, Duration::ZERO);
            surface.mount(Duration::ZERO);
            let start = surface.frame(container, Duration::ZERO).geometry.divider_center.x;

            let action = key_action(&right, Orientation::Horizontal).unwrap();
            assert!(surface.accessibility_action(action, Duration::ZERO));
            let moved = surface.frame(container, settled).geometry.divider_center.x;
            assert!(moved > start, "{:?}: {} -> {}", direction, start, moved);
        }
    }

    #[test]
    fn test_key_action_vertical() {
        let down = keyboard::Key::Named(Named::ArrowDown);
        let right = keyboard::Key::Named(Named::ArrowRight);
        assert_eq!(
            key_action(&down, Orientation::Vertical),
            Some(AccessibilityAction::Increment)
        );
        assert_eq!(key_action(&right, Orientation::Vertical), None);
    }

    #[test]
    fn test_key_action_ignores_other_keys() {
        let enter = keyboard::Key::Named(Named::Enter);
        assert_eq!(key_action(&enter, Orientation::Horizontal), None);
    }
}
