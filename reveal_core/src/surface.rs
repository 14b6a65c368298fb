//! # Comparison Surface
//!
//! The live widget model. A `ComparisonSurface` owns the [`SliderState`] of one
//! slider instance, reacts to gestures, taps and accessibility actions, plays
//! the optional start sequence and produces a [`SurfaceFrame`] describing what
//! to paint. Frontends call into it from their UI thread only; nothing here is
//! shared between instances.
//!
//! Every method that can change what is on screen takes `now`, the frontend's
//! clock as a [`Duration`] since an epoch of its choosing. Programmatic moves
//! (taps, accessibility, start steps) glide to their target; drags move the
//! presented position instantly.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use reveal_core::config::SliderConfiguration;
//! use reveal_core::geometry::{Point, Size};
//! use reveal_core::surface::ComparisonSurface;
//!
//! let mut surface = ComparisonSurface::new(SliderConfiguration::default());
//! let container = Size::new(400.0, 300.0);
//!
//! surface.mount(Duration::ZERO);
//! surface.drag_changed(Point::new(100.0, 150.0), container, Duration::ZERO);
//! assert_eq!(surface.position(), 0.25);
//! assert!(surface.is_dragging());
//!
//! surface.drag_ended(Duration::ZERO);
//! assert_eq!(surface.position(), 0.25);
//! assert_eq!(surface.accessibility().value, "25%");
//! ```

use std::fmt;
use std::time::Duration;

use uuid::Uuid;

use crate::accessibility::{self, AccessibilityAction, AccessibilityNode};
use crate::animation::{AnimatedValue, AnimationSpec};
use crate::config::{Orientation, SliderConfiguration};
use crate::divider::{DividerControl, DividerLayout, DividerStyle};
use crate::geometry::{LayoutDirection, Point, Size};
use crate::gesture::{normalized_position, GestureEvent};
use crate::haptics::{HapticEngine, HapticIntensity, NoHaptics};
use crate::layout::{self, RenderGeometry};
use crate::schedule::StartSequence;
use crate::state::SliderState;

/// Label fade length in seconds, independent of the configured animation
pub const LABEL_FADE_SECS: f32 = 0.2;

/// Spring response of the divider's drag emphasis
pub const DRAG_EMPHASIS_RESPONSE: f32 = 0.2;

/// Identifier used to tell surfaces apart in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(Uuid);

impl SurfaceId {
    fn new() -> Self {
        SurfaceId(Uuid::new_v4())
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The short form is plenty to correlate log lines
        let id = self.0.simple().to_string();
        write!(f, "{}", &id[..8])
    }
}

/// Everything a frontend needs to paint one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub geometry: RenderGeometry,
    /// Animated label opacities actually presented this frame
    pub before_label_opacity: f32,
    pub after_label_opacity: f32,
    /// Divider shapes relative to `geometry.divider_center`
    pub divider: DividerLayout,
}

/// Live before/after comparison slider
pub struct ComparisonSurface {
    id: SurfaceId,
    config: SliderConfiguration,
    state: SliderState,
    presented: AnimatedValue,
    before_label: AnimatedValue,
    after_label: AnimatedValue,
    drag_emphasis: AnimatedValue,
    direction: LayoutDirection,
    start_sequence: StartSequence,
    mounted: bool,
    haptics: Box<dyn HapticEngine>,
}

impl fmt::Debug for ComparisonSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonSurface")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("direction", &self.direction)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl ComparisonSurface {
    /// Create a surface at the configured initial position
    pub fn new(config: SliderConfiguration) -> Self {
        let config = config.normalized();
        let state = SliderState::new(config.initial_position);
        let labels_visible = config.show_labels;
        let effective = layout::effective_position(
            state.position(),
            config.orientation,
            LayoutDirection::LeftToRight,
        );
        ComparisonSurface {
            id: SurfaceId::new(),
            presented: AnimatedValue::new(state.position()),
            before_label: AnimatedValue::new(layout::before_label_opacity(effective, labels_visible)),
            after_label: AnimatedValue::new(layout::after_label_opacity(effective, labels_visible)),
            drag_emphasis: AnimatedValue::new(0.0),
            direction: LayoutDirection::LeftToRight,
            start_sequence: StartSequence::empty(),
            mounted: false,
            haptics: Box::new(NoHaptics),
            config,
            state,
        }
    }

    /// Replace the haptic engine
    pub fn with_haptics(mut self, engine: impl HapticEngine + 'static) -> Self {
        self.haptics = Box::new(engine);
        self
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn config(&self) -> &SliderConfiguration {
        &self.config
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Committed position (the value accessibility reports)
    pub fn position(&self) -> f32 {
        self.state.position()
    }

    /// Position as presented at `now`, including running transitions
    pub fn presented_position(&self, now: Duration) -> f32 {
        self.presented.value_at(now)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the surface should receive pointer input at all
    pub fn hit_testable(&self) -> bool {
        !self.config.no_drag
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Update the environment's layout direction.
    ///
    /// Label opacities fade to their new targets once mounted; before the
    /// first mount they snap, so a surface built for RTL never fades in.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection, now: Duration) {
        if self.direction != direction {
            self.direction = direction;
            self.sync_labels(now);
        }
    }

    /// True while anything still needs per-frame redraws
    pub fn is_animating(&self, now: Duration) -> bool {
        self.start_sequence.is_pending()
            || self.presented.is_animating(now)
            || self.before_label.is_animating(now)
            || self.after_label.is_animating(now)
            || self.drag_emphasis.is_animating(now)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Surface appeared on screen.
    ///
    /// Schedules the start sequence the first time only; remounting the same
    /// instance never replays it.
    pub fn mount(&mut self, now: Duration) {
        self.mounted = true;
        log::debug!("surface {}: mounted", self.id);
        if self.config.show_start_animation && self.state.mark_start_animation_played() {
            log::debug!("surface {}: scheduling start sequence", self.id);
            self.start_sequence = StartSequence::schedule(now);
            self.tick(now);
        }
    }

    /// Surface left the screen; pending start steps are cancelled
    pub fn unmount(&mut self, now: Duration) {
        self.mounted = false;
        let cancelled = self.start_sequence.cancel();
        if cancelled > 0 {
            log::debug!("surface {}: cancelled {} pending start steps", self.id, cancelled);
        }
        if self.state.is_dragging {
            self.drag_ended(now);
        }
        log::debug!("surface {}: unmounted", self.id);
    }

    /// Advance timers: fires due start steps and settles transitions
    pub fn tick(&mut self, now: Duration) {
        if !self.mounted {
            return;
        }
        for step in self.start_sequence.take_due(now) {
            log::trace!("surface {}: start step to {}", self.id, step.target);
            self.state.set_position(step.target);
            self.presented
                .animate_to(self.state.position(), StartSequence::step_animation(), now);
        }
        self.sync_labels(now);

        self.presented.settle(now);
        self.before_label.settle(now);
        self.after_label.settle(now);
        self.drag_emphasis.settle(now);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Dispatch a gesture event; returns whether it was handled
    pub fn handle_gesture(&mut self, event: GestureEvent, container: Size, now: Duration) -> bool {
        match event {
            GestureEvent::DragChanged(location) => self.drag_changed(location, container, now),
            GestureEvent::DragEnded => self.drag_ended(now),
            GestureEvent::Tap(location) => self.tap(location, container, now),
        }
    }

    /// Drag started or moved to `location` within a container of `container` size
    pub fn drag_changed(&mut self, location: Point, container: Size, now: Duration) -> bool {
        if self.config.no_drag {
            return false;
        }
        if !self.state.is_dragging {
            log::debug!("surface {}: drag started", self.id);
            self.state.is_dragging = true;
            self.drag_emphasis
                .animate_to(1.0, AnimationSpec::spring(DRAG_EMPHASIS_RESPONSE), now);
        }

        let config = &self.config;
        if let Some(position) =
            normalized_position(location, container, config.orientation, config.drag_sensitivity)
        {
            self.state.set_position(position);
            self.presented.set(self.state.position());
        }

        if self.config.enable_haptic_feedback {
            if let Err(e) = self.haptics.impact(HapticIntensity::Light) {
                log::debug!("surface {}: haptic feedback skipped: {}", self.id, e);
            }
        }

        self.sync_labels(now);
        true
    }

    /// Drag finished; the last dragged position stays
    pub fn drag_ended(&mut self, now: Duration) -> bool {
        if !self.state.is_dragging {
            return false;
        }
        log::debug!("surface {}: drag ended at {:.3}", self.id, self.state.position());
        self.state.is_dragging = false;
        self.drag_emphasis
            .animate_to(0.0, AnimationSpec::spring(DRAG_EMPHASIS_RESPONSE), now);
        self.sync_labels(now);
        true
    }

    /// Discrete tap: glide to the tapped location
    pub fn tap(&mut self, location: Point, container: Size, now: Duration) -> bool {
        if !self.config.allow_tap_to_move || self.config.no_drag {
            return false;
        }
        let config = &self.config;
        let Some(position) =
            normalized_position(location, container, config.orientation, config.drag_sensitivity)
        else {
            return false;
        };
        log::debug!("surface {}: tap to {:.3}", self.id, position);
        self.animate_position(position, now);
        true
    }

    /// Increment or decrement by one accessibility step
    pub fn accessibility_action(&mut self, action: AccessibilityAction, now: Duration) -> bool {
        if self.config.no_drag {
            return false;
        }
        let target = self.state.position() + action.delta();
        log::debug!("surface {}: accessibility {:?}", self.id, action);
        self.animate_position(target, now);
        true
    }

    fn animate_position(&mut self, target: f32, now: Duration) {
        self.state.set_position(target);
        self.presented
            .animate_to(self.state.position(), self.config.animation, now);
        self.sync_labels(now);
    }

    /// Retarget the label fades after a state change
    fn sync_labels(&mut self, now: Duration) {
        if self.state.is_dragging {
            // Labels are removed outright while dragging
            self.before_label.set(0.0);
            self.after_label.set(0.0);
            return;
        }
        let effective =
            layout::effective_position(self.state.position(), self.config.orientation, self.direction);
        let visible = self.config.show_labels;
        let fade = AnimationSpec::ease_in_out(LABEL_FADE_SECS);
        let mounted = self.mounted;
        for (label, target) in [
            (&mut self.before_label, layout::before_label_opacity(effective, visible)),
            (&mut self.after_label, layout::after_label_opacity(effective, visible)),
        ] {
            if !mounted {
                // Nothing on screen to fade from
                label.set(target);
            } else if label.target() != target {
                label.animate_to(target, fade, now);
            }
        }
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Geometry and presented values for one frame
    pub fn frame(&self, container: Size, now: Duration) -> SurfaceFrame {
        let geometry = RenderGeometry::compute(
            &self.config,
            self.presented.value_at(now),
            self.state.is_dragging,
            container,
            self.direction,
        );
        let cross_extent = match self.config.orientation {
            Orientation::Horizontal => container.height,
            Orientation::Vertical => container.width,
        };
        let divider = DividerControl::new(self.config.no_drag, DividerStyle::from_config(&self.config))
            .layout(self.drag_emphasis.value_at(now), cross_extent);

        let (before_label_opacity, after_label_opacity) = if geometry.labels_visible {
            (self.before_label.value_at(now), self.after_label.value_at(now))
        } else {
            (0.0, 0.0)
        };

        SurfaceFrame {
            geometry,
            before_label_opacity,
            after_label_opacity,
            divider,
        }
    }

    /// Accessibility label, value and available actions
    pub fn accessibility(&self) -> AccessibilityNode {
        let actions = if self.config.no_drag {
            Vec::new()
        } else {
            vec![AccessibilityAction::Increment, AccessibilityAction::Decrement]
        };
        AccessibilityNode {
            label: accessibility::label_text(&self.config.before_label, &self.config.after_label),
            value: accessibility::value_text(self.state.position()),
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::errors::{RevealError, RevealResult};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn container() -> Size {
        Size::new(400.0, 200.0)
    }

    #[derive(Clone, Default)]
    struct RecordingHaptics {
        impacts: Arc<Mutex<Vec<HapticIntensity>>>,
    }

    impl HapticEngine for RecordingHaptics {
        fn impact(&self, intensity: HapticIntensity) -> RevealResult<()> {
            self.impacts.lock().unwrap().push(intensity);
            Ok(())
        }
    }

    struct BrokenHaptics;

    impl HapticEngine for BrokenHaptics {
        fn impact(&self, _intensity: HapticIntensity) -> RevealResult<()> {
            Err(RevealError::haptics_unavailable("no actuator"))
        }
    }

    #[test]
    fn test_new_uses_clamped_initial_position() {
        let mut config = SliderConfiguration::default();
        config.initial_position = 1.5;
        assert_eq!(ComparisonSurface::new(config).position(), 1.0);
    }

    #[test]
    fn test_drag_updates_position_immediately() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default());
        surface.drag_changed(Point::new(300.0, 10.0), container(), ms(0));
        assert_eq!(surface.position(), 0.75);
        assert_eq!(surface.presented_position(ms(0)), 0.75);
        assert!(surface.is_dragging());

        surface.drag_changed(Point::new(-50.0, 10.0), container(), ms(16));
        assert_eq!(surface.position(), 0.0);

        surface.drag_ended(ms(32));
        assert!(!surface.is_dragging());
        assert_eq!(surface.position(), 0.0);
    }

    #[test]
    fn test_haptics_fire_on_every_move() {
        let haptics = RecordingHaptics::default();
        let mut surface =
            ComparisonSurface::new(SliderConfiguration::default()).with_haptics(haptics.clone());
        for x in [10.0, 20.0, 30.0] {
            surface.drag_changed(Point::new(x, 0.0), container(), ms(0));
        }
        assert_eq!(haptics.impacts.lock().unwrap().len(), 3);
        assert!(haptics
            .impacts
            .lock()
            .unwrap()
            .iter()
            .all(|i| *i == HapticIntensity::Light));
    }

    #[test]
    fn test_haptics_disabled() {
        let haptics = RecordingHaptics::default();
        let config = SliderConfiguration::default().with_haptic_feedback(false);
        let mut surface = ComparisonSurface::new(config).with_haptics(haptics.clone());
        surface.drag_changed(Point::new(10.0, 0.0), container(), ms(0));
        assert!(haptics.impacts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_haptic_failure_does_not_interrupt_drag() {
        let mut surface =
            ComparisonSurface::new(SliderConfiguration::default()).with_haptics(BrokenHaptics);
        assert!(surface.drag_changed(Point::new(100.0, 0.0), container(), ms(0)));
        assert_eq!(surface.position(), 0.25);
    }

    #[test]
    fn test_tap_animates() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default());
        surface.mount(ms(0));
        assert!(surface.tap(Point::new(300.0, 100.0), container(), ms(1000)));

        assert_eq!(surface.position(), 0.75);
        assert_eq!(surface.presented_position(ms(1000)), 0.5);
        let midway = surface.presented_position(ms(1150));
        assert!(midway > 0.5 && midway < 0.75);
        assert_eq!(surface.presented_position(ms(1300)), 0.75);
        assert!(!surface.is_dragging());
    }

    #[test]
    fn test_tap_disabled() {
        let config = SliderConfiguration::default().with_tap_to_move(false);
        let mut surface = ComparisonSurface::new(config);
        assert!(!surface.tap(Point::new(300.0, 100.0), container(), ms(0)));
        assert_eq!(surface.position(), 0.5);
    }

    #[test]
    fn test_no_drag_ignores_input() {
        let config = SliderConfiguration::default().with_no_drag(true);
        let mut surface = ComparisonSurface::new(config);

        assert!(!surface.hit_testable());
        assert!(!surface.drag_changed(Point::new(10.0, 0.0), container(), ms(0)));
        assert!(!surface.tap(Point::new(10.0, 0.0), container(), ms(0)));
        assert!(!surface.accessibility_action(AccessibilityAction::Increment, ms(0)));
        assert!(!surface.is_dragging());
        assert_eq!(surface.position(), 0.5);
        assert!(surface.accessibility().actions.is_empty());
    }

    #[test]
    fn test_zero_width_drag_keeps_position() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default());
        surface.drag_changed(Point::new(10.0, 10.0), Size::new(0.0, 200.0), ms(0));
        assert_eq!(surface.position(), 0.5);
    }

    #[test]
    fn test_accessibility_steps_and_clamps() {
        let config = SliderConfiguration::default().with_initial_position(0.95);
        let mut surface = ComparisonSurface::new(config);

        surface.accessibility_action(AccessibilityAction::Increment, ms(0));
        assert_eq!(surface.position(), 1.0);
        assert!(surface.is_animating(ms(100)));
        assert_eq!(surface.accessibility().value, "100%");

        surface.accessibility_action(AccessibilityAction::Decrement, ms(500));
        assert!((surface.position() - 0.9).abs() < 1e-6);
        assert_eq!(surface.accessibility().value, "90%");
    }

    #[test]
    fn test_accessibility_label() {
        let config = SliderConfiguration::default().with_labels("Raw", "Graded");
        let node = ComparisonSurface::new(config).accessibility();
        assert_eq!(node.label, "Raw / Graded comparison");
        assert_eq!(node.value, "50%");
        assert_eq!(
            node.actions,
            vec![AccessibilityAction::Increment, AccessibilityAction::Decrement]
        );
    }

    #[test]
    fn test_labels_fade_and_hide_while_dragging() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default());
        surface.mount(ms(0));

        let frame = surface.frame(container(), ms(0));
        assert_eq!(frame.before_label_opacity, 1.0);
        assert_eq!(frame.after_label_opacity, 1.0);

        surface.drag_changed(Point::new(390.0, 0.0), container(), ms(10));
        let frame = surface.frame(container(), ms(10));
        assert!(!frame.geometry.labels_visible);
        assert_eq!(frame.before_label_opacity, 0.0);
        assert_eq!(frame.after_label_opacity, 0.0);

        // Released near the far edge: the after label fades in then stays hidden
        surface.drag_ended(ms(20));
        let frame = surface.frame(container(), ms(20));
        assert_eq!(frame.before_label_opacity, 0.0);
        let frame = surface.frame(container(), ms(220));
        assert_eq!(frame.before_label_opacity, 1.0);
        assert_eq!(frame.after_label_opacity, 0.0);
    }

    #[test]
    fn test_divider_emphasis_follows_drag() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default());
        surface.drag_changed(Point::new(200.0, 0.0), container(), ms(0));

        let resting = surface.frame(container(), ms(0)).divider.handle.unwrap();
        assert_eq!(resting.diameter, 40.0);
        let grown = surface.frame(container(), ms(1000)).divider.handle.unwrap();
        assert_eq!(grown.diameter, 50.0);

        surface.drag_ended(ms(1000));
        let shrunk = surface.frame(container(), ms(2000)).divider.handle.unwrap();
        assert_eq!(shrunk.diameter, 40.0);
    }

    #[test]
    fn test_frame_uses_layout_direction() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default().with_initial_position(0.25));
        surface.set_layout_direction(LayoutDirection::RightToLeft, ms(0));
        let frame = surface.frame(container(), ms(0));
        assert_eq!(frame.geometry.effective_position, 0.75);
        assert_eq!(frame.geometry.divider_center.x, 100.0);
        assert_eq!(frame.divider.line, Size::new(3.0, 200.0));
    }

    #[test]
    fn test_direction_before_mount_snaps_labels() {
        let config = SliderConfiguration::default().with_initial_position(0.05);
        let mut surface = ComparisonSurface::new(config);
        surface.set_layout_direction(LayoutDirection::RightToLeft, ms(0));
        surface.mount(ms(0));

        // Effective position 0.95: the before label shows, the after label does not
        let frame = surface.frame(container(), ms(0));
        assert_eq!(frame.before_label_opacity, 1.0);
        assert_eq!(frame.after_label_opacity, 0.0);
        assert!(!surface.is_animating(ms(0)));
    }

    #[test]
    fn test_direction_change_while_mounted_fades_labels() {
        let config = SliderConfiguration::default().with_initial_position(0.05);
        let mut surface = ComparisonSurface::new(config);
        surface.mount(ms(0));
        surface.set_layout_direction(LayoutDirection::RightToLeft, ms(0));

        let frame = surface.frame(container(), ms(100));
        assert!(frame.before_label_opacity > 0.0 && frame.before_label_opacity < 1.0);
        let frame = surface.frame(container(), ms(200));
        assert_eq!(frame.before_label_opacity, 1.0);
        assert_eq!(frame.after_label_opacity, 0.0);
    }

    #[test]
    fn test_unmount_ends_drag() {
        let mut surface = ComparisonSurface::new(SliderConfiguration::default());
        surface.mount(ms(0));
        surface.drag_changed(Point::new(100.0, 0.0), container(), ms(0));
        surface.unmount(ms(10));
        assert!(!surface.is_dragging());
        assert!(!surface.is_mounted());
    }

    #[test]
    fn test_surface_id_display_is_short() {
        let surface = ComparisonSurface::new(SliderConfiguration::default());
        assert_eq!(surface.id().to_string().len(), 8);
    }
}
