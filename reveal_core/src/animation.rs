//! # Animation
//!
//! Easing curves and time-driven value transitions. This is deliberately
//! small: the slider only ever animates scalars (position, label opacity and
//! the divider's drag emphasis), so a transition is just `from`, `to`, a start
//! time and an [`AnimationSpec`].
//!
//! Time is expressed as a [`Duration`] measured from an arbitrary epoch chosen
//! by the frontend (usually when the surface was created).
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use reveal_core::animation::{AnimatedValue, AnimationSpec};
//!
//! let mut value = AnimatedValue::new(0.0);
//! value.animate_to(1.0, AnimationSpec::linear(1.0), Duration::ZERO);
//!
//! assert_eq!(value.target(), 1.0);
//! assert!((value.value_at(Duration::from_millis(500)) - 0.5).abs() < 1e-4);
//! assert_eq!(value.value_at(Duration::from_secs(2)), 1.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound on any animation length, keeps `Duration` conversion safe
const MAX_DURATION_SECS: f32 = 60.0;

/// Stiffness of the spring curve; high enough to settle inside the duration
const SPRING_STIFFNESS: f32 = 3.0 * std::f32::consts::PI;

/// Spring animations run this many response periods before snapping
const SPRING_SETTLE_FACTOR: f32 = 1.5;

// ============================================================================
// Easing
// ============================================================================

/// Timing curve applied to a transition's normalized progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// Critically damped spring, no overshoot
    Spring,
}

impl Easing {
    /// Map linear progress `t` in `0..=1` onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Spring => {
                let k = SPRING_STIFFNESS;
                let raw = 1.0 - (1.0 + k * t) * (-k * t).exp();
                let end = 1.0 - (1.0 + k) * (-k).exp();
                raw / end
            }
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseIn => "Ease In",
            Easing::EaseOut => "Ease Out",
            Easing::EaseInOut => "Ease In-Out",
            Easing::Spring => "Spring",
        }
    }
}

// ============================================================================
// Animation Spec
// ============================================================================

/// How a programmatic position change is animated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub easing: Easing,
    /// Length of the transition in seconds
    pub duration_secs: f32,
}

impl Default for AnimationSpec {
    /// Ease-in-out over 0.3 seconds
    fn default() -> Self {
        AnimationSpec::ease_in_out(0.3)
    }
}

impl AnimationSpec {
    pub fn new(easing: Easing, duration_secs: f32) -> Self {
        AnimationSpec {
            easing,
            duration_secs,
        }
    }

    pub fn linear(duration_secs: f32) -> Self {
        AnimationSpec::new(Easing::Linear, duration_secs)
    }

    pub fn ease_in_out(duration_secs: f32) -> Self {
        AnimationSpec::new(Easing::EaseInOut, duration_secs)
    }

    /// Spring settling roughly within `response` seconds
    pub fn spring(response: f32) -> Self {
        AnimationSpec::new(Easing::Spring, response * SPRING_SETTLE_FACTOR)
    }

    /// No animation at all
    pub fn instant() -> Self {
        AnimationSpec::linear(0.0)
    }

    /// Duration as a [`Duration`], rounded to whole milliseconds; zero for
    /// negative or non-finite input
    pub fn duration(&self) -> Duration {
        if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
            let millis = (self.duration_secs.min(MAX_DURATION_SECS) * 1000.0).round();
            Duration::from_millis(millis as u64)
        } else {
            Duration::ZERO
        }
    }
}

// ============================================================================
// Animated Value
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    start: Duration,
    spec: AnimationSpec,
}

/// A scalar that can jump or glide toward a target.
///
/// `target()` is the committed value; `value_at(now)` is what should be
/// presented at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    target: f32,
    transition: Option<Transition>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        AnimatedValue {
            target: value,
            transition: None,
        }
    }

    /// Committed value, ignoring any running transition
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Jump to a value, cancelling any running transition
    pub fn set(&mut self, value: f32) {
        self.target = value;
        self.transition = None;
    }

    /// Glide from the currently presented value to `target`.
    ///
    /// A zero-length spec behaves like [`AnimatedValue::set`].
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec, now: Duration) {
        let from = self.value_at(now);
        self.target = target;
        self.transition = if spec.duration().is_zero() || from == target {
            None
        } else {
            Some(Transition {
                from,
                start: now,
                spec,
            })
        };
    }

    /// Presented value at `now`
    pub fn value_at(&self, now: Duration) -> f32 {
        let Some(transition) = self.transition else {
            return self.target;
        };
        let duration = transition.spec.duration();
        let elapsed = now.saturating_sub(transition.start);
        if elapsed >= duration {
            return self.target;
        }
        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        let eased = transition.spec.easing.apply(t);
        transition.from + (self.target - transition.from) * eased
    }

    /// True while a transition is still in flight at `now`
    pub fn is_animating(&self, now: Duration) -> bool {
        match self.transition {
            Some(transition) => now.saturating_sub(transition.start) < transition.spec.duration(),
            None => false,
        }
    }

    /// Drop a finished transition
    pub fn settle(&mut self, now: Duration) {
        if !self.is_animating(now) {
            self.transition = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Spring,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let easing = Easing::EaseInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spring_does_not_overshoot() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let value = Easing::Spring.apply(step as f32 / 100.0);
            assert!(value <= 1.0 + 1e-6);
            assert!(value >= previous - 1e-6);
            previous = value;
        }
    }

    #[test]
    fn test_default_spec() {
        let spec = AnimationSpec::default();
        assert_eq!(spec.easing, Easing::EaseInOut);
        assert_eq!(spec.duration(), ms(300));
    }

    #[test]
    fn test_bad_durations_are_instant() {
        assert_eq!(AnimationSpec::linear(-1.0).duration(), Duration::ZERO);
        assert_eq!(AnimationSpec::linear(f32::NAN).duration(), Duration::ZERO);
    }

    #[test]
    fn test_animated_value_glides() {
        let mut value = AnimatedValue::new(0.2);
        value.animate_to(0.8, AnimationSpec::ease_in_out(0.6), ms(1000));

        assert_eq!(value.target(), 0.8);
        assert_eq!(value.value_at(ms(1000)), 0.2);
        assert!((value.value_at(ms(1300)) - 0.5).abs() < 1e-4);
        assert_eq!(value.value_at(ms(1600)), 0.8);
        assert!(value.is_animating(ms(1599)));
        assert!(!value.is_animating(ms(1600)));
    }

    #[test]
    fn test_retarget_starts_from_presented_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, AnimationSpec::linear(1.0), ms(0));
        value.animate_to(0.0, AnimationSpec::linear(1.0), ms(500));

        assert!((value.value_at(ms(500)) - 0.5).abs() < 1e-4);
        assert!((value.value_at(ms(1000)) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_set_cancels_transition() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, AnimationSpec::linear(1.0), ms(0));
        value.set(0.4);

        assert!(!value.is_animating(ms(100)));
        assert_eq!(value.value_at(ms(100)), 0.4);
    }

    #[test]
    fn test_settle_drops_finished_transition() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, AnimationSpec::linear(0.1), ms(0));
        value.settle(ms(50));
        assert!(value.is_animating(ms(50)));
        value.settle(ms(200));
        assert!(!value.is_animating(ms(0)));
    }
}
