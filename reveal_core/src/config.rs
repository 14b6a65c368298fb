//! # Slider Configuration
//!
//! `SliderConfiguration` is the immutable input a host hands to a
//! [`ComparisonSurface`](crate::surface::ComparisonSurface). Every field has a
//! default, and every `with_*` setter consumes the configuration and returns a
//! new one, so a half-configured slider is never observable.
//!
//! Configurations serialize to JSON with all fields optional; missing fields
//! take their defaults (see [`crate::preset`] for the file format).
//!
//! ## Example
//!
//! ```rust
//! use reveal_core::config::{Orientation, SliderConfiguration};
//!
//! let config = SliderConfiguration::default()
//!     .with_orientation(Orientation::Vertical)
//!     .with_labels("Original", "Processed")
//!     .with_initial_position(1.5);
//!
//! assert_eq!(config.initial_position, 1.0);
//! assert_eq!(config.before_label, "Original");
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::AnimationSpec;
use crate::color::Color;
use crate::geometry::clamp_unit;

/// Axis along which the divider travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Divider is a vertical line moving left/right
    #[default]
    Horizontal,
    /// Divider is a horizontal line moving up/down
    Vertical,
}

impl Orientation {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }

    /// The other orientation
    pub fn toggled(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Complete configuration of a comparison slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfiguration {
    /// Show the before/after captions
    pub show_labels: bool,
    /// Disable all interaction; the surface also stops hit-testing
    pub no_drag: bool,
    /// Color of the divider line and handle
    pub slider_color: Color,
    /// Width of the divider line
    pub slider_width: f32,
    /// Diameter of the handle at rest
    pub handle_size: f32,
    pub before_label: String,
    pub after_label: String,
    /// Animation used for taps and accessibility adjustments
    pub animation: AnimationSpec,
    /// Starting position, always within `0..=1`
    pub initial_position: f32,
    pub orientation: Orientation,
    pub allow_tap_to_move: bool,
    /// Multiplier applied to the normalized pointer coordinate
    pub drag_sensitivity: f32,
    pub enable_haptic_feedback: bool,
    /// Play the one-shot "this is draggable" sequence on first mount
    pub show_start_animation: bool,
}

impl Default for SliderConfiguration {
    fn default() -> Self {
        SliderConfiguration {
            show_labels: true,
            no_drag: false,
            slider_color: Color::WHITE,
            slider_width: 3.0,
            handle_size: 40.0,
            before_label: "Before".to_string(),
            after_label: "After".to_string(),
            animation: AnimationSpec::default(),
            initial_position: 0.5,
            orientation: Orientation::Horizontal,
            allow_tap_to_move: true,
            drag_sensitivity: 1.0,
            enable_haptic_feedback: true,
            show_start_animation: false,
        }
    }
}

impl SliderConfiguration {
    /// Re-apply construction-time clamping.
    ///
    /// Used after deserialization, where fields bypass the setters.
    pub fn normalized(mut self) -> Self {
        self.initial_position = clamp_unit(self.initial_position);
        self
    }

    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    pub fn with_no_drag(mut self, no_drag: bool) -> Self {
        self.no_drag = no_drag;
        self
    }

    pub fn with_slider_color(mut self, color: Color) -> Self {
        self.slider_color = color;
        self
    }

    pub fn with_slider_width(mut self, width: f32) -> Self {
        self.slider_width = width;
        self
    }

    pub fn with_handle_size(mut self, size: f32) -> Self {
        self.handle_size = size;
        self
    }

    /// Set both caption texts at once
    pub fn with_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = before.into();
        self.after_label = after.into();
        self
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Starting position, clamped to `0..=1`
    pub fn with_initial_position(mut self, position: f32) -> Self {
        self.initial_position = clamp_unit(position);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_tap_to_move(mut self, allow: bool) -> Self {
        self.allow_tap_to_move = allow;
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_haptic_feedback(mut self, enabled: bool) -> Self {
        self.enable_haptic_feedback = enabled;
        self
    }

    pub fn with_start_animation(mut self, enabled: bool) -> Self {
        self.show_start_animation = enabled;
        self
    }
}
