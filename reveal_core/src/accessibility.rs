//! Accessibility description of a comparison surface.

use serde::{Deserialize, Serialize};

/// Position change per increment/decrement action
pub const ACCESSIBILITY_STEP: f32 = 0.1;

/// Adjustable actions exposed to assistive technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibilityAction {
    Increment,
    Decrement,
}

impl AccessibilityAction {
    /// Signed position change for this action
    pub fn delta(&self) -> f32 {
        match self {
            AccessibilityAction::Increment => ACCESSIBILITY_STEP,
            AccessibilityAction::Decrement => -ACCESSIBILITY_STEP,
        }
    }
}

/// What a screen reader sees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityNode {
    pub label: String,
    pub value: String,
    pub actions: Vec<AccessibilityAction>,
}

/// Label combining both captions, e.g. "Before / After comparison"
pub fn label_text(before: &str, after: &str) -> String {
    format!("{} / {} comparison", before, after)
}

/// Position as a whole percentage, e.g. "50%"
pub fn value_text(position: f32) -> String {
    format!("{}%", (position * 100.0).round() as i32)
}
