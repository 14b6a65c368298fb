//! Mutable slider state owned by a single surface instance.

use serde::{Deserialize, Serialize};

use crate::geometry::clamp_unit;

/// Position and interaction flags of one comparison surface.
///
/// The position is private so every write goes through [`SliderState::set_position`]
/// and stays inside `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderState {
    position: f32,
    /// True between drag start and drag end
    pub is_dragging: bool,
    has_played_start_animation: bool,
}

impl SliderState {
    pub fn new(initial_position: f32) -> Self {
        SliderState {
            position: clamp_unit(initial_position),
            is_dragging: false,
            has_played_start_animation: false,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Store a new position, clamped to `0..=1`
    pub fn set_position(&mut self, position: f32) {
        self.position = clamp_unit(position);
    }

    pub fn has_played_start_animation(&self) -> bool {
        self.has_played_start_animation
    }

    /// Flip the start-animation guard.
    ///
    /// Returns `true` only on the first call.
    pub fn mark_start_animation_played(&mut self) -> bool {
        let first = !self.has_played_start_animation;
        self.has_played_start_animation = true;
        first
    }
}
