//! # Start Sequence Scheduling
//!
//! The optional one-shot "look, it moves" sequence played when a surface is
//! first mounted: glide to 0.2, then 0.8, then settle on 0.5. Steps are due at
//! fixed offsets from the mount time and are polled from the surface's
//! `tick`, which keeps everything on the single UI thread. Pending steps can be
//! cancelled when the owning surface is unmounted.

use std::collections::VecDeque;
use std::time::Duration;

use crate::animation::AnimationSpec;

/// Targets visited by the start sequence, in order
pub const START_SEQUENCE_TARGETS: [f32; 3] = [0.2, 0.8, 0.5];

/// Time between consecutive steps
pub const START_STEP_INTERVAL_MS: u64 = 800;

/// Length of each step's animation in seconds
pub const START_STEP_ANIMATION_SECS: f32 = 0.6;

/// One deferred position change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledStep {
    /// Time at which the step fires
    pub due: Duration,
    pub target: f32,
}

/// Queue of pending start-sequence steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartSequence {
    pending: VecDeque<ScheduledStep>,
}

impl StartSequence {
    /// Nothing scheduled
    pub fn empty() -> Self {
        Self::default()
    }

    /// Schedule the three steps relative to `mounted_at`
    pub fn schedule(mounted_at: Duration) -> Self {
        let interval = Duration::from_millis(START_STEP_INTERVAL_MS);
        let pending = START_SEQUENCE_TARGETS
            .iter()
            .zip(0u32..)
            .map(|(&target, index)| ScheduledStep {
                due: mounted_at + interval * index,
                target,
            })
            .collect();
        StartSequence { pending }
    }

    /// Animation applied to each step
    pub fn step_animation() -> AnimationSpec {
        AnimationSpec::ease_in_out(START_STEP_ANIMATION_SECS)
    }

    /// Remove and return every step due at or before `now`, in order
    pub fn take_due(&mut self, now: Duration) -> Vec<ScheduledStep> {
        let mut fired = Vec::new();
        while let Some(step) = self.pending.front() {
            if step.due > now {
                break;
            }
            fired.extend(self.pending.pop_front());
        }
        fired
    }

    /// Drop all pending steps, returning how many were cancelled
    pub fn cancel(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
