//! # Haptic Feedback
//!
//! Platform haptics sit behind [`HapticEngine`]. Feedback is best-effort: the
//! surface fires it on every drag move and discards any error after logging
//! it, so a missing or failing engine never interrupts a gesture.

use crate::errors::RevealResult;

/// Strength of an impact. Drag ticks only ever ask for a light pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    Light,
}

/// Fire-and-forget haptic output
pub trait HapticEngine: Send {
    fn impact(&self, intensity: HapticIntensity) -> RevealResult<()>;
}

/// Engine for platforms without haptics
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticEngine for NoHaptics {
    fn impact(&self, _intensity: HapticIntensity) -> RevealResult<()> {
        Ok(())
    }
}

/// Engine that records impacts in the log, handy on desktop
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl HapticEngine for LogHaptics {
    fn impact(&self, intensity: HapticIntensity) -> RevealResult<()> {
        log::trace!("haptic impact: {:?}", intensity);
        Ok(())
    }
}
