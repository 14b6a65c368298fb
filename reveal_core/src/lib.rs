//! # reveal_core - Before/After Comparison Slider Model
//!
//! `reveal_core` is the framework-independent heart of Reveal: a draggable
//! divider laid over two visual layers, revealing the "before" layer from the
//! origin edge up to the divider while the "after" layer fills the container.
//! Frontends (see `reveal_gui`) feed it pointer events and a clock, and paint
//! whatever [`SurfaceFrame`] it returns.
//!
//! ## Design Philosophy
//!
//! - **Never fails while presenting**: positions clamp, zero-sized containers
//!   are ignored, haptic errors are swallowed
//! - **Output is a function of state**: `frame(container, now)` has no side effects
//! - **Immutable configuration**: builder setters return new values
//! - **JSON presets**: configurations round-trip through serde
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use reveal_core::{ComparisonSurface, Orientation, SliderConfiguration};
//! use reveal_core::geometry::{Point, Size};
//!
//! let config = SliderConfiguration::default()
//!     .with_orientation(Orientation::Vertical)
//!     .with_labels("Original", "Processed");
//! let mut surface = ComparisonSurface::new(config);
//! surface.mount(Duration::ZERO);
//!
//! let container = Size::new(300.0, 600.0);
//! surface.drag_changed(Point::new(150.0, 150.0), container, Duration::ZERO);
//!
//! let frame = surface.frame(container, Duration::ZERO);
//! assert_eq!(frame.geometry.before_clip.size.height, 150.0);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Slider configuration and builder setters
//! - [`state`] - Mutable per-instance slider state
//! - [`surface`] - The live comparison surface
//! - [`layout`] - Layout math (mirroring, clipping, label visibility)
//! - [`divider`] - Stateless divider control geometry
//! - [`gesture`] - Gesture contract and pointer-to-position mapping
//! - [`animation`] - Easing curves and animated values
//! - [`schedule`] - One-shot start sequence
//! - [`accessibility`] - Accessibility label, value and actions
//! - [`haptics`] - Best-effort haptic feedback seam
//! - [`color`] - Colors and the contrast resolver
//! - [`geometry`] - Points, sizes, rectangles, layout direction
//! - [`preset`] - Preset files with atomic saves
//! - [`errors`] - Structured error types

pub mod accessibility;
pub mod animation;
pub mod color;
pub mod config;
pub mod divider;
pub mod errors;
pub mod geometry;
pub mod gesture;
pub mod haptics;
pub mod layout;
pub mod preset;
pub mod schedule;
pub mod state;
pub mod surface;

// Re-export commonly used types at crate root for convenience
pub use config::{Orientation, SliderConfiguration};
pub use errors::{RevealError, RevealResult};
pub use preset::{load_preset, save_preset, Preset};
pub use surface::{ComparisonSurface, SurfaceFrame};
