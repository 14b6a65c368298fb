//! UI module for the Reveal GUI
//!
//! # Panel Structure
//! - `toolbar` - Header, preset operations (Open, Save), slider settings
//! - `comparison` - The comparison canvas hosting the live surface
//! - `status_bar` - Accessibility readout and status messages
//!
//! # Shared Components
//! - `shared/divider` - Canvas painting for the divider control
//! - `shared/layers` - Layer trait and demo scenes

pub mod comparison;
pub mod status_bar;
pub mod toolbar;

pub mod shared;
