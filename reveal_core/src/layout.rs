//! # Layout Math
//!
//! Derives everything a frontend needs to paint one frame of the comparison
//! surface from the configuration, the presented position, the drag flag, the
//! container size and the layout direction. Nothing here is stored; a new
//! [`RenderGeometry`] is computed on every layout pass.
//!
//! ## Mirroring
//!
//! For a horizontal slider in a right-to-left layout the effective position is
//! `1 - position` and the "before" layer is revealed from the right edge. In
//! physical coordinates the divider still sits at `position * width`, so the
//! handle follows the pointer in both directions. Vertical sliders never mirror.
//!
//! ## Example
//!
//! ```rust
//! use reveal_core::config::SliderConfiguration;
//! use reveal_core::geometry::{LayoutDirection, Size};
//! use reveal_core::layout::RenderGeometry;
//!
//! let config = SliderConfiguration::default();
//! let geometry = RenderGeometry::compute(
//!     &config,
//!     0.25,
//!     false,
//!     Size::new(400.0, 200.0),
//!     LayoutDirection::LeftToRight,
//! );
//!
//! assert_eq!(geometry.before_clip.size.width, 100.0);
//! assert_eq!(geometry.divider_offset.x, -100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{Orientation, SliderConfiguration};
use crate::geometry::{LayoutDirection, Point, Rect, Size, Vector};

/// The before label hides once the effective position drops to this value
pub const BEFORE_LABEL_THRESHOLD: f32 = 0.1;

/// The after label hides once the effective position reaches this value
pub const AFTER_LABEL_THRESHOLD: f32 = 0.9;

/// Length of the container along the active axis
pub fn axis_extent(size: Size, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => size.width,
        Orientation::Vertical => size.height,
    }
}

/// Position after right-to-left mirroring (horizontal sliders only)
pub fn effective_position(position: f32, orientation: Orientation, direction: LayoutDirection) -> f32 {
    match (orientation, direction) {
        (Orientation::Horizontal, LayoutDirection::RightToLeft) => 1.0 - position,
        _ => position,
    }
}

/// Target opacity of the before label
pub fn before_label_opacity(effective: f32, labels_visible: bool) -> f32 {
    if labels_visible && effective > BEFORE_LABEL_THRESHOLD {
        1.0
    } else {
        0.0
    }
}

/// Target opacity of the after label
pub fn after_label_opacity(effective: f32, labels_visible: bool) -> f32 {
    if labels_visible && effective < AFTER_LABEL_THRESHOLD {
        1.0
    } else {
        0.0
    }
}

/// Physical container edge a label is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Left,
    Right,
    Top,
    Bottom,
}

impl LabelAnchor {
    /// Anchor of the before label: the origin edge of the active axis
    pub fn for_before(orientation: Orientation, direction: LayoutDirection) -> Self {
        match (orientation, direction) {
            (Orientation::Horizontal, LayoutDirection::LeftToRight) => LabelAnchor::Left,
            (Orientation::Horizontal, LayoutDirection::RightToLeft) => LabelAnchor::Right,
            (Orientation::Vertical, _) => LabelAnchor::Top,
        }
    }

    /// Anchor of the after label: the far edge of the active axis
    pub fn for_after(orientation: Orientation, direction: LayoutDirection) -> Self {
        match Self::for_before(orientation, direction) {
            LabelAnchor::Left => LabelAnchor::Right,
            LabelAnchor::Right => LabelAnchor::Left,
            LabelAnchor::Top => LabelAnchor::Bottom,
            LabelAnchor::Bottom => LabelAnchor::Top,
        }
    }

    /// Top-left corner for a label of `label` size placed `margin` away from
    /// this edge. Horizontal anchors sit along the top edge.
    pub fn place(&self, label: Size, container: Size, margin: f32) -> Point {
        match self {
            LabelAnchor::Left => Point::new(margin, margin),
            LabelAnchor::Right => Point::new(container.width - label.width - margin, margin),
            LabelAnchor::Top => Point::new((container.width - label.width) / 2.0, margin),
            LabelAnchor::Bottom => Point::new(
                (container.width - label.width) / 2.0,
                container.height - label.height - margin,
            ),
        }
    }
}

/// Geometry of one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderGeometry {
    pub container: Size,
    pub orientation: Orientation,
    pub direction: LayoutDirection,
    /// Position after mirroring
    pub effective_position: f32,
    /// Visible region of the before layer, physical coordinates
    pub before_clip: Rect,
    /// The after layer always fills the container
    pub after_clip: Rect,
    /// Offset of the divider's center from the container's center
    pub divider_offset: Vector,
    /// Divider center in container coordinates
    pub divider_center: Point,
    /// False while dragging or when labels are disabled
    pub labels_visible: bool,
    pub before_label_anchor: LabelAnchor,
    pub after_label_anchor: LabelAnchor,
    /// Target opacities; the surface animates toward them
    pub before_label_opacity: f32,
    pub after_label_opacity: f32,
}

impl RenderGeometry {
    /// Run the layout algorithm for one frame.
    ///
    /// `position` is the presented (possibly mid-animation) position.
    pub fn compute(
        config: &SliderConfiguration,
        position: f32,
        is_dragging: bool,
        container: Size,
        direction: LayoutDirection,
    ) -> Self {
        let orientation = config.orientation;
        let effective = effective_position(position, orientation, direction);
        let extent = axis_extent(container, orientation);
        let revealed = effective * extent;
        let centered = (effective - 0.5) * extent;

        let (before_clip, divider_offset) = match orientation {
            Orientation::Horizontal => {
                let origin_x = if direction.is_rtl() {
                    container.width - revealed
                } else {
                    0.0
                };
                let sign = if direction.is_rtl() { -1.0 } else { 1.0 };
                (
                    Rect::new(Point::new(origin_x, 0.0), Size::new(revealed, container.height)),
                    Vector::new(centered * sign, 0.0),
                )
            }
            Orientation::Vertical => (
                Rect::new(Point::ORIGIN, Size::new(container.width, revealed)),
                Vector::new(0.0, centered),
            ),
        };

        let center = container.center();
        let labels_visible = config.show_labels && !is_dragging;

        RenderGeometry {
            container,
            orientation,
            direction,
            effective_position: effective,
            before_clip,
            after_clip: Rect::from_size(container),
            divider_offset,
            divider_center: Point::new(center.x + divider_offset.x, center.y + divider_offset.y),
            labels_visible,
            before_label_anchor: LabelAnchor::for_before(orientation, direction),
            after_label_anchor: LabelAnchor::for_after(orientation, direction),
            before_label_opacity: before_label_opacity(effective, labels_visible),
            after_label_opacity: after_label_opacity(effective, labels_visible),
        }
    }
}
