//! Status Bar (Bottom)
//!
//! Displays:
//! - Accessibility label and value, as a screen reader would announce them
//! - Current preset name
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use reveal_core::accessibility::AccessibilityNode;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    node: AccessibilityNode,
    preset_name: &'a Option<String>,
    status: &'a str,
) -> Element<'a, Message> {
    let preset_info = match preset_name {
        Some(name) => format!("Preset: {}", name),
        None => "No preset".to_string(),
    };

    let adjustable = if node.actions.is_empty() { " (fixed)" } else { "" };

    row![
        text(format!("{}: {}{}", node.label, node.value, adjustable)).size(10),
        Space::new().width(Length::Fixed(16.0)),
        text(preset_info).size(10).color([0.4, 0.4, 0.4]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
