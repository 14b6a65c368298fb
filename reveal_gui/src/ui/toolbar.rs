//! Toolbar component
//!
//! Contains preset operations (Open, Save), slider setting toggles, the
//! animation easing picker and the start animation replay button.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use reveal_core::animation::Easing;
use reveal_core::geometry::LayoutDirection;
use reveal_core::SliderConfiguration;

use crate::Message;

/// Render the application header with title
pub fn view_header(subtitle: String) -> Element<'static, Message> {
    row![
        text("Reveal").size(28),
        Space::new().width(Length::Fill),
        text(subtitle).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn toggle(label: &str, active: bool, message: Message) -> iced::widget::Button<'static, Message> {
    button(text(label.to_string()).size(11))
        .on_press(message)
        .padding(Padding::from([4, 8]))
        .style(if active { button::primary } else { button::secondary })
}

/// Easing picked by the next press of the easing button
pub fn next_easing(easing: Easing) -> Easing {
    match easing {
        Easing::Linear => Easing::EaseIn,
        Easing::EaseIn => Easing::EaseOut,
        Easing::EaseOut => Easing::EaseInOut,
        Easing::EaseInOut => Easing::Spring,
        Easing::Spring => Easing::Linear,
    }
}

/// Render the toolbar with preset operations and setting toggles.
///
/// Preset buttons are only shown where native file dialogs exist.
pub fn view_toolbar(
    config: &SliderConfiguration,
    direction: LayoutDirection,
    presets_available: bool,
) -> Element<'static, Message> {
    let preset_buttons = if presets_available {
        row![
            button(text("Open Preset").size(11))
                .on_press(Message::OpenPreset)
                .padding(Padding::from([4, 8]))
                .style(button::secondary),
            button(text("Save Preset").size(11))
                .on_press(Message::SavePreset)
                .padding(Padding::from([4, 8]))
                .style(button::secondary),
        ]
        .spacing(4)
    } else {
        row![]
    };

    let settings = row![
        toggle(config.orientation.display_name(), false, Message::ToggleOrientation),
        toggle(direction.display_name(), direction.is_rtl(), Message::ToggleDirection),
        toggle("Labels", config.show_labels, Message::ToggleLabels),
        toggle("No Drag", config.no_drag, Message::ToggleNoDrag),
        toggle("Tap to Move", config.allow_tap_to_move, Message::ToggleTapToMove),
        toggle("Haptics", config.enable_haptic_feedback, Message::ToggleHaptics),
        toggle("Start Animation", config.show_start_animation, Message::ToggleStartAnimation),
        toggle(config.animation.easing.display_name(), false, Message::CycleEasing),
    ]
    .spacing(4);

    let replay_button = button(text("Replay").size(11))
        .on_press(Message::ReplayStartAnimation)
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    row![
        preset_buttons,
        Space::new().width(Length::Fill),
        settings,
        replay_button,
    ]
    .spacing(8)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_easing_visits_every_curve() {
        let mut easing = Easing::default();
        let mut seen = vec![easing.display_name()];
        for _ in 0..4 {
            easing = next_easing(easing);
            seen.push(easing.display_name());
        }
        assert_eq!(next_easing(easing), Easing::default());
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }
}
