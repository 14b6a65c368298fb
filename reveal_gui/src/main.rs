//! # Reveal GUI Application
//!
//! Interactive demo of the before/after comparison slider.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! The window shows one comparison surface over two demo scenes. The toolbar
//! edits the slider configuration; because a configuration is fixed for the
//! life of a surface, every edit builds a fresh surface that keeps the
//! current position.

use std::time::Duration;

use iced::time::Instant;
use iced::widget::{canvas, column, container};
use iced::{window, Element, Length, Subscription, Task};

use reveal_core::accessibility::AccessibilityAction;
use reveal_core::animation::AnimationSpec;
use reveal_core::geometry::{LayoutDirection, Size};
use reveal_core::gesture::GestureEvent;
use reveal_core::haptics::LogHaptics;
use reveal_core::{ComparisonSurface, SliderConfiguration};

#[cfg(not(target_arch = "wasm32"))]
mod presets;
mod ui;

use ui::comparison::ComparisonCanvas;
use ui::shared::layers::{Palette, SceneLayer};

/// Preset files need native dialogs and a filesystem
const PRESETS_AVAILABLE: bool = cfg!(not(target_arch = "wasm32"));

#[derive(Debug, Clone)]
pub enum Message {
    // Surface input
    Gesture(GestureEvent, Size),
    Accessibility(AccessibilityAction),
    Frame(Instant),

    // Settings
    ToggleOrientation,
    ToggleDirection,
    ToggleLabels,
    ToggleNoDrag,
    ToggleTapToMove,
    ToggleHaptics,
    ToggleStartAnimation,
    CycleEasing,
    ReplayStartAnimation,

    // Presets
    OpenPreset,
    SavePreset,
    #[cfg(not(target_arch = "wasm32"))]
    PresetFinished(presets::PresetOutcome),
}

struct Reveal {
    /// Settings as chosen by the user
    config: SliderConfiguration,
    surface: ComparisonSurface,
    /// Zero point of the surface clock
    epoch: Instant,
    before: SceneLayer,
    after: SceneLayer,
    preset_name: Option<String>,
    status: String,
}

fn build_surface(config: SliderConfiguration, direction: LayoutDirection, now: Duration) -> ComparisonSurface {
    let mut surface = ComparisonSurface::new(config).with_haptics(LogHaptics);
    surface.set_layout_direction(direction, now);
    surface.mount(now);
    surface
}

impl Reveal {
    fn new() -> (Self, Task<Message>) {
        let config = SliderConfiguration::default()
            .with_labels("Original", "Graded")
            .with_start_animation(true);
        let epoch = Instant::now();
        let surface = build_surface(config.clone(), LayoutDirection::default(), Duration::ZERO);
        log::info!("created surface {}", surface.id());

        let app = Reveal {
            config,
            surface,
            epoch,
            before: SceneLayer::new(Palette::muted(), "Original"),
            after: SceneLayer::new(Palette::vivid(), "Graded"),
            preset_name: None,
            status: "Ready".to_string(),
        };
        (app, Task::none())
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Replace the surface after a configuration change.
    ///
    /// The start sequence only plays when `play_start` is set, so editing an
    /// unrelated setting does not replay it.
    fn rebuild(&mut self, position: f32, play_start: bool) {
        let now = self.now();
        let direction = self.surface.layout_direction();
        self.surface.unmount(now);

        let config = self
            .config
            .clone()
            .with_initial_position(position)
            .with_start_animation(play_start);
        self.surface = build_surface(config, direction, now);
        log::debug!("rebuilt surface {} at position {:.2}", self.surface.id(), position);
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = self.now();
        let position = self.surface.position();

        match message {
            Message::Gesture(event, container) => {
                self.surface.handle_gesture(event, container, now);
            }
            Message::Accessibility(action) => {
                if self.surface.accessibility_action(action, now) {
                    self.status = self.surface.accessibility().value;
                }
            }
            Message::Frame(_) => {
                self.surface.tick(now);
            }

            Message::ToggleOrientation => {
                self.config = self.config.clone().with_orientation(self.config.orientation.toggled());
                self.rebuild(position, false);
            }
            Message::ToggleDirection => {
                let direction = match self.surface.layout_direction() {
                    LayoutDirection::LeftToRight => LayoutDirection::RightToLeft,
                    LayoutDirection::RightToLeft => LayoutDirection::LeftToRight,
                };
                self.surface.set_layout_direction(direction, now);
            }
            Message::ToggleLabels => {
                self.config = self.config.clone().with_show_labels(!self.config.show_labels);
                self.rebuild(position, false);
            }
            Message::ToggleNoDrag => {
                self.config = self.config.clone().with_no_drag(!self.config.no_drag);
                self.rebuild(position, false);
            }
            Message::ToggleTapToMove => {
                self.config = self.config.clone().with_tap_to_move(!self.config.allow_tap_to_move);
                self.rebuild(position, false);
            }
            Message::ToggleHaptics => {
                self.config = self
                    .config
                    .clone()
                    .with_haptic_feedback(!self.config.enable_haptic_feedback);
                self.rebuild(position, false);
            }
            Message::ToggleStartAnimation => {
                self.config = self
                    .config
                    .clone()
                    .with_start_animation(!self.config.show_start_animation);
                let play = self.config.show_start_animation;
                self.rebuild(position, play);
            }
            Message::CycleEasing => {
                let easing = ui::toolbar::next_easing(self.config.animation.easing);
                let animation = AnimationSpec::new(easing, self.config.animation.duration_secs);
                self.config = self.config.clone().with_animation(animation);
                self.rebuild(position, false);
                self.status = format!("Easing: {}", easing.display_name());
            }
            Message::ReplayStartAnimation => {
                self.rebuild(position, true);
                self.status = "Replaying start animation".to_string();
            }

            #[cfg(not(target_arch = "wasm32"))]
            Message::OpenPreset => {
                return Task::perform(presets::open_preset(), Message::PresetFinished);
            }
            #[cfg(not(target_arch = "wasm32"))]
            Message::SavePreset => {
                let name = self.preset_name.clone().unwrap_or_else(|| "Untitled".to_string());
                let config = self.config.clone().with_initial_position(position);
                let preset = reveal_core::Preset::new(name, config);
                return Task::perform(presets::save_preset_as(preset), Message::PresetFinished);
            }
            #[cfg(not(target_arch = "wasm32"))]
            Message::PresetFinished(outcome) => self.finish_preset(outcome),

            #[cfg(target_arch = "wasm32")]
            Message::OpenPreset | Message::SavePreset => {
                self.status = "Presets are not available in the browser".to_string();
            }
        }

        Task::none()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn finish_preset(&mut self, outcome: presets::PresetOutcome) {
        use presets::PresetOutcome;

        match outcome {
            PresetOutcome::Loaded(preset) => {
                self.config = preset.config;
                let position = self.config.initial_position;
                let play = self.config.show_start_animation;
                self.rebuild(position, play);
                self.status = format!("Loaded preset '{}'", preset.name);
                self.preset_name = Some(preset.name);
            }
            PresetOutcome::Saved { name, path } => {
                self.status = format!("Saved '{}' to {}", name, path.display());
                self.preset_name = Some(name);
            }
            PresetOutcome::Cancelled => {}
            PresetOutcome::Failed(e) => {
                log::warn!("preset operation failed: {}", e);
                self.status = format!("Error: {}", e);
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.surface.is_animating(self.now()) {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let comparison = canvas(ComparisonCanvas::new(
            &self.surface,
            &self.before,
            &self.after,
            self.now(),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

        let subtitle = format!(
            "{} / {}",
            self.config.orientation.display_name(),
            self.surface.layout_direction().display_name()
        );

        column![
            ui::toolbar::view_header(subtitle),
            ui::toolbar::view_toolbar(&self.config, self.surface.layout_direction(), PRESETS_AVAILABLE),
            container(comparison).width(Length::Fill).height(Length::Fill),
            ui::status_bar::view_status_bar(self.surface.accessibility(), &self.preset_name, &self.status),
        ]
        .spacing(8)
        .padding(16)
        .into()
    }
}

pub fn main() -> iced::Result {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(Reveal::new, Reveal::update, Reveal::view)
        .title("Reveal")
        .subscription(Reveal::subscription)
        .window_size(iced::Size::new(960.0, 640.0))
        .run()
}
