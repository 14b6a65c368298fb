//! # Reveal CLI Application
//!
//! Headless driver for the comparison slider: loads a configuration (a preset
//! file given as the first argument, or the defaults), applies one pointer
//! gesture to a container of the requested size and prints the resulting
//! layout, both as a summary and as JSON.
//!
//! ```text
//! reveal_cli [preset.rvl]
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use reveal_core::geometry::{LayoutDirection, Point, Size};
use reveal_core::haptics::LogHaptics;
use reveal_core::{load_preset, ComparisonSurface, Orientation, RevealError, SliderConfiguration};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f32(prompt: &str, default: f32) -> f32 {
    prompt_line(prompt)
        .and_then(|input| input.parse().ok())
        .unwrap_or(default)
}

/// Gesture the user asked to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Drag,
    Tap,
}

fn parse_action(input: &str) -> Action {
    match input.trim().to_ascii_lowercase().as_str() {
        "t" | "tap" => Action::Tap,
        _ => Action::Drag,
    }
}

fn parse_orientation(input: &str, default: Orientation) -> Orientation {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Orientation::Horizontal,
        "v" | "vertical" => Orientation::Vertical,
        _ => default,
    }
}

fn parse_direction(input: &str) -> LayoutDirection {
    match input.trim().to_ascii_lowercase().as_str() {
        "rtl" | "r" => LayoutDirection::RightToLeft,
        _ => LayoutDirection::LeftToRight,
    }
}

fn load_config(path: Option<&str>) -> Result<(String, SliderConfiguration), RevealError> {
    match path {
        Some(path) => {
            let preset = load_preset(Path::new(path))?;
            log::info!("loaded preset '{}' from {}", preset.name, path);
            Ok((preset.name, preset.config))
        }
        None => {
            log::info!("no preset given, using defaults");
            Ok(("Defaults".to_string(), SliderConfiguration::default()))
        }
    }
}

/// Apply one gesture to a freshly mounted surface and let it settle.
///
/// The start sequence is switched off: its pending steps would fire on the
/// settle tick and overwrite the position the gesture produced. Returns the
/// surface, whether the gesture was handled and the settled time.
fn simulate(
    config: &SliderConfiguration,
    direction: LayoutDirection,
    container: Size,
    location: Point,
    action: Action,
) -> (ComparisonSurface, bool, Duration) {
    let config = config.clone().with_start_animation(false);
    let settled = config.animation.duration() + Duration::from_secs(5);

    let mut surface = ComparisonSurface::new(config).with_haptics(LogHaptics);
    surface.set_layout_direction(direction, Duration::ZERO);
    surface.mount(Duration::ZERO);

    let handled = match action {
        Action::Drag => {
            let moved = surface.drag_changed(location, container, Duration::ZERO);
            surface.drag_ended(Duration::ZERO);
            moved
        }
        Action::Tap => surface.tap(location, container, Duration::ZERO),
    };
    log::debug!(
        "{:?} at ({}, {}) in {}x{}: handled={}",
        action,
        location.x,
        location.y,
        container.width,
        container.height,
        handled
    );

    // Let every transition finish before reporting
    surface.tick(settled);
    (surface, handled, settled)
}

fn report_error(e: &RevealError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Reveal CLI - Comparison Slider Layout");
    println!("=====================================");
    println!();

    let preset_path = std::env::args().nth(1);
    let (name, config) = match load_config(preset_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };
    println!("Configuration: {} ({})", name, config.orientation.display_name());
    println!();

    let orientation_prompt = format!("Orientation (h/v) [{}]: ", config.orientation.display_name());
    let orientation = parse_orientation(&prompt_line(&orientation_prompt).unwrap_or_default(), config.orientation);
    let config = config.with_orientation(orientation);
    let direction = parse_direction(&prompt_line("Layout direction (ltr/rtl) [ltr]: ").unwrap_or_default());
    let width = prompt_f32("Container width [400]: ", 400.0);
    let height = prompt_f32("Container height [300]: ", 300.0);
    let x = prompt_f32("Pointer x [100]: ", 100.0);
    let y = prompt_f32("Pointer y [150]: ", 150.0);
    let action = parse_action(&prompt_line("Gesture (drag/tap) [drag]: ").unwrap_or_default());

    let container = Size::new(width, height);
    let location = Point::new(x, y);
    let (surface, handled, settled) = simulate(&config, direction, container, location, action);
    let frame = surface.frame(container, settled);
    let node = surface.accessibility();

    println!();
    println!("═══════════════════════════════════════");
    println!("  LAYOUT");
    println!("═══════════════════════════════════════");
    println!();
    println!("Gesture:   {:?} at ({:.1}, {:.1}) {}", action, x, y, if handled { "[handled]" } else { "[ignored]" });
    println!("Layout:    {} {}", orientation.display_name(), direction.display_name());
    println!("Position:  {:.3} (effective {:.3})", surface.position(), frame.geometry.effective_position);
    println!(
        "Before:    {:.1} x {:.1} at ({:.1}, {:.1})",
        frame.geometry.before_clip.size.width,
        frame.geometry.before_clip.size.height,
        frame.geometry.before_clip.origin.x,
        frame.geometry.before_clip.origin.y,
    );
    println!(
        "Divider:   center ({:.1}, {:.1}), handle {}",
        frame.geometry.divider_center.x,
        frame.geometry.divider_center.y,
        match &frame.divider.handle {
            Some(handle) => format!("{:.0}pt", handle.diameter),
            None => "hidden".to_string(),
        }
    );
    println!(
        "Labels:    before {:.0}%, after {:.0}%",
        frame.before_label_opacity * 100.0,
        frame.after_label_opacity * 100.0
    );
    println!("A11y:      {} = {}", node.label, node.value);
    println!();

    let output = serde_json::json!({
        "configuration": config,
        "direction": direction,
        "position": surface.position(),
        "geometry": frame.geometry,
        "divider": frame.divider,
        "labels": {
            "before_opacity": frame.before_label_opacity,
            "after_opacity": frame.after_label_opacity,
        },
        "accessibility": node,
    });

    println!("JSON Output (for LLM/API use):");
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            report_error(&RevealError::serialization(e.to_string()));
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("tap"), Action::Tap);
        assert_eq!(parse_action(" T "), Action::Tap);
        assert_eq!(parse_action("drag"), Action::Drag);
        assert_eq!(parse_action(""), Action::Drag);
    }

    #[test]
    fn test_parse_orientation_falls_back_to_config() {
        assert_eq!(parse_orientation("v", Orientation::Horizontal), Orientation::Vertical);
        assert_eq!(parse_orientation("H", Orientation::Vertical), Orientation::Horizontal);
        assert_eq!(parse_orientation("", Orientation::Vertical), Orientation::Vertical);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("rtl"), LayoutDirection::RightToLeft);
        assert_eq!(parse_direction("ltr"), LayoutDirection::LeftToRight);
        assert_eq!(parse_direction("whatever"), LayoutDirection::LeftToRight);
    }

    #[test]
    fn test_load_config_defaults() {
        let (name, config) = load_config(None).unwrap();
        assert_eq!(name, "Defaults");
        assert_eq!(config, SliderConfiguration::default());
    }

    #[test]
    fn test_simulate_drag_ignores_start_sequence() {
        let config = SliderConfiguration::default().with_start_animation(true);
        let (surface, handled, settled) = simulate(
            &config,
            LayoutDirection::LeftToRight,
            Size::new(400.0, 300.0),
            Point::new(100.0, 150.0),
            Action::Drag,
        );
        assert!(handled);
        assert!(settled > Duration::from_secs(5));
        assert_eq!(surface.position(), 0.25);
        assert_eq!(surface.presented_position(settled), 0.25);
        assert!(!surface.is_animating(settled));
    }

    #[test]
    fn test_simulate_tap_settles_at_target() {
        let config = SliderConfiguration::default().with_start_animation(true);
        let (surface, handled, settled) = simulate(
            &config,
            LayoutDirection::RightToLeft,
            Size::new(400.0, 300.0),
            Point::new(100.0, 150.0),
            Action::Tap,
        );
        assert!(handled);
        // The divider lands under the pointer in RTL too
        assert_eq!(surface.position(), 0.25);
        assert!((surface.frame(Size::new(400.0, 300.0), settled).geometry.divider_center.x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let error = load_config(Some("/no/such/preset.rvl")).unwrap_err();
        assert_eq!(error.error_code(), "FILE_ERROR");
    }
}
