//! Preset file dialogs for native builds.
//!
//! Wraps the core's preset I/O behind rfd's async dialogs so the app can run
//! them as tasks. Only compiled for native targets (not WASM).

use std::path::PathBuf;

use reveal_core::preset::{load_preset, save_preset, Preset, PRESET_EXTENSION};
use reveal_core::RevealError;

/// Outcome of a preset dialog
#[derive(Debug, Clone)]
pub enum PresetOutcome {
    Loaded(Preset),
    Saved { name: String, path: PathBuf },
    /// The user closed the dialog
    Cancelled,
    Failed(RevealError),
}

/// Ask for a preset file and load it
pub async fn open_preset() -> PresetOutcome {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Open Preset")
        .add_filter("Reveal preset", &[PRESET_EXTENSION])
        .pick_file()
        .await
    else {
        return PresetOutcome::Cancelled;
    };

    match load_preset(handle.path()) {
        Ok(preset) => PresetOutcome::Loaded(preset),
        Err(e) => PresetOutcome::Failed(e),
    }
}

/// Ask for a destination and save `preset` there
pub async fn save_preset_as(preset: Preset) -> PresetOutcome {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Save Preset")
        .add_filter("Reveal preset", &[PRESET_EXTENSION])
        .set_file_name(format!("{}.{}", preset.name, PRESET_EXTENSION))
        .save_file()
        .await
    else {
        return PresetOutcome::Cancelled;
    };

    let path = handle.path().to_path_buf();
    match save_preset(&preset, &path) {
        Ok(()) => PresetOutcome::Saved {
            name: preset.name,
            path,
        },
        Err(e) => PresetOutcome::Failed(e),
    }
}
