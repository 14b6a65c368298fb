//! # Preset Files
//!
//! Slider configurations can be saved as named presets so hosts can ship or
//! share a look without code changes.
//!
//! ## File Format
//!
//! Presets are `.rvl` files containing JSON:
//!
//! ```text
//! {
//!   "version": "0.1.0",
//!   "name": "Photo compare",
//!   "saved_at": "2026-01-01T12:00:00Z",
//!   "config": { ...SliderConfiguration, every field optional... }
//! }
//! ```
//!
//! Saves are atomic: the JSON goes to a `.tmp` sibling, is synced, then
//! renamed over the destination.
//!
//! ## Example
//!
//! ```rust,no_run
//! use reveal_core::config::SliderConfiguration;
//! use reveal_core::preset::{load_preset, save_preset, Preset};
//! use std::path::Path;
//!
//! let preset = Preset::new("Vertical", SliderConfiguration::default());
//! save_preset(&preset, Path::new("vertical.rvl"))?;
//!
//! let loaded = load_preset(Path::new("vertical.rvl"))?;
//! assert_eq!(loaded.name, "Vertical");
//! # Ok::<(), reveal_core::errors::RevealError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SliderConfiguration;
use crate::errors::{RevealError, RevealResult};

/// Current schema version for .rvl files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// File extension used by presets
pub const PRESET_EXTENSION: &str = "rvl";

/// A named, timestamped slider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub version: String,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub config: SliderConfiguration,
}

impl Preset {
    pub fn new(name: impl Into<String>, config: SliderConfiguration) -> Self {
        Preset {
            version: SCHEMA_VERSION.to_string(),
            name: name.into(),
            saved_at: Utc::now(),
            config,
        }
    }
}

/// Save a preset with atomic write semantics.
///
/// A preset must carry a non-blank name; anything else is rejected with
/// `InvalidInput` before the filesystem is touched.
///
/// The save process:
/// 1. Serialize the preset to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the destination
pub fn save_preset(preset: &Preset, path: &Path) -> RevealResult<()> {
    if preset.name.trim().is_empty() {
        return Err(RevealError::invalid_input("name", &preset.name, "Preset name must not be blank"));
    }

    let json = serde_json::to_string_pretty(preset).map_err(|e| RevealError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension(format!("{}.tmp", PRESET_EXTENSION));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        RevealError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        RevealError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        RevealError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        RevealError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("saved preset '{}' to {}", preset.name, path.display());
    Ok(())
}

/// Load a preset and normalize its configuration.
///
/// # Returns
///
/// * `Ok(Preset)` - Successfully loaded preset
/// * `Err(RevealError::VersionMismatch)` - File version is incompatible
/// * `Err(RevealError::SerializationError)` - Invalid JSON
/// * `Err(RevealError::FileError)` - I/O error
pub fn load_preset(path: &Path) -> RevealResult<Preset> {
    let mut file = File::open(path)
        .map_err(|e| RevealError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| RevealError::file_error("read", path.display().to_string(), e.to_string()))?;

    let mut preset: Preset = serde_json::from_str(&contents)
        .map_err(|e| RevealError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&preset.version)?;
    preset.config = preset.config.normalized();

    log::info!("loaded preset '{}' from {}", preset.name, path.display());
    Ok(preset)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> RevealResult<()> {
    let mismatch = || RevealError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    // Major version must match
    if file_major != current_major {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor means the file uses fields we don't know
    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_preset_path(name: &str) -> PathBuf {
        temp_dir().join(format!("reveal_test_{}.{}", name, PRESET_EXTENSION))
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_preset_path("save_load");
        let config = SliderConfiguration::default()
            .with_orientation(Orientation::Vertical)
            .with_labels("Raw", "Edited");
        save_preset(&Preset::new("Vertical edit", config.clone()), &path).unwrap();

        let loaded = load_preset(&path).unwrap();
        assert_eq!(loaded.name, "Vertical edit");
        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.config, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_preset_path("atomic");
        let tmp_path = path.with_extension("rvl.tmp");

        save_preset(&Preset::new("Atomic", SliderConfiguration::default()), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_normalizes_config() {
        let path = temp_preset_path("normalize");
        let json = r#"{
            "version": "0.1.0",
            "name": "Hand edited",
            "saved_at": "2026-01-01T12:00:00Z",
            "config": { "initial_position": -4.0, "no_drag": true }
        }"#;
        fs::write(&path, json).unwrap();

        let loaded = load_preset(&path).unwrap();
        assert_eq!(loaded.config.initial_position, 0.0);
        assert!(loaded.config.no_drag);
        assert_eq!(loaded.config.after_label, "After");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_blank_name() {
        let path = temp_preset_path("blank_name");
        let error = save_preset(&Preset::new("   ", SliderConfiguration::default()), &path).unwrap_err();

        assert_eq!(error.error_code(), "INVALID_INPUT");
        assert!(!path.exists());
        assert!(!path.with_extension("rvl.tmp").exists());
    }

    #[test]
    fn test_load_missing_file() {
        let error = load_preset(Path::new("/definitely/not/here.rvl")).unwrap_err();
        assert_eq!(error.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_preset_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let error = load_preset(&path).unwrap_err();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
