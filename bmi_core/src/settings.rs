//! # Session Settings
//!
//! Defaults for an interactive session: which unit system to start in and
//! the value each entry field starts with. Settings are stored as versioned
//! JSON and are never written back; nothing about a session is persisted.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::settings::Settings;
//! use bmi_core::units::UnitSystem;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.unit_system, UnitSystem::Metric);
//! assert_eq!(settings.entry_for(UnitSystem::Imperial).height, 67.0);
//! ```
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "unit_system": "Metric",
//!   "metric": { "height": 170.0, "weight": 70.0 },
//!   "imperial": { "height": 67.0, "weight": 154.0 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::BmiInput;
use crate::errors::{BmiError, BmiResult};
use crate::units::UnitSystem;

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Starting values for the two entry fields of one unit system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultEntry {
    pub height: f64,
    pub weight: f64,
}

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version (for compatibility checks)
    pub version: String,

    /// Unit system selected at start-up
    #[serde(default)]
    pub unit_system: UnitSystem,

    /// Starting entries in centimeters / kilograms
    #[serde(default = "default_metric")]
    pub metric: DefaultEntry,

    /// Starting entries in inches / pounds
    #[serde(default = "default_imperial")]
    pub imperial: DefaultEntry,
}

fn default_metric() -> DefaultEntry {
    DefaultEntry {
        height: 170.0,
        weight: 70.0,
    }
}

fn default_imperial() -> DefaultEntry {
    DefaultEntry {
        height: 67.0,
        weight: 154.0,
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SCHEMA_VERSION.to_string(),
            unit_system: UnitSystem::Metric,
            metric: default_metric(),
            imperial: default_imperial(),
        }
    }
}

impl Settings {
    /// Default entry for a unit system
    pub fn entry_for(&self, system: UnitSystem) -> DefaultEntry {
        match system {
            UnitSystem::Metric => self.metric,
            UnitSystem::Imperial => self.imperial,
        }
    }

    /// Default entry for a unit system as a pipeline input
    pub fn input_for(&self, system: UnitSystem) -> BmiInput {
        let entry = self.entry_for(system);
        BmiInput::new(system, entry.height, entry.weight)
    }

    /// Check that both default entries fall inside their entry bounds
    pub fn validate(&self) -> BmiResult<()> {
        for system in UnitSystem::ALL {
            self.input_for(system).validate()?;
        }
        Ok(())
    }
}

/// Load settings from a JSON file.
///
/// The file must carry a compatible schema version and its default entries
/// must be within the entry bounds.
pub fn load_settings(path: &Path) -> BmiResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|e| {
        BmiError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings = parse_settings(&contents).map_err(|e| match e {
        BmiError::SerializationError { reason } => BmiError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })?;

    tracing::info!(path = %path.display(), unit_system = ?settings.unit_system, "loaded settings");
    Ok(settings)
}

/// Parse and validate settings from a JSON string
pub fn parse_settings(json: &str) -> BmiResult<Settings> {
    let settings: Settings = serde_json::from_str(json).map_err(|e| BmiError::SerializationError {
        reason: e.to_string(),
    })?;

    validate_version(&settings.version)?;
    settings.validate()?;

    Ok(settings)
}

/// Leading `major.minor` of a version string
fn major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(|p| p.parse::<u32>().ok());
    let major = parts.next()??;
    let minor = parts.next().flatten().unwrap_or(0);
    Some((major, minor))
}

/// Check a settings file's `version` against [`SCHEMA_VERSION`].
///
/// Files from an older minor release load as-is; missing fields take their
/// defaults. While the schema is 0.x, a file written for a later minor
/// release is refused.
fn validate_version(file_version: &str) -> BmiResult<()> {
    let mismatch = || BmiError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = major_minor(file_version).ok_or_else(mismatch)?;
    let (major, minor) = major_minor(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != major || (major == 0 && file_minor > minor) {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.input_for(UnitSystem::Metric), BmiInput::metric(170.0, 70.0));
    }

    #[test]
    fn test_parse_partial_file() {
        let settings = parse_settings(r#"{ "version": "0.1.0", "unit_system": "Imperial" }"#).unwrap();
        assert_eq!(settings.unit_system, UnitSystem::Imperial);
        assert_eq!(settings.imperial, default_imperial());
        assert_eq!(settings.metric, default_metric());
    }

    #[test]
    fn test_parse_custom_entries() {
        let json = r#"{
            "version": "0.1.0",
            "metric": { "height": 182.5, "weight": 81.0 }
        }"#;
        let settings = parse_settings(json).unwrap();
        assert_eq!(settings.entry_for(UnitSystem::Metric).height, 182.5);
    }

    #[test]
    fn test_out_of_bounds_default_rejected() {
        let json = r#"{ "version": "0.1.0", "metric": { "height": 400.0, "weight": 70.0 } }"#;
        let err = parse_settings(json).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_version_checks() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(matches!(validate_version("0.2.0"), Err(BmiError::VersionMismatch { .. })));
        assert!(matches!(validate_version("1.0.0"), Err(BmiError::VersionMismatch { .. })));
        assert!(matches!(validate_version("garbage"), Err(BmiError::VersionMismatch { .. })));
        assert!(validate_version("0").is_ok());
        assert!(matches!(validate_version(""), Err(BmiError::VersionMismatch { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_settings("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(Path::new("/nonexistent/bmi-settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("bmi-settings-{}.json", std::process::id()));
        let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
        fs::write(&path, json).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, Settings::default());

        let _ = fs::remove_file(&path);
    }
}
