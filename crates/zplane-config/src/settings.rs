//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use zplane_analysis::ViewLimits;

use crate::error::ConfigError;
use crate::validation::{ValidationResult, validate_settings};

/// Output format for exported analysis results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full bundle as JSON
    #[default]
    Json,
    /// One row per frequency point
    Csv,
    /// REW-compatible frequency response data
    Frd,
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "frd" => Ok(ExportFormat::Frd),
            _ => Err(ConfigError::UnknownExportFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Frd => "frd",
        })
    }
}

/// Export section of the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Default export format.
    pub format: ExportFormat,
}

/// Analyzer settings.
///
/// Every field has a default, so a partial (or empty) file is valid.
///
/// # TOML Format
///
/// ```toml
/// sample_count = 512
/// sample_rate_hz = 48000.0
///
/// [view]
/// min_frequency_hz = 10.0
/// magnitude_db = [-40.0, 10.0]
/// phase_rad = [-3.141592653589793, 3.141592653589793]
/// group_delay = [-40.0, 40.0]
/// zplane_extent = 1.5
///
/// [export]
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frequency points used when a request has no header line.
    pub sample_count: usize,

    /// Sample rate used when a request has no header line.
    pub sample_rate_hz: f64,

    /// Axis limits for derived views.
    pub view: ViewLimits,

    /// Export defaults.
    pub export: ExportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_count: 512,
            sample_rate_hz: 48000.0,
            view: ViewLimits::default(),
            export: ExportSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load the user settings file if it exists, otherwise the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = crate::paths::settings_file();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field, collecting all problems.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_settings(self)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;

        Ok(())
    }

    /// Fallback `(sample_count, sample_rate_hz)` for header-less requests.
    pub fn grid_defaults(&self) -> (usize, f64) {
        (self.sample_count, self.sample_rate_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.grid_defaults(), (512, 48000.0));
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml(
            r#"
            sample_rate_hz = 44100.0

            [view]
            magnitude_db = [-80.0, 6.0]

            [export]
            format = "csv"
            "#,
        )
        .unwrap();

        assert_eq!(settings.sample_count, 512);
        assert_eq!(settings.sample_rate_hz, 44100.0);
        assert_eq!(settings.view.magnitude_db, [-80.0, 6.0]);
        assert_eq!(settings.view.min_frequency_hz, 10.0);
        assert_eq!(settings.export.format, ExportFormat::Csv);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let err = Settings::from_toml("sample_count = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_method() {
        assert!(Settings::default().validate().is_ok());
        let settings = Settings {
            sample_rate_hz: f64::NAN,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = Settings::from_toml("sample_count = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            sample_count: 2048,
            export: ExportSettings {
                format: ExportFormat::Frd,
            },
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/zplane/settings.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("frd".parse::<ExportFormat>().unwrap(), ExportFormat::Frd);
        assert!(matches!(
            "png".parse::<ExportFormat>(),
            Err(ConfigError::UnknownExportFormat(ref name)) if name == "png"
        ));
        assert_eq!(ExportFormat::Csv.to_string(), "csv");
    }
}
