//! Configuration for zplane filter analysis.
//!
//! Holds the defaults the analyzer front end needs but the analysis core
//! never reads on its own: the fallback grid for requests without a header
//! line, axis limits for the derived views, and the export format.
//!
//! # Example
//!
//! ```rust,no_run
//! use zplane_config::{Settings, paths};
//!
//! // User settings, or the defaults when no file exists
//! let settings = Settings::load_or_default().unwrap();
//!
//! // Write a fresh settings file
//! Settings::default().save(paths::settings_file()).unwrap();
//! ```

mod error;
mod settings;

/// Platform-specific configuration paths.
pub mod paths;

/// Settings validation.
pub mod validation;

pub use error::ConfigError;
pub use settings::{ExportFormat, ExportSettings, Settings};
pub use validation::{ValidationError, ValidationResult, validate_settings};
pub use paths::{settings_file, user_config_dir};
