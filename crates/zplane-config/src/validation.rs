//! Settings validation.
//!
//! ```rust
//! use zplane_config::{Settings, validate_settings};
//!
//! validate_settings(&Settings::default()).expect("defaults are valid");
//! ```

use thiserror::Error;

use crate::settings::Settings;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A scalar setting is out of range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the setting.
        field: String,
        /// Description of the problem.
        reason: String,
    },

    /// A `[min, max]` range is empty or not finite.
    #[error("invalid range for '{field}': [{min}, {max}]")]
    InvalidRange {
        /// Name of the setting.
        field: String,
        /// Lower bound as written.
        min: f64,
        /// Upper bound as written.
        max: f64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate every field of a settings file, collecting all problems.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if settings.sample_count == 0 {
        errors.push(invalid("sample_count", "must be at least 1"));
    }
    if !(settings.sample_rate_hz.is_finite() && settings.sample_rate_hz > 0.0) {
        errors.push(invalid("sample_rate_hz", "must be positive and finite"));
    }

    let view = &settings.view;
    if !(view.min_frequency_hz.is_finite() && view.min_frequency_hz >= 0.0) {
        errors.push(invalid("view.min_frequency_hz", "must be non-negative and finite"));
    }
    if !(view.zplane_extent.is_finite() && view.zplane_extent > 0.0) {
        errors.push(invalid("view.zplane_extent", "must be positive and finite"));
    }
    for (field, range) in [
        ("view.magnitude_db", view.magnitude_db),
        ("view.phase_rad", view.phase_rad),
        ("view.group_delay", view.group_delay),
    ] {
        if let Err(e) = check_range(field, range) {
            errors.push(e);
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn check_range(field: &str, [min, max]: [f64; 2]) -> ValidationResult<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ValidationError::InvalidRange {
            field: field.to_string(),
            min,
            max,
        })
    }
}

fn invalid(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
