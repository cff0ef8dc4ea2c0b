//! Error types for filter analysis.

use thiserror::Error;

/// Errors raised for structurally invalid analysis input.
///
/// Numerically degenerate but well-formed input (poles on the unit circle,
/// zeros of the response) is never an error: those cases surface as
/// non-finite values or `NaN` sentinels inside the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A parameter is malformed or out of range.
    #[error("invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        param: &'static str,
        /// Description of why the parameter is invalid.
        reason: String,
    },

    /// A coefficient sequence is empty or carries no information.
    #[error("degenerate input '{what}': {reason}")]
    DegenerateInput {
        /// Which input was degenerate.
        what: &'static str,
        /// Description of the degeneracy.
        reason: String,
    },
}

impl AnalysisError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(param: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }

    /// Create a degenerate input error.
    pub fn degenerate_input(what: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::DegenerateInput {
            what,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
