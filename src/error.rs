//! Error handling for the ensemble core
//!
//! Configuration problems are the only fatal conditions in this crate: they
//! are rejected up front with a descriptive error. Steady-state frame updates
//! are total and never fail, and placement exhaustion is reported through
//! shorter result sequences rather than errors.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for the ensemble core
#[derive(Debug, Clone, PartialEq)]
pub enum EnsembleError {
    /// A configuration field was rejected at validation time
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic fallback for unexpected errors
    Internal {
        message: String,
    },
}

impl fmt::Display for EnsembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnsembleError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            EnsembleError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl StdError for EnsembleError {}

/// Type alias for Results in the ensemble core
pub type EnsembleResult<T> = Result<T, EnsembleError>;

/// Shorthand constructor for config rejections
pub fn invalid_config(
    field: impl Into<String>,
    value: impl fmt::Display,
    reason: impl Into<String>,
) -> EnsembleError {
    EnsembleError::InvalidConfig {
        field: field.into(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = invalid_config("count", 0, "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid config: count = 0 (must be at least 1)"
        );
    }
}
