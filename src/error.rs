//! Error types for the blogspark CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Pipeline stages never produce these errors for generation
//! failures; those degrade to sentinel strings instead (see the `gemini`
//! module). The variants here cover the surfaces around the pipeline:
//! argument handling, diagnostics, and state persistence.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for blogspark operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum SparkError {
    /// User provided invalid arguments, or a required credential is missing.
    #[error("{0}")]
    UserError(String),

    /// The generation API failed in an operator-facing command (doctor).
    #[error("API check failed: {0}")]
    ApiError(String),

    /// The persisted agent state could not be written.
    #[error("State error: {0}")]
    StateError(String),
}

impl SparkError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SparkError::UserError(_) => exit_codes::USER_ERROR,
            SparkError::ApiError(_) => exit_codes::API_FAILURE,
            SparkError::StateError(_) => exit_codes::STATE_FAILURE,
        }
    }
}

/// Result type alias for blogspark operations.
pub type Result<T> = std::result::Result<T, SparkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SparkError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn api_error_has_correct_exit_code() {
        let err = SparkError::ApiError("connection refused".to_string());
        assert_eq!(err.exit_code(), exit_codes::API_FAILURE);
    }

    #[test]
    fn state_error_has_correct_exit_code() {
        let err = SparkError::StateError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::STATE_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SparkError::UserError("request must not be empty".to_string());
        assert_eq!(err.to_string(), "request must not be empty");

        let err = SparkError::ApiError("no models available".to_string());
        assert_eq!(err.to_string(), "API check failed: no models available");

        let err = SparkError::StateError("permission denied".to_string());
        assert_eq!(err.to_string(), "State error: permission denied");
    }
}
