//! Error types for the pose timer
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the pose timer application
#[derive(Debug, Error)]
pub enum PoseTimerError {
    /// The practice plan file is missing or malformed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Plan error: {0}")]
    PlanError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for pose timer operations
pub type Result<T> = std::result::Result<T, PoseTimerError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `PoseTimerError` and returns a message suitable
/// for displaying to end users in error dialogs.
pub fn get_user_friendly_error(error: &PoseTimerError) -> String {
    match error {
        PoseTimerError::PlanError(e) => {
            format!(
                "Could not load the practice plan:\n\n{e}\n\n\
                 Make sure plan.json exists next to the executable and every\n\
                 pose has a \"Name\" and a \"Duration\"."
            )
        }
        PoseTimerError::ConfigError(_) => "Failed to load configuration.\n\n\
             The bundled default configuration will be used instead."
            .to_string(),
        PoseTimerError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        PoseTimerError::JsonError(e) => {
            format!("A JSON file could not be parsed:\n\n{e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_error_display() {
        let error = PoseTimerError::PlanError(StringError::new("missing field `Duration`"));
        assert_eq!(error.to_string(), "Plan error: missing field `Duration`");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = PoseTimerError::PlanError(StringError::new("missing field `Name`"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("practice plan"));
        assert!(message.contains("missing field `Name`"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PoseTimerError = io_error.into();
        assert!(matches!(error, PoseTimerError::IoError(_)));
    }

    #[test]
    fn test_config_error_user_friendly() {
        let error = PoseTimerError::ConfigError(StringError::new("bad json"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("configuration"));
    }
}
