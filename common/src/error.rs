//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid form input: {0}")]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Contact form field violations.
///
/// These mirror the browser's native `required` and `type="email"` checks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("project description is required")]
    MissingMessage,
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_validation() {
        let error: Error = ValidationError::InvalidEmail.into();
        assert_eq!(format!("{}", error), "Invalid form input: email address is not valid");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::SubmissionInFlight;
        assert_eq!(format!("{:?}", error), "SubmissionInFlight");
        assert_eq!(format!("{}", error), "A submission is already in progress");
    }
}
