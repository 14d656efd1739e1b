//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Hero search validation failure, shown inline next to the form
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Specialty is required.")]
    SpecialtyRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("API base URL is empty".to_string());
        assert_eq!(error.to_string(), "Config error: API base URL is empty");
    }

    #[test]
    fn test_error_display_fetch() {
        let error = Error::Fetch("HTTP 503".to_string());
        assert_eq!(error.to_string(), "Fetch error: HTTP 503");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_validation_error_message() {
        assert_eq!(ValidationError::SpecialtyRequired.to_string(), "Specialty is required.");
    }
}
