//! Error display tests

use mediassist::error::MediAssistError;
use mediassist_common::{validate_search, ValidationError};

/// Validation error surfaces the inline form message
#[test]
fn test_validation_message() {
    let err: MediAssistError = validate_search("", "Pune").unwrap_err().into();
    assert_eq!(err.to_string(), "Specialty is required.");
    assert!(matches!(err, MediAssistError::Validation(ValidationError::SpecialtyRequired)));
}

/// HTTP status errors name the code
#[test]
fn test_status_message() {
    assert_eq!(MediAssistError::Status(503).to_string(), "API error: HTTP 503");
}

/// Decode failures from the shared library pass through unchanged
#[test]
fn test_common_error_is_transparent() {
    let common = mediassist_common::decode_doctors("{}").unwrap_err();
    let expected = common.to_string();
    let err: MediAssistError = common.into();
    assert_eq!(err.to_string(), expected);
}

/// Non-results routes passed to `open` are named in the message
#[test]
fn test_route_message() {
    let err = MediAssistError::Route("/about".into());
    assert_eq!(err.to_string(), "Not a results route: /about");
}
