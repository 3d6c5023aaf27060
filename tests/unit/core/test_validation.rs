// Unit tests for input validation

use mynotes_api::core::errors::NotesError;
use mynotes_api::core::validation::{is_valid_email, ValidationErrors};

#[test]
fn test_email_length_limits() {
    let long_local = format!("{}@x.com", "a".repeat(65));
    assert!(!is_valid_email(&long_local));

    let long_domain = format!("a@{}.com", "b".repeat(260));
    assert!(!is_valid_email(&long_domain));

    let max_local = format!("{}@x.com", "a".repeat(64));
    assert!(is_valid_email(&max_local));
}

#[test]
fn test_email_trailing_dot_in_local_part() {
    assert!(!is_valid_email("a.@x.com"));
}

#[test]
fn test_check_chains_and_keeps_order() {
    let mut errors = ValidationErrors::new();
    errors
        .check(false, "name", "short name")
        .check(true, "email", "bad email")
        .check(false, "password", "short password");

    let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "password"]);
}

#[test]
fn test_validation_error_display_names_fields() {
    let mut errors = ValidationErrors::new();
    errors.check(false, "title", "too short");

    let err = errors.into_result().unwrap_err();
    assert!(matches!(err, NotesError::Validation(_)));
    assert_eq!(err.to_string(), "Validation failed: title: too short");
    assert_eq!(err.user_message(), "Validation failed");
}
