//! Integration tests for form validation

use degree_planner::core::validation::{
    validate_login_form, validate_signup_form, MIN_PASSWORD_LENGTH,
};

#[test]
fn test_valid_credentials_produce_no_errors() {
    let long_enough = "p".repeat(MIN_PASSWORD_LENGTH);
    let valid_pairs = [
        ("student@example.com", "longenough"),
        ("a.b@uni.ca", "12345678"),
        ("x@y.io", long_enough.as_str()),
    ];

    for (email, password) in valid_pairs {
        assert!(
            validate_login_form(email, password).is_empty(),
            "expected no errors for {email}"
        );
    }
}

#[test]
fn test_each_empty_field_yields_exactly_one_required_error() {
    for (email, password, expected) in [("", "longenough", 1), ("a@b.co", "", 1), ("", "", 2)] {
        let errors = validate_login_form(email, password);
        assert_eq!(errors.len(), expected);
        assert!(errors.iter().all(|e| e.contains("required")));
    }
}

#[test]
fn test_signup_adds_confirmation_check() {
    let errors = validate_signup_form("a@b.co", "longenough", "different");
    assert_eq!(errors, vec!["Passwords do not match.".to_string()]);

    assert!(validate_signup_form("a@b.co", "longenough", "longenough").is_empty());
}
