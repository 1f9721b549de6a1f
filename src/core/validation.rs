//! Account form validation
//!
//! Pure checks mirroring the login/signup forms: they run before any
//! other action and can never corrupt state. Each empty required field
//! contributes exactly one "required" error.

use std::sync::LazyLock;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether a string looks like an email address
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a login form. Returns an empty list when the form is valid.
///
/// Empty fields yield exactly one "required" error each; format checks
/// only apply to non-empty fields.
#[must_use]
pub fn validate_login_form(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if email.trim().is_empty() {
        errors.push("Email is required.".to_string());
    } else if !is_valid_email(email) {
        errors.push("Please enter a valid email address.".to_string());
    }

    if password.is_empty() {
        errors.push("Password is required.".to_string());
    } else if password.len() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters."
        ));
    }

    errors
}

/// Validate a signup form: the login checks plus password confirmation.
#[must_use]
pub fn validate_signup_form(email: &str, password: &str, confirm: &str) -> Vec<String> {
    let mut errors = validate_login_form(email, password);

    if confirm.is_empty() {
        errors.push("Password confirmation is required.".to_string());
    } else if password != confirm {
        errors.push("Passwords do not match.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_has_no_errors() {
        assert!(validate_login_form("student@example.com", "hunter2hunter2").is_empty());
        assert!(validate_login_form("a@b.co", "12345678").is_empty());
    }

    #[test]
    fn test_empty_fields_yield_one_required_error_each() {
        let errors = validate_login_form("", "longenoughpassword");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("required"));

        let errors = validate_login_form("student@example.com", "");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("required"));

        let errors = validate_login_form("", "");
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.contains("required")));
    }

    #[test]
    fn test_malformed_email() {
        let errors = validate_login_form("not-an-email", "longenoughpassword");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("valid email"));

        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(is_valid_email("first.last@example.co.uk"));
    }

    #[test]
    fn test_short_password() {
        let errors = validate_login_form("student@example.com", "short");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at least"));
    }

    #[test]
    fn test_signup_password_mismatch() {
        let errors =
            validate_signup_form("student@example.com", "longenoughpassword", "different!");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "Passwords do not match.");

        assert!(
            validate_signup_form("student@example.com", "longenoughpassword", "longenoughpassword")
                .is_empty()
        );
    }

    #[test]
    fn test_signup_empty_confirmation() {
        let errors = validate_signup_form("student@example.com", "longenoughpassword", "");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("required"));
    }
}
