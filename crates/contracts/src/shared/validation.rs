//! Client-side form validation shared by all write forms.
//!
//! Validation runs before any network call; a failure blocks submission and
//! is shown next to the form.

use thiserror::Error;

/// A single failed form rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Form field the rule applies to
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Non-blank text
pub fn require_text(field: &'static str, label: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{} is required", label)));
    }
    Ok(())
}

/// Basic e-mail shape: one `@`, non-empty local part, dotted domain,
/// no whitespace
pub fn require_email(field: &'static str, value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::new(field, "Email is required"));
    }
    if !is_email_like(value) {
        return Err(ValidationError::new(field, "Email address is not valid"));
    }
    Ok(())
}

/// Optional phone: digits plus `+ - ( ) space`, at least 7 digits
pub fn optional_phone(field: &'static str, value: &str) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !allowed || digits < 7 {
        return Err(ValidationError::new(field, "Phone number is not valid"));
    }
    Ok(())
}

/// Finite, non-negative number
pub fn require_non_negative(field: &'static str, label: &str, value: f64) -> ValidationResult {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("{} cannot be negative", label),
        ));
    }
    Ok(())
}

pub fn is_email_like(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Name", "Acme").is_ok());
        let err = require_text("name", "Name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_email() {
        assert!(require_email("email", "dealer@example.com").is_ok());
        assert!(require_email("email", "").is_err());
        assert!(require_email("email", "no-at-sign").is_err());
        assert!(require_email("email", "a@b@c.com").is_err());
        assert!(require_email("email", "a@localhost").is_err());
        assert!(require_email("email", "a b@example.com").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(optional_phone("phone", "").is_ok());
        assert!(optional_phone("phone", "+1 (555) 123-4567").is_ok());
        assert!(optional_phone("phone", "12-34").is_err());
        assert!(optional_phone("phone", "call me").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(require_non_negative("price", "Price", 0.0).is_ok());
        assert!(require_non_negative("price", "Price", -0.01).is_err());
        assert!(require_non_negative("price", "Price", f64::NAN).is_err());
    }
}
