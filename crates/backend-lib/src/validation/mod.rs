// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Input validation for credentials.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321 SMTP limit
pub const MAX_PASSWORD_LENGTH: usize = 128;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Possible validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check the email precondition of signup and signin: non-empty and bounded.
pub fn validate_email(email: &str) -> ValidationResult<&str> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "Email cannot be empty".to_string(),
        ));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidEmail(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} bytes"
        )));
    }
    Ok(email)
}

/// Stricter email check applied at the caller boundary before a request
/// reaches the credential manager.
pub fn validate_email_format(email: &str) -> ValidationResult<&str> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail(
            "Email format is invalid".to_string(),
        ));
    }
    Ok(email)
}

/// Check the password precondition: non-empty and bounded.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::InvalidPassword(
            "Password cannot be empty".to_string(),
        ));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidPassword(format!(
            "Password exceeds maximum length of {MAX_PASSWORD_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Validate both credentials of a signup request
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult<()> {
    validate_email(email)?;
    validate_password(password)
}

/// Signin only requires non-empty values; length caps apply when a user is created.
pub fn validate_signin_credentials(email: &str, password: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "Email cannot be empty".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(ValidationError::InvalidPassword(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(())
}
