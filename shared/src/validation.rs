//! Input validation helpers
//!
//! Text length limits and the registration form checks. Every check runs
//! before anything is sent to the store.

use crate::error::{AppError, ErrorCode};
use crate::models::RegistrationInput;

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 32;

/// Reason / year of study
pub const MAX_REASON_LEN: usize = 500;

/// Free-form message
pub const MAX_MESSAGE_LEN: usize = 2000;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    validate_length(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_length(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_length(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::FieldTooLong,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Basic `local@domain.tld` shape check.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace, exactly one `@`,
/// non-empty local part, and a domain with a dot that has at least one
/// character on either side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// ── Registration form ───────────────────────────────────────────────

/// Validate a registration before it is written.
pub fn validate_registration(input: &RegistrationInput) -> Result<(), AppError> {
    let missing: Vec<&str> = [
        ("name", &input.name),
        ("email", &input.email),
        ("reason", &input.reason),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::new(ErrorCode::RegistrationIncomplete)
            .with_detail("missing", missing));
    }

    if !is_valid_email(input.email.trim()) {
        return Err(AppError::new(ErrorCode::InvalidEmail).with_detail("field", "email"));
    }

    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&input.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&input.reason, "reason", MAX_REASON_LEN)?;
    validate_optional_text(&input.phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_text(&input.message, "message", MAX_MESSAGE_LEN)?;
    Ok(())
}
