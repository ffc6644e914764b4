//! Unified error codes for the site backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Registration / form errors
//! - 2xxx: Content errors (events, team, gallery, magazine)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so the frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Registration ====================
    /// Name, email or reason missing
    RegistrationIncomplete = 1001,
    /// Email does not look like local@domain.tld
    InvalidEmail = 1002,
    /// Field exceeds its length limit
    FieldTooLong = 1003,
    /// Registration could not be stored
    RegistrationFailed = 1004,

    // ==================== 2xxx: Content ====================
    /// Magazine edition not found
    EditionNotFound = 2301,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Remote store rejected the query
    DatabaseError = 9002,
    /// Remote store could not be reached
    NetworkError = 9003,
    /// Remote store timed out
    TimeoutError = 9004,
    /// Store credentials missing or invalid
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",

            ErrorCode::RegistrationIncomplete => "Name, email, and reason are required fields",
            ErrorCode::InvalidEmail => "Invalid email format",
            ErrorCode::FieldTooLong => "Field is too long",
            ErrorCode::RegistrationFailed => "Failed to submit registration. Please try again.",

            ErrorCode::EditionNotFound => "Edition not found",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Missing store env variables",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Registration
            1001 => Ok(ErrorCode::RegistrationIncomplete),
            1002 => Ok(ErrorCode::InvalidEmail),
            1003 => Ok(ErrorCode::FieldTooLong),
            1004 => Ok(ErrorCode::RegistrationFailed),

            // Content
            2301 => Ok(ErrorCode::EditionNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
