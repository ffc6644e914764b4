//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound | Self::EditionNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error (every store failure surfaces as 500)
            Self::NetworkError
            | Self::TimeoutError
            | Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::RegistrationFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and form errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::RegistrationIncomplete
            | Self::InvalidEmail
            | Self::FieldTooLong => StatusCode::BAD_REQUEST,
        }
    }
}
