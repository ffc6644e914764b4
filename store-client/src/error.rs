//! Store error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Store error type
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Row did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration present but unusable
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Store URL or access key missing
    #[error("Missing store env variables")]
    NotConfigured,

    /// Store unavailable
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether the failure was a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, StoreError::Http(e) if e.is_timeout())
    }

    /// Error code used when this failure reaches an HTTP client
    pub fn error_code(&self) -> ErrorCode {
        match self {
            StoreError::NotConfigured | StoreError::InvalidConfig(_) => ErrorCode::ConfigError,
            StoreError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            StoreError::Http(_) | StoreError::Unavailable(_) => ErrorCode::NetworkError,
            StoreError::Api { .. } | StoreError::Decode(_) | StoreError::InvalidResponse(_) => {
                ErrorCode::DatabaseError
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = err.error_code();
        let app = AppError::with_message(code, err.to_string());
        match err {
            StoreError::Api {
                status,
                code: Some(store_code),
                ..
            } => app
                .with_detail("status", status)
                .with_detail("store_code", store_code),
            StoreError::Api { status, .. } => app.with_detail("status", status),
            _ => app,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
