//! API response bodies
//!
//! List endpoints return bare JSON arrays; errors use
//! [`ErrorBody`](crate::error::ErrorBody). The shapes below cover the
//! remaining endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a form submission
///
/// ```json
/// { "success": false, "error": "Invalid email format" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Body returned by `count=true` list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBody {
    pub count: u64,
}

/// Keepalive endpoint body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeepaliveStatus {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl KeepaliveStatus {
    pub fn alive(status: impl Into<String>, timestamp: DateTime<Utc>, data: Option<Value>) -> Self {
        Self {
            success: true,
            status: Some(status.into()),
            error: None,
            timestamp,
            data,
        }
    }

    pub fn failed(error: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: false,
            status: None,
            error: Some(error.into()),
            timestamp,
            data: None,
        }
    }
}
