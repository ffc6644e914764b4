//! Shared types for the site backend
//!
//! Record schemas, error codes, response bodies and input validation used
//! by both the store client and the server.

pub mod error;
pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::Record;
pub use response::{CountBody, KeepaliveStatus, SubmitResult};
