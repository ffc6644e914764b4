use store_client::StoreError;
use thiserror::Error;

/// Startup and runtime errors of the server process
///
/// Request-level failures use [`shared::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store setup failed: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
