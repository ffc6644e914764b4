//! Store Client - table query client for the hosted database
//!
//! Provides a declarative [`Query`] model and the [`TableStore`] capability
//! the site talks to, with a REST implementation for the hosted backend and
//! an in-memory implementation for tests and local runs.

pub mod config;
pub mod error;
pub mod memory;
pub mod query;
pub mod rest;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use query::{Direction, Filter, FilterOp, Nulls, OrderBy, OrderKey, Query};
pub use rest::RestStore;
pub use store::{TableStore, TableStoreExt, UnconfiguredStore};

use std::sync::Arc;

/// Build the store for the given configuration.
///
/// Missing configuration is not an error here: the returned store fails every
/// call with [`StoreError::NotConfigured`] so the server can still start and
/// report the problem per request.
pub fn connect(config: Option<&StoreConfig>) -> StoreResult<Arc<dyn TableStore>> {
    match config {
        Some(config) => Ok(Arc::new(RestStore::new(config)?)),
        None => {
            tracing::warn!("Store credentials missing, every store call will fail");
            Ok(Arc::new(UnconfiguredStore))
        }
    }
}
