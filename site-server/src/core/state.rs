//! Shared application state

use std::sync::Arc;

use store_client::TableStore;

use crate::core::tasks::run_keepalive;
use crate::core::{BackgroundTasks, Config, Result, TaskKind};

/// State handed to every handler
///
/// Cheap to clone: the config and the store are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn TableStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn TableStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Connect to the configured store
    ///
    /// Missing credentials still produce a state; store calls then fail
    /// with a configuration error.
    pub fn initialize(config: &Config) -> Result<Self> {
        let store = store_client::connect(config.store.as_ref())?;
        Ok(Self::new(config.clone(), store))
    }

    pub fn store(&self) -> &dyn TableStore {
        self.store.as_ref()
    }

    /// Register the background tasks this state needs
    pub fn start_background_tasks(&self, tasks: &mut BackgroundTasks) {
        let period = self.config.keepalive_interval_secs;
        if period == 0 {
            tracing::info!("Scheduled keepalive disabled");
            return;
        }

        let shutdown = tasks.shutdown_token();
        tasks.spawn(
            "keepalive",
            TaskKind::Periodic,
            run_keepalive(
                self.store.clone(),
                self.config.keepalive_mode,
                std::time::Duration::from_secs(period),
                shutdown,
            ),
        );
    }
}
