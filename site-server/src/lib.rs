//! Site server - backend for the Tamil cultural society website
//!
//! # Modules
//!
//! - **core**: configuration, shared state, background tasks, server
//! - **db**: one query function per list the site shows
//! - **view**: headless view state for each section
//! - **api**: thin HTTP endpoints over the data access layer
//! - **utils**: logging setup
//!
//! ```text
//! site-server/src/
//! ├── core/    # Config, AppState, Server, BackgroundTasks
//! ├── db/      # events, team, gallery, achievements, kanaiyazhi, registrations, keepalive
//! ├── view/    # fetch sequencing, placeholders, lightbox, carousel, team years
//! ├── api/     # axum routers and handlers
//! └── utils/   # logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;
pub mod view;

pub use crate::core::{AppState, Config, LogSettings, Server};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
///
/// A missing `.env` file is not an error.
pub fn setup_environment() -> Config {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let logging = LogSettings::from_env();
    init_logger_with_file(Some(&logging.level), logging.json, logging.dir.as_deref());
    Config::from_env()
}
