//! Core module - configuration, state, errors and server lifecycle
//!
//! - [`Config`] - server configuration
//! - [`AppState`] - state shared by handlers
//! - [`Server`] - HTTP server
//! - [`ServerError`] - process-level errors
//! - [`BackgroundTasks`] - scheduled and long-lived tasks

pub mod config;
pub mod error;
pub mod server;
pub mod state;
pub mod tasks;

pub use config::{Config, LogSettings};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::AppState;
pub use tasks::{BackgroundTasks, TaskKind};
