//! Data models
//!
//! Row types for the remote tables, shared by the data-access layer, the
//! view models and the HTTP handlers. Field names match the table columns.

pub mod achievement;
pub mod event;
pub mod gallery_image;
pub mod kanaiyazhi;
pub mod keepalive;
pub mod registration;
pub mod team_member;

// Re-exports
pub use achievement::*;
pub use event::*;
pub use gallery_image::*;
pub use kanaiyazhi::*;
pub use keepalive::*;
pub use registration::*;
pub use team_member::*;

use serde::de::DeserializeOwned;

/// A row type backed by a remote table
pub trait Record: DeserializeOwned + Send {
    /// Remote table name
    const TABLE: &'static str;
}
