//! Achievement Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Achievement entity, listed newest year first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Achievement {
    const TABLE: &'static str = "achievements";
}
