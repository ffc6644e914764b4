//! Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Event entity (workshops, festivals, competitions)
///
/// Whether an event is upcoming or past is derived from `date` at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Event {
    const TABLE: &'static str = "events";
}

impl Event {
    /// Whether the event starts at or after `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date >= now
    }
}
