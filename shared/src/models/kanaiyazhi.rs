//! Kanaiyazhi magazine edition Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Magazine edition entity, listed by year then edition number, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanaiyazhiEdition {
    pub id: String,
    pub edition_number: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub year: i32,
    pub month: Option<String>,
    pub cover_image_url: String,
    pub pdf_url: String,
    pub page_count: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
    pub display_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for KanaiyazhiEdition {
    const TABLE: &'static str = "kanaiyazhi_editions";
}

impl KanaiyazhiEdition {
    /// "Edition 4 · March 2025" style label
    pub fn issue_label(&self) -> String {
        match &self.month {
            Some(month) => format!("Edition {} · {} {}", self.edition_number, month, self.year),
            None => format!("Edition {} · {}", self.edition_number, self.year),
        }
    }
}
