//! Gallery Image Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Gallery image entity
///
/// `show_in_gallery` selects the general gallery, `pongal_images` the festival
/// carousel. `event_id` is not checked against the events table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: String,
    pub event_id: Option<String>,
    pub category: Option<String>,
    pub display_order: Option<i32>,
    pub show_in_gallery: Option<bool>,
    pub pongal_images: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Record for GalleryImage {
    const TABLE: &'static str = "gallery_images";
}

impl GalleryImage {
    /// Caption shown under the image, falling back to the category
    pub fn caption(&self) -> Option<&str> {
        self.title.as_deref().or(self.category.as_deref())
    }
}
