//! Data access
//!
//! One function per list or lookup the site shows. Every function takes the
//! store explicitly and returns a tagged [`StoreResult`]; callers that want
//! the site's fail-soft behaviour (errors logged, empty shown) apply
//! [`FailSoft::or_empty`] or [`FailSoftOption::or_none`].

pub mod achievements;
pub mod events;
pub mod gallery;
pub mod kanaiyazhi;
pub mod keepalive;
pub mod registrations;
pub mod team;

use chrono::{DateTime, SecondsFormat, Utc};
use store_client::StoreResult;

/// Timestamp literal used in filters
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Collapse a failed list fetch into an empty list
pub trait FailSoft<T> {
    fn or_empty(self, what: &str) -> Vec<T>;
}

impl<T> FailSoft<T> for StoreResult<Vec<T>> {
    fn or_empty(self, what: &str) -> Vec<T> {
        self.unwrap_or_else(|e| {
            tracing::error!(query = what, error = %e, "Store query failed, showing nothing");
            Vec::new()
        })
    }
}

/// Collapse a failed single-record lookup into `None`
pub trait FailSoftOption<T> {
    fn or_none(self, what: &str) -> Option<T>;
}

impl<T> FailSoftOption<T> for StoreResult<Option<T>> {
    fn or_none(self, what: &str) -> Option<T> {
        self.unwrap_or_else(|e| {
            tracing::error!(query = what, error = %e, "Store lookup failed, showing nothing");
            None
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Rows shaped like the remote tables

    use serde_json::{Value, json};

    pub fn event(id: &str, date: &str, featured: bool, category: Option<&str>) -> Value {
        json!({
            "id": id,
            "title": format!("Event {id}"),
            "description": null,
            "date": date,
            "location": "Anna Auditorium",
            "image_url": null,
            "category": category,
            "is_featured": featured,
            "created_at": "2024-12-01T00:00:00Z",
            "updated_at": "2024-12-01T00:00:00Z"
        })
    }

    pub fn member(
        id: &str,
        order: Option<i32>,
        office_bearer: bool,
        faculty: bool,
        year: Option<i32>,
    ) -> Value {
        json!({
            "id": id,
            "name": format!("Member {id}"),
            "role": if office_bearer { "Secretary" } else { "Coordinator" },
            "position_order": order,
            "image_url": null,
            "bio": null,
            "email": null,
            "linkedin_url": null,
            "is_office_bearer": office_bearer,
            "is_faculty": faculty,
            "year": year,
            "created_at": "2024-06-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z"
        })
    }

    pub fn image(id: &str, order: Option<i32>, created_at: &str, gallery: bool, pongal: bool) -> Value {
        json!({
            "id": id,
            "title": format!("Image {id}"),
            "description": null,
            "image_url": format!("https://cdn.example.org/{id}.jpg"),
            "event_id": null,
            "category": "Performances",
            "display_order": order,
            "show_in_gallery": gallery,
            "pongal_images": pongal,
            "created_at": created_at
        })
    }

    pub fn achievement(id: &str, year: i32, category: Option<&str>) -> Value {
        json!({
            "id": id,
            "title": format!("Achievement {id}"),
            "description": null,
            "year": year,
            "category": category,
            "image_url": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn edition(id: &str, number: i32, year: i32, featured: bool) -> Value {
        json!({
            "id": id,
            "edition_number": number,
            "title": format!("Kanaiyazhi {number}"),
            "subtitle": null,
            "description": null,
            "year": year,
            "month": "March",
            "cover_image_url": format!("https://cdn.example.org/k{number}.jpg"),
            "pdf_url": format!("https://cdn.example.org/k{number}.pdf"),
            "page_count": 48,
            "is_featured": featured,
            "display_order": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }
}
