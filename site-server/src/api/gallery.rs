//! Gallery API
//!
//! `GET /api/gallery` lists gallery images. `pongal=true` lists the Pongal
//! carousel instead; `category` or `event_id` narrow to one category or event.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::AppResult;
use shared::models::GalleryImage;

use crate::api::is_true;
use crate::core::AppState;
use crate::db::gallery;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/gallery", get(list))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub event_id: Option<String>,
    pub pongal: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let store = state.store();
    let images = if is_true(params.pongal.as_deref()) {
        gallery::pongal_images(store).await?
    } else if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        gallery::by_category(store, category).await?
    } else if let Some(event_id) = params.event_id.as_deref().filter(|e| !e.is_empty()) {
        gallery::by_event(store, event_id).await?
    } else {
        gallery::gallery_images(store).await?
    };
    Ok(Json(images))
}
