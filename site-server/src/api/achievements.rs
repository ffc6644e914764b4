//! Achievements API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::AppResult;
use shared::models::Achievement;

use crate::core::AppState;
use crate::db::achievements;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/achievements", get(list))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// GET /api/achievements - newest year first
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Achievement>>> {
    let items = match params.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => achievements::by_category(state.store(), category).await?,
        None => achievements::all(state.store()).await?,
    };
    Ok(Json(items))
}
