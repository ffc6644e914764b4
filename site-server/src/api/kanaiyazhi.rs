//! Kanaiyazhi magazine API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::KanaiyazhiEdition;

use crate::core::AppState;
use crate::db::kanaiyazhi;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/kanaiyazhi", get(list))
        .route("/api/kanaiyazhi/featured", get(featured))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub year: Option<i32>,
}

/// GET /api/kanaiyazhi - every edition, or one year's
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<KanaiyazhiEdition>>> {
    let editions = match params.year {
        Some(year) => kanaiyazhi::by_year(state.store(), year).await?,
        None => kanaiyazhi::editions(state.store()).await?,
    };
    Ok(Json(editions))
}

/// GET /api/kanaiyazhi/featured - 404 when no edition is featured
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<KanaiyazhiEdition>> {
    kanaiyazhi::featured(state.store())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::with_message(ErrorCode::EditionNotFound, "No featured edition"))
}
