//! Events API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::Value;
use shared::{AppError, AppResult, CountBody};

use crate::api::{is_true, parse_flag};
use crate::core::AppState;
use crate::db::events::{self, EventFilter};

/// `?featured=true&category=Workshop&count=true`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub featured: Option<String>,
    pub category: Option<String>,
    pub count: Option<String>,
}

/// GET /api/events - list events, soonest first, or count them
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    let filter = EventFilter {
        featured: parse_flag(params.featured.as_deref()),
        category: params.category,
    };

    if is_true(params.count.as_deref()) {
        let count = events::count(state.store(), &filter).await?;
        return Ok(Json(CountBody { count }).into_response());
    }

    let events = events::list(state.store(), &filter).await?;
    Ok(Json(events).into_response())
}

/// POST /api/events - insert one event as given
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    if !body.is_object() {
        return Err(AppError::invalid_request("Request body must be a JSON object"));
    }
    let row = events::create(state.store(), body).await?;
    tracing::info!(id = ?row.get("id"), "Event created");
    Ok(Json(row))
}
