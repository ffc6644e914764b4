//! Team API Handlers

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
use crate::db::team::{self, TeamFilter};

/// `?office_bearers=true&year=2025&count=true`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub office_bearers: Option<String>,
    pub year: Option<i32>,
    pub count: Option<String>,
}

/// GET /api/team - list members by position, or count them
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    let filter = TeamFilter {
        office_bearers: parse_flag(params.office_bearers.as_deref()),
        year: params.year,
    };

    if is_true(params.count.as_deref()) {
        let count = team::count(state.store(), &filter).await?;
        return Ok(Json(CountBody { count }).into_response());
    }

    let members = team::list(state.store(), &filter).await?;
    Ok(Json(members).into_response())
}

/// POST /api/team - insert one member as given
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    if !body.is_object() {
        return Err(AppError::invalid_request("Request body must be a JSON object"));
    }
    let row = team::create(state.store(), body).await?;
    tracing::info!(id = ?row.get("id"), "Team member created");
    Ok(Json(row))
}
