//! Registration form API
//!
//! `POST /api/registrations` answers `{ "success": true }` on success.
//! Validation failures answer 400 and store failures 500, both as
//! `{ "success": false, "error": "..." }`.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use shared::SubmitResult;
use shared::models::RegistrationInput;

use crate::core::AppState;
use crate::db::registrations;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/registrations", post(submit))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<RegistrationInput>,
) -> (StatusCode, Json<SubmitResult>) {
    match registrations::submit(state.store(), input).await {
        Ok(()) => (StatusCode::OK, Json(SubmitResult::ok())),
        Err(e) => (e.http_status(), Json(SubmitResult::failed(e.message))),
    }
}
