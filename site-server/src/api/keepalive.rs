//! Keepalive API
//!
//! `GET /api/keepalive` touches the store once. Any failure, including
//! missing credentials or a panic while pinging, answers 500 with
//! `{ "success": false, "error": "...", "timestamp": "..." }`.

use std::panic::AssertUnwindSafe;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::Utc;
use futures::FutureExt;
use shared::KeepaliveStatus;

use crate::core::AppState;
use crate::core::tasks::panic_message;
use crate::db::keepalive;

pub const ALIVE_STATUS: &str = "Database kept active";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/keepalive", get(ping))
}

pub async fn ping(State(state): State<AppState>) -> (StatusCode, Json<KeepaliveStatus>) {
    let now = Utc::now();
    let mode = state.config.keepalive_mode;

    let outcome = AssertUnwindSafe(keepalive::ping(state.store(), mode, now))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(data)) => {
            tracing::info!(mode = %mode, "Keepalive ping succeeded");
            (
                StatusCode::OK,
                Json(KeepaliveStatus::alive(ALIVE_STATUS, now, data)),
            )
        }
        Ok(Err(e)) => {
            tracing::error!(mode = %mode, error = %e, "Keepalive ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KeepaliveStatus::failed(e.to_string(), now)),
            )
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(mode = %mode, panic = %message, "Keepalive ping panicked");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(KeepaliveStatus::failed(message, now)),
            )
        }
    }
}
