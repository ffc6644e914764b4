//! HTTP API
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Liveness and store configuration |
//! | /api/events | GET, POST | List/count events, insert one |
//! | /api/team | GET, POST | List/count team members, insert one |
//! | /api/registrations | POST | Submit the registration form |
//! | /api/keepalive | GET | Touch the store |
//! | /api/gallery | GET | Gallery or Pongal images |
//! | /api/achievements | GET | Achievements |
//! | /api/kanaiyazhi | GET | Magazine editions |
//! | /api/kanaiyazhi/featured | GET | Featured edition |

use std::time::Duration;

use axum::Router;
use http::{HeaderName, HeaderValue, StatusCode};
use shared::error::{AppError, ErrorCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::AppState;

pub mod achievements;
pub mod events;
pub mod gallery;
pub mod health;
pub mod kanaiyazhi;
pub mod keepalive;
pub mod registrations;
pub mod team;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// `true` only for the literal string "true"
pub(crate) fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// "true" / "false" to a flag, anything else to `None`
pub(crate) fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

async fn fallback() -> AppError {
    AppError::new(ErrorCode::NotFound)
}

/// Every route, without middleware or state
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(events::router())
        .merge(team::router())
        .merge(registrations::router())
        .merge(keepalive::router())
        .merge(gallery::router())
        .merge(achievements::router())
        .merge(kanaiyazhi::router())
        .fallback(fallback)
}

/// Routes with middleware and state applied
pub fn build_app(state: AppState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_router()
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state)
}
