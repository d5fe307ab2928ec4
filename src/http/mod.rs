//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Json, Router,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub mod logs;
pub mod track;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/api/log", post(logs::record_log))
    .route("/api/logs", get(logs::list_logs))
    .route("/api/track", post(track::record_track))
    .route("/api/verify/:hash", get(track::verify_serial))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// JSON error body shared by all failure responses.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
  (status, Json(serde_json::json!({ "error": message }))).into_response()
}
