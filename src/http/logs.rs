//! Audit log API.

use crate::{
  app::AppState,
  db,
  http::error_response,
  models::{log::log_entry::LogEntryInput, response::status::StatusMessage},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

pub async fn record_log(
  State(state): State<AppState>,
  Json(input): Json<LogEntryInput>,
) -> impl IntoResponse {
  let entry = match input.validate() {
    Ok(e) => e,
    Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
  };
  match db::logs::insert_log(&state.db, entry).await {
    Ok(_) => Json(StatusMessage {
      status: "Recorded Successfully",
    })
    .into_response(),
    Err(e) => {
      error!("record_log db error: {e}");
      error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    }
  }
}

pub async fn list_logs(State(state): State<AppState>) -> impl IntoResponse {
  match db::logs::list_logs(&state.db).await {
    Ok(logs) => Json(logs).into_response(),
    Err(e) => {
      error!("list_logs db error: {e}");
      error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    }
  }
}
