//! Tracking and verification API.

use crate::{
  app::AppState,
  db,
  http::error_response,
  models::{
    response::{status::StatusMessage, verify::VerifyResponse},
    track::track_entry::TrackEntryInput,
  },
};
use axum::{
  Json,
  extract::{Path as AxumPath, State},
  http::StatusCode,
  response::IntoResponse,
};
use tracing::error;

pub async fn record_track(
  State(state): State<AppState>,
  Json(input): Json<TrackEntryInput>,
) -> impl IntoResponse {
  let entry = match input.validate() {
    Ok(e) => e,
    Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
  };
  match db::tracks::insert_track(&state.db, entry).await {
    Ok(_) => Json(StatusMessage {
      status: "Tracker Updated Successfully",
    })
    .into_response(),
    Err(e) => {
      error!("record_track db error: {e}");
      error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    }
  }
}

// The path segment is historically named `hash` but is matched verbatim
// against `serialNumber`; no hashing is involved.
pub async fn verify_serial(
  State(state): State<AppState>,
  AxumPath(hash): AxumPath<String>,
) -> impl IntoResponse {
  match db::tracks::find_by_serial(&state.db, &hash).await {
    Ok(record) => Json(VerifyResponse {
      valid: record.is_some(),
      record,
    })
    .into_response(),
    Err(e) => {
      error!("verify_serial db error: {e}");
      error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
    }
  }
}
