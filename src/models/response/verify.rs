//! Verification result for GET /api/verify/:hash.

use crate::models::track::track_entry::TrackEntry;
use serde::Serialize;

/// `valid` is a plain existence check; `record` is the first match, or
/// null when the serial number was never tracked.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub record: Option<TrackEntry>,
}
