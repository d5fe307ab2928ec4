//! Fixed status message returned by the POST endpoints.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
}
