//! Tracking entry for a physical unit, keyed by serial number.

use crate::models::validation::{ValidationError, require};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted tracking entry. `event_date` is the caller-supplied event
/// date; `timestamp` is the record-creation time.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrackEntry {
    pub id: i64,
    pub serial_number: String,
    pub location: String,
    #[serde(rename = "date")]
    pub event_date: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}

/// Raw request body for POST /api/track.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEntryInput {
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub timestamp: Option<String>,
}

/// Validated tracking entry ready to be inserted.
#[derive(Debug)]
pub struct NewTrackEntry {
    pub serial_number: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}

impl TrackEntryInput {
    /// Check required fields, parse the event date, and resolve the
    /// creation timestamp (current time when absent).
    pub fn validate(self) -> Result<NewTrackEntry, ValidationError> {
        let serial_number = require("serialNumber", self.serial_number)?;
        let location = require("location", self.location)?;
        let raw_date = require("date", self.date)?;
        let event_date =
            crate::util::parse_datetime(&raw_date).ok_or(ValidationError::BadDateTime {
                field: "date",
                value: raw_date,
            })?;
        let timestamp = match self.timestamp {
            Some(raw) => crate::util::parse_datetime(&raw).ok_or(ValidationError::BadDateTime {
                field: "timestamp",
                value: raw,
            })?,
            None => Utc::now(),
        };
        Ok(NewTrackEntry {
            serial_number,
            location,
            event_date,
            timestamp,
        })
    }
}
