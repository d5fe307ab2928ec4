//! Audit log entry stored in SQLite and exposed via API.

use crate::models::validation::{ValidationError, require};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted log entry. `id` is the server-assigned rowid.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: i64,
    pub batch_id: String,
    pub actor: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// Raw request body for POST /api/log. All fields optional so that absence
/// is reported by `validate`, not by the JSON layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryInput {
    pub batch_id: Option<String>,
    pub actor: Option<String>,
    pub action: Option<String>,
    pub timestamp: Option<String>,
}

/// Validated log entry ready to be inserted.
#[derive(Debug)]
pub struct NewLogEntry {
    pub batch_id: String,
    pub actor: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntryInput {
    /// Check required fields and resolve the timestamp, defaulting to the
    /// current time when the caller did not supply one.
    pub fn validate(self) -> Result<NewLogEntry, ValidationError> {
        let batch_id = require("batchId", self.batch_id)?;
        let actor = require("actor", self.actor)?;
        let action = require("action", self.action)?;
        let timestamp = match self.timestamp {
            Some(raw) => crate::util::parse_datetime(&raw).ok_or(ValidationError::BadDateTime {
                field: "timestamp",
                value: raw,
            })?,
            None => Utc::now(),
        };
        Ok(NewLogEntry {
            batch_id,
            actor,
            action,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(batch_id: Option<&str>, actor: Option<&str>, action: Option<&str>) -> LogEntryInput {
        LogEntryInput {
            batch_id: batch_id.map(String::from),
            actor: actor.map(String::from),
            action: action.map(String::from),
            timestamp: None,
        }
    }

    #[test]
    fn accepts_complete_input_and_defaults_timestamp() {
        let before = Utc::now();
        let entry = input(Some("B1"), Some("Alice"), Some("manufactured"))
            .validate()
            .unwrap();
        assert_eq!(entry.batch_id, "B1");
        assert_eq!(entry.actor, "Alice");
        assert_eq!(entry.action, "manufactured");
        assert!(entry.timestamp >= before);
    }

    #[test]
    fn honors_caller_supplied_timestamp() {
        let mut raw = input(Some("B1"), Some("Alice"), Some("shipped"));
        raw.timestamp = Some("2024-02-01T08:00:00Z".into());
        let entry = raw.validate().unwrap();
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-02-01T08:00:00+00:00");
    }

    #[test]
    fn rejects_each_missing_field_by_name() {
        let err = input(None, Some("Alice"), Some("x")).validate().unwrap_err();
        assert!(err.to_string().contains("batchId"));
        let err = input(Some("B1"), None, Some("x")).validate().unwrap_err();
        assert!(err.to_string().contains("actor"));
        let err = input(Some("B1"), Some("Alice"), Some(""))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("action"));
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let mut raw = input(Some("B1"), Some("Alice"), Some("x"));
        raw.timestamp = Some("yesterday".into());
        let err = raw.validate().unwrap_err();
        assert!(err.to_string().contains("timestamp"));
    }
}
