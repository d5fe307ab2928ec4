//! Track store: location events looked up by exact serial number.

use crate::models::track::track_entry::{NewTrackEntry, TrackEntry};
use sqlx::SqlitePool;

/// Insert one tracking entry and return it with its server-assigned id.
pub async fn insert_track(
    pool: &SqlitePool,
    entry: NewTrackEntry,
) -> Result<TrackEntry, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO tracks (serial_number, location, event_date, timestamp) VALUES (?, ?, ?, ?)",
    )
    .bind(&entry.serial_number)
    .bind(&entry.location)
    .bind(entry.event_date)
    .bind(entry.timestamp)
    .execute(pool)
    .await?;
    Ok(TrackEntry {
        id: res.last_insert_rowid(),
        serial_number: entry.serial_number,
        location: entry.location,
        event_date: entry.event_date,
        timestamp: entry.timestamp,
    })
}

/// First entry matching the serial number verbatim, in insertion order.
/// Duplicates are allowed; callers must not assume the match is the most
/// recent one.
pub async fn find_by_serial(
    pool: &SqlitePool,
    serial_number: &str,
) -> Result<Option<TrackEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, serial_number, location, event_date, timestamp FROM tracks WHERE serial_number = ? LIMIT 1",
    )
    .bind(serial_number)
    .fetch_optional(pool)
    .await
}
