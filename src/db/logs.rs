//! Log store: append-only audit events, listed most recent first.

use crate::models::log::log_entry::{LogEntry, NewLogEntry};
use sqlx::SqlitePool;

/// Insert one log entry and return it with its server-assigned id.
pub async fn insert_log(pool: &SqlitePool, entry: NewLogEntry) -> Result<LogEntry, sqlx::Error> {
    let res = sqlx::query("INSERT INTO logs (batch_id, actor, action, timestamp) VALUES (?, ?, ?, ?)")
        .bind(&entry.batch_id)
        .bind(&entry.actor)
        .bind(&entry.action)
        .bind(entry.timestamp)
        .execute(pool)
        .await?;
    Ok(LogEntry {
        id: res.last_insert_rowid(),
        batch_id: entry.batch_id,
        actor: entry.actor,
        action: entry.action,
        timestamp: entry.timestamp,
    })
}

/// All log entries, descending by timestamp. Ties resolve to the latest
/// insert first so the ordering is deterministic.
pub async fn list_logs(pool: &SqlitePool) -> Result<Vec<LogEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, batch_id, actor, action, timestamp FROM logs ORDER BY timestamp DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}
