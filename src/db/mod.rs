//! Database helpers: migrations, path handling, and the two stores.

use sqlx::SqlitePool;
use std::path::Path;

pub mod logs;
pub mod tracks;

/// Run SQLite migrations to create tables if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            batch_id TEXT NOT NULL,
            actor TEXT NOT NULL,
            action TEXT NOT NULL,
            timestamp TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS tracks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            serial_number TEXT NOT NULL,
            location TEXT NOT NULL,
            event_date TEXT NOT NULL,
            timestamp TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url.trim_start_matches("sqlite://");
    if path_part == ":memory:" {
        return db_url.to_string();
    }
    let path_only = match path_part.split_once('?') {
        Some((p, _)) => p,
        None => path_part,
    };
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}
