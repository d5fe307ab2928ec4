//! Application setup and runtime.

use crate::{db, http};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::net::SocketAddr;
use tracing::{error, info};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let db_url = std::env::var("PHARMATRACE_DATABASE")
    .unwrap_or_else(|_| "sqlite://pharmatrace.db".to_string());
  let db_url = db::ensure_sqlite_path(&db_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect_lazy(&db_url)?;

  // An unreachable store at startup is logged, not fatal; requests will
  // surface store errors until it comes back.
  match db::run_migrations(&pool).await {
    Ok(()) => info!("database ready: {}", db_url),
    Err(e) => error!("database unavailable at startup: {e}"),
  }

  let state = AppState { db: pool };

  let app = http::build_router(state);

  let addr: SocketAddr = std::env::var("PHARMATRACE_ADDR")
    .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
    .parse()?;

  info!("record log entry:   POST http://{}/api/log", addr);
  info!("list log entries:   GET  http://{}/api/logs", addr);
  info!("update tracker:     POST http://{}/api/track", addr);
  info!("verify serial:      GET  http://{}/api/verify/:hash", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
