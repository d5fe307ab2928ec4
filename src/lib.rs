//! pharmatrace library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `db`: migrations, SQLite helpers, and the log/track stores
//! - `models`: typed records and input validation
//! - `util`: tracing setup and date-time parsing

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod util;
