//! Utility functions: tracing setup and date-time parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Parse a caller-supplied date-time string.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`, or a plain `YYYY-MM-DD`
/// (midnight UTC). Naive values are taken as UTC.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }
  if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
    return Some(naive.and_utc());
  }
  if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
  }
  None
}
