//! Shared validation error and field helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    Missing(&'static str),

    #[error("field '{field}' is not a valid date-time: '{value}'")]
    BadDateTime { field: &'static str, value: String },
}

/// Require a field to be present and non-empty. No trimming: only absent
/// or empty-string values are rejected, everything else is stored verbatim.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::Missing(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absent_and_empty() {
        assert!(require("batchId", None).is_err());
        assert!(require("batchId", Some(String::new())).is_err());
    }

    #[test]
    fn keeps_whitespace_verbatim() {
        assert_eq!(require("actor", Some("  ".into())).unwrap(), "  ");
    }
}
