//! Façade-level error taxonomy.
//!
//! Read failures on resources with a fallback never reach callers; the
//! variants below are what the UI actually has to handle. Write failures
//! always propagate so they can be acknowledged explicitly.

use thiserror::Error;

use crate::supabase::FetchError;

/// Errors surfaced by the resource façades.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend unreachable or unconfigured and the operation has no valid
    /// fallback (all writes; settings-blob saves).
    #[error("backend not configured: {0}")]
    Configuration(String),

    /// Entity absent from both the live and fallback sources.
    #[error("not found: {0}")]
    NotFound(String),

    /// Required field missing or malformed; detected before any network call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Uniqueness constraint violated on create or upsert.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Backend fault on an operation that cannot be absorbed locally.
    #[error("backend request failed: {0}")]
    Fetch(#[from] FetchError),
}

impl StoreError {
    /// The standard configuration error for refused writes.
    #[must_use]
    pub fn not_configured() -> Self {
        Self::Configuration("write operations require a live backend".to_owned())
    }
}

/// Result type alias for façade operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StoreError::NotFound("product buket-tulip".to_owned());
        assert_eq!(err.to_string(), "not found: product buket-tulip");

        let err = StoreError::Validation("rating must be between 1 and 5".to_owned());
        assert_eq!(
            err.to_string(),
            "validation failed: rating must be between 1 and 5"
        );
    }
}
