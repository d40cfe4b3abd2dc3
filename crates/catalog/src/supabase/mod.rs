//! Hosted backend (Supabase) clients.
//!
//! # Architecture
//!
//! - The backend is reached over three HTTP interfaces: the relational REST
//!   interface ([`RestClient`]), email/password auth ([`auth::AuthClient`]),
//!   and object storage ([`storage::StorageClient`]).
//! - Every low-level call returns an explicit `Result` with a typed error;
//!   the façades decide per variant whether to fall back or propagate. No
//!   exception-type inspection, no catch-all recovery.
//! - [`records`] holds the wire record shapes and the pure mapping functions
//!   between them and the canonical entities.
//!
//! All clients share the probe result captured at construction: when the
//! backend is unconfigured they fail fast with a typed error instead of
//! issuing doomed network calls.

pub mod auth;
pub mod records;
mod rest;
pub mod storage;

pub use rest::RestClient;

use thiserror::Error;

/// Errors from low-level backend calls.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection parameters failed the configuration probe.
    #[error("backend not configured")]
    NotConfigured,

    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The target table does not exist; common while the backend is still
    /// being provisioned.
    #[error("missing table: {0}")]
    MissingTable(String),

    /// Rate limited by the backend.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Unique constraint violation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-success response.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not decode into the expected shape.
    #[error("json decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Success status with an unexpected body shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl FetchError {
    /// Transport faults worth a single retry before giving up on the live
    /// read. Everything else is deterministic and retrying would not help.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_) | Self::RateLimited(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::RateLimited(2).is_transient());
        assert!(!FetchError::NotConfigured.is_transient());
        assert!(!FetchError::MissingTable("products".to_owned()).is_transient());
        assert!(
            !FetchError::Status {
                status: 500,
                message: String::new(),
            }
            .is_transient()
        );
    }

    #[test]
    fn test_display() {
        let err = FetchError::MissingTable("site_settings".to_owned());
        assert_eq!(err.to_string(), "missing table: site_settings");

        let err = FetchError::Status {
            status: 403,
            message: "permission denied".to_owned(),
        };
        assert_eq!(err.to_string(), "backend returned 403: permission denied");
    }
}
