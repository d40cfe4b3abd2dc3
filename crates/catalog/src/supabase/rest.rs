//! Relational REST client (PostgREST dialect).
//!
//! Thin, typed wrapper over the query operations the façades need:
//! select-all-with-ordering, select-by-equality, select-single-or-none,
//! insert, update-by-filter, delete-by-filter, and upsert-with-conflict-key.
//! Mutating calls ask for `return=representation` so callers get the stored
//! row back without a second round trip.

use std::sync::Arc;

use reqwest::{Method, StatusCode, header};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::BackendConfig;

use super::FetchError;

/// Client for the backend's relational REST interface.
///
/// Cheaply cloneable; all clones share one HTTP connection pool.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    configured: bool,
}

impl RestClient {
    /// Create a new REST client. The configuration probe is captured here
    /// and never re-evaluated.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(RestClientInner {
                http: reqwest::Client::new(),
                endpoint: config.rest_endpoint(),
                api_key: config.anon_key.expose_secret().to_owned(),
                configured: config.is_configured(),
            }),
        }
    }

    /// Probe result captured at construction.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.configured
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        self.inner
            .http
            .request(method, format!("{}/{table}", self.inner.endpoint))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.api_key)
    }

    /// Send a prepared request and map the response to a body or an error.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        table: &str,
    ) -> Result<String, FetchError> {
        if !self.inner.configured {
            return Err(FetchError::NotConfigured);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(FetchError::RateLimited(retry_after));
        }

        // Body first, for error diagnostics.
        let body = response.text().await?;

        if status == StatusCode::CONFLICT {
            return Err(FetchError::Conflict(snippet(&body)));
        }

        // PostgREST reports an unknown relation as 404 (code PGRST205).
        if status == StatusCode::NOT_FOUND
            || (!status.is_success() && body.contains("PGRST205"))
        {
            return Err(FetchError::MissingTable(table.to_owned()));
        }

        if !status.is_success() {
            tracing::debug!(
                status = %status,
                table = %table,
                body = %snippet(&body),
                "backend returned non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: snippet(&body),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Fetch every row of `table`, ordered by `order_column` ascending.
    #[instrument(skip(self))]
    pub async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        order_column: &str,
    ) -> Result<Vec<T>, FetchError> {
        let order = format!("{order_column}.asc");
        let request = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("order", order.as_str())]);
        let body = self.execute(request, table).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch rows where `column = value`, ordered ascending, optionally
    /// bounded.
    #[instrument(skip(self))]
    pub async fn select_eq<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        order_column: &str,
        limit: Option<u32>,
    ) -> Result<Vec<T>, FetchError> {
        let filter = format!("eq.{value}");
        let order = format!("{order_column}.asc");
        let mut request = self.request(Method::GET, table).query(&[
            ("select", "*"),
            (column, filter.as_str()),
            ("order", order.as_str()),
        ]);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        let body = self.execute(request, table).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the single row where `column = value`, or `None`.
    #[instrument(skip(self))]
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<Option<T>, FetchError> {
        let filter = format!("eq.{value}");
        let request = self.request(Method::GET, table).query(&[
            ("select", "*"),
            (column, filter.as_str()),
            ("limit", "1"),
        ]);
        let body = self.execute(request, table).await?;
        let rows: Vec<T> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().next())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert one row and return the stored representation.
    #[instrument(skip(self, row))]
    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<T, FetchError> {
        let request = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(row);
        let body = self.execute(request, table).await?;
        let rows: Vec<T> = serde_json::from_str(&body)?;
        rows.into_iter().next().ok_or_else(|| {
            FetchError::UnexpectedResponse("insert returned no representation".to_owned())
        })
    }

    /// Partial update of rows where `column = value`; returns the updated
    /// row when one matched. Fields absent from `patch` are left untouched.
    #[instrument(skip(self, patch))]
    pub async fn update_eq<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        patch: &B,
    ) -> Result<Option<T>, FetchError> {
        let filter = format!("eq.{value}");
        let request = self
            .request(Method::PATCH, table)
            .query(&[(column, filter.as_str())])
            .header("Prefer", "return=representation")
            .json(patch);
        let body = self.execute(request, table).await?;
        let rows: Vec<T> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().next())
    }

    /// Delete rows where `column = value`; returns how many were removed.
    #[instrument(skip(self))]
    pub async fn delete_eq(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<usize, FetchError> {
        let filter = format!("eq.{value}");
        let request = self
            .request(Method::DELETE, table)
            .query(&[(column, filter.as_str())])
            .header("Prefer", "return=representation");
        let body = self.execute(request, table).await?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(rows.len())
    }

    /// Insert-or-replace keyed by `conflict_column`; accepts a single row or
    /// a batch and returns the stored representations.
    #[instrument(skip(self, rows))]
    pub async fn upsert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        rows: &B,
        conflict_column: &str,
    ) -> Result<Vec<T>, FetchError> {
        let request = self
            .request(Method::POST, table)
            .query(&[("on_conflict", conflict_column)])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(rows);
        let body = self.execute(request, table).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[tokio::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = RestClient::new(&BackendConfig::unconfigured());
        assert!(!client.is_configured());

        let result = client
            .select_all::<serde_json::Value>("products", "created_at")
            .await;
        assert!(matches!(result, Err(FetchError::NotConfigured)));
    }

    #[test]
    fn test_snippet_truncates() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), 200);
    }
}
