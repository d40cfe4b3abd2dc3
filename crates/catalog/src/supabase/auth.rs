//! Email/password authentication against the hosted backend.
//!
//! The backend owns accounts, passwords, and sessions; this client only
//! exchanges credentials for tokens and tracks the current session in a
//! `watch` channel so interested parties can observe sign-in/sign-out
//! transitions. There is no fallback identity: in fallback mode every call
//! fails with [`AuthError::NotConfigured`].

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tracing::instrument;

use crate::config::BackendConfig;

/// Errors from authentication calls.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Connection parameters failed the configuration probe.
    #[error("backend not configured")]
    NotConfigured,

    /// The backend rejected the credentials.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Transport-level failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not decode into the expected shape.
    #[error("auth response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other non-success response.
    #[error("auth request failed ({status}): {message}")]
    Failed { status: u16, message: String },
}

/// The authenticated user carried inside a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// An active session.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: SecretString,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    user: Option<AuthUser>,
}

/// Client for the backend's authentication interface.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    http: reqwest::Client,
    endpoint: String,
    rest_endpoint: String,
    api_key: String,
    configured: bool,
    session: watch::Sender<Option<Session>>,
}

impl AuthClient {
    /// Create a new auth client with no active session.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            inner: Arc::new(AuthClientInner {
                http: reqwest::Client::new(),
                endpoint: config.auth_endpoint(),
                rest_endpoint: config.rest_endpoint(),
                api_key: config.anon_key.expose_secret().to_owned(),
                configured: config.is_configured(),
                session,
            }),
        }
    }

    /// Sign in with email and password; on success the session becomes
    /// current and is broadcast to subscribers.
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` in fallback mode, `InvalidCredentials` when
    /// the backend rejects the pair, or a transport/decode error.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = self
            .token_request("token?grant_type=password", email, password)
            .await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        let session = Session {
            access_token: SecretString::from(token.access_token),
            user: token.user.unwrap_or(AuthUser {
                id: String::new(),
                email: email.to_owned(),
            }),
        };
        self.inner.session.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Register a new account. Returns the session when the backend signs
    /// the user in immediately, `None` when email confirmation is pending.
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` in fallback mode or a transport/decode error.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>, AuthError> {
        let body = self.token_request("signup", email, password).await?;
        let token: Result<TokenResponse, _> = serde_json::from_str(&body);
        match token {
            Ok(token) if !token.access_token.is_empty() => {
                let session = Session {
                    access_token: SecretString::from(token.access_token),
                    user: token.user.unwrap_or(AuthUser {
                        id: String::new(),
                        email: email.to_owned(),
                    }),
                };
                self.inner.session.send_replace(Some(session.clone()));
                Ok(Some(session))
            }
            // A signup needing confirmation returns the bare user, no token.
            _ => Ok(None),
        }
    }

    /// Clear the current session and best-effort revoke it server-side.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) {
        let Some(session) = self.inner.session.send_replace(None) else {
            return;
        };

        let result = self
            .inner
            .http
            .post(format!("{}/logout", self.inner.endpoint))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(session.access_token.expose_secret())
            .send()
            .await;
        if let Err(err) = result {
            tracing::warn!(error = %err, "session revocation failed; local state cleared");
        }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.inner.session.borrow().clone()
    }

    /// Auth-state-changed stream: yields on every sign-in and sign-out.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.inner.session.subscribe()
    }

    /// Whether the user holds the admin role.
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` in fallback mode or a transport/decode error.
    #[instrument(skip(self))]
    pub async fn is_admin(&self, user_id: &str) -> Result<bool, AuthError> {
        if !self.inner.configured {
            return Err(AuthError::NotConfigured);
        }

        // Role rows are protected by row security; read with the session
        // token when one is active.
        let token = self
            .session()
            .map_or_else(|| self.inner.api_key.clone(), |s| s.access_token.expose_secret().to_owned());

        let user_filter = format!("eq.{user_id}");
        let response = self
            .inner
            .http
            .get(format!("{}/user_roles", self.inner.rest_endpoint))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(token)
            .query(&[
                ("select", "role"),
                ("user_id", user_filter.as_str()),
                ("role", "eq.admin"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::Failed {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let rows: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(!rows.is_empty())
    }

    async fn token_request(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        if !self.inner.configured {
            return Err(AuthError::NotConfigured);
        }

        let response = self
            .inner
            .http
            .post(format!("{}/{path}", self.inner.endpoint))
            .header("apikey", &self.inner.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Failed {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(body)
    }
}
