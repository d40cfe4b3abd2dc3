//! Backend connection configuration and the configuration probe.
//!
//! # Environment Variables
//!
//! - `SUPABASE_URL` - Project endpoint (e.g., `https://xyz.supabase.co`)
//! - `SUPABASE_ANON_KEY` - Anonymous API key (a JWT)
//! - `SITE_BASE_URL` - Public site URL, used to build absolute links in
//!   outbound WhatsApp messages (default: `https://bloomgift.com`)
//!
//! Missing or placeholder credentials are not an error: the catalog then
//! runs in fallback mode and serves the bundled dataset. The probe result is
//! computed once when the [`crate::Catalog`] is constructed and treated as
//! immutable for the process lifetime.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

/// Real anon keys are long JWTs, not short placeholder values.
const MIN_ANON_KEY_LENGTH: usize = 100;

/// Every JWT starts with this base64url-encoded header prefix.
const ANON_KEY_PREFIX: &str = "eyJ";

/// Blocklist of common placeholder patterns (case-insensitive).
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "insert",
    "todo",
    "fixme",
    "xxx",
];

/// Default public site URL used in outbound links.
const DEFAULT_SITE_BASE_URL: &str = "https://bloomgift.com";

/// Backend connection parameters.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct BackendConfig {
    /// Project endpoint URL.
    pub project_url: String,
    /// Anonymous API key (server validates the actual permissions).
    pub anon_key: SecretString,
    /// Public site URL for absolute links in outbound messages.
    pub site_base_url: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("project_url", &self.project_url)
            .field("anon_key", &"[REDACTED]")
            .field("site_base_url", &self.site_base_url)
            .finish()
    }
}

impl BackendConfig {
    /// Build a configuration from explicit values.
    #[must_use]
    pub fn new(project_url: &str, anon_key: &str, site_base_url: &str) -> Self {
        Self {
            project_url: project_url.to_owned(),
            anon_key: SecretString::from(anon_key.to_owned()),
            site_base_url: site_base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` if present. Missing
    /// variables yield an unconfigured instance, never an error.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            project_url: get_env_or_default("SUPABASE_URL", ""),
            anon_key: SecretString::from(get_env_or_default("SUPABASE_ANON_KEY", "")),
            site_base_url: get_env_or_default("SITE_BASE_URL", DEFAULT_SITE_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
        }
    }

    /// An explicitly unconfigured instance (always fallback mode).
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::new("", "", DEFAULT_SITE_BASE_URL)
    }

    /// The configuration probe: true only when a live backend connection is
    /// plausible. Pure; no network is touched.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        is_valid_project_url(&self.project_url) && is_valid_anon_key(self.anon_key.expose_secret())
    }

    /// Base URL of the relational REST interface.
    #[must_use]
    pub fn rest_endpoint(&self) -> String {
        format!("{}/rest/v1", self.project_url.trim_end_matches('/'))
    }

    /// Base URL of the authentication interface.
    #[must_use]
    pub fn auth_endpoint(&self) -> String {
        format!("{}/auth/v1", self.project_url.trim_end_matches('/'))
    }

    /// Base URL of the object storage interface.
    #[must_use]
    pub fn storage_endpoint(&self) -> String {
        format!("{}/storage/v1", self.project_url.trim_end_matches('/'))
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Well-formed, secure scheme, and targets the expected host pattern.
fn is_valid_project_url(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    parsed.scheme() == "https"
        && parsed
            .host_str()
            .is_some_and(|host| host.contains(".supabase."))
}

/// Long enough, JWT-shaped, and not a placeholder.
fn is_valid_anon_key(key: &str) -> bool {
    key.len() > MIN_ANON_KEY_LENGTH && key.starts_with(ANON_KEY_PREFIX) && !is_placeholder(key)
}

fn is_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}
