//! Object storage uploads with client-side validation.
//!
//! Files are validated (size, MIME allow-list with `image/*` wildcards)
//! before any network call, stored under a collision-resistant generated
//! name, and every failure mode maps to a distinct error variant so the
//! admin UI can show a field-level message instead of a generic toast.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::instrument;

use crate::config::BackendConfig;

/// Default upload size limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Errors from upload and delete operations.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Connection parameters failed the configuration probe.
    #[error("backend not configured")]
    NotConfigured,

    /// File exceeds the configured size limit.
    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    /// MIME type not in the allow-list.
    #[error("file type not allowed: {0}")]
    UnsupportedType(String),

    /// The target bucket does not exist.
    #[error("storage bucket not found: {0}")]
    BucketMissing(String),

    /// A file already occupies the generated path.
    #[error("a file with the same path already exists")]
    AlreadyExists,

    /// Any other failure.
    #[error("upload failed: {0}")]
    Failed(String),
}

impl UploadError {
    /// User-facing message for the admin UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured => {
                "Backend belum terkonfigurasi. Silakan atur kredensial di file .env".to_owned()
            }
            Self::TooLarge { limit, .. } => {
                format!("Ukuran file terlalu besar. Maksimal {} MB", limit / (1024 * 1024))
            }
            Self::UnsupportedType(kind) => {
                format!("Tipe file {kind} tidak diizinkan")
            }
            Self::BucketMissing(bucket) => {
                format!("Bucket '{bucket}' tidak ditemukan. Silakan buat bucket terlebih dahulu")
            }
            Self::AlreadyExists => {
                "File dengan nama yang sama sudah ada. Silakan coba lagi".to_owned()
            }
            Self::Failed(_) => "Gagal mengupload file".to_owned(),
        }
    }
}

/// Upload configuration.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub bucket: String,
    pub folder: Option<String>,
    pub max_size_bytes: u64,
    /// Exact MIME types or `type/*` wildcards. Empty means allow anything.
    pub allowed_types: Vec<String>,
}

impl UploadOptions {
    /// Product image preset: `products/images`, 5 MiB, any image type.
    #[must_use]
    pub fn product_image() -> Self {
        Self {
            bucket: "products".to_owned(),
            folder: Some("images".to_owned()),
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_types: vec!["image/*".to_owned()],
        }
    }
}

/// A successfully stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Public URL for embedding.
    pub url: String,
    /// In-bucket path, needed for deletion.
    pub path: String,
}

/// Client for the backend's object storage interface.
#[derive(Clone)]
pub struct StorageClient {
    inner: Arc<StorageClientInner>,
}

struct StorageClientInner {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    configured: bool,
}

impl StorageClient {
    /// Create a new storage client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(StorageClientInner {
                http: reqwest::Client::new(),
                endpoint: config.storage_endpoint(),
                api_key: config.anon_key.expose_secret().to_owned(),
                configured: config.is_configured(),
            }),
        }
    }

    /// Validate and upload a file.
    ///
    /// The stored name is generated (`{timestamp}-{suffix}.{ext}`); the
    /// caller's filename only contributes its extension.
    ///
    /// # Errors
    ///
    /// Each failure mode maps to its own [`UploadError`] variant.
    #[instrument(skip(self, bytes), fields(bucket = %options.bucket, size = bytes.len()))]
    pub async fn upload(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> Result<UploadedFile, UploadError> {
        if !self.inner.configured {
            return Err(UploadError::NotConfigured);
        }

        let size = bytes.len() as u64;
        if size > options.max_size_bytes {
            return Err(UploadError::TooLarge {
                size,
                limit: options.max_size_bytes,
            });
        }

        if !mime_allowed(content_type, &options.allowed_types) {
            return Err(UploadError::UnsupportedType(content_type.to_owned()));
        }

        let file_name = generated_name(original_name);
        let path = match &options.folder {
            Some(folder) => format!("{folder}/{file_name}"),
            None => file_name,
        };

        let response = self
            .inner
            .http
            .post(format!(
                "{}/object/{}/{path}",
                self.inner.endpoint, options.bucket
            ))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CACHE_CONTROL, "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|err| UploadError::Failed(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(UploadedFile {
                url: self.public_url(&options.bucket, &path),
                path,
            });
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|err| err.to_string());
        if body.contains("Bucket not found") {
            return Err(UploadError::BucketMissing(options.bucket.clone()));
        }
        if status == StatusCode::CONFLICT || body.contains("already exists") {
            return Err(UploadError::AlreadyExists);
        }
        Err(UploadError::Failed(body.chars().take(200).collect()))
    }

    /// Upload a product image with the standard preset.
    ///
    /// # Errors
    ///
    /// See [`StorageClient::upload`].
    pub async fn upload_product_image(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, UploadError> {
        self.upload(original_name, content_type, bytes, &UploadOptions::product_image())
            .await
    }

    /// Public URL of a stored object.
    #[must_use]
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/object/public/{bucket}/{path}", self.inner.endpoint)
    }

    /// Delete a stored object by path.
    ///
    /// # Errors
    ///
    /// Returns `NotConfigured` in fallback mode, `Failed` otherwise.
    #[instrument(skip(self))]
    pub async fn delete(&self, bucket: &str, path: &str) -> Result<(), UploadError> {
        if !self.inner.configured {
            return Err(UploadError::NotConfigured);
        }

        let response = self
            .inner
            .http
            .delete(format!("{}/object/{bucket}/{path}", self.inner.endpoint))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(&self.inner.api_key)
            .send()
            .await
            .map_err(|err| UploadError::Failed(err.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| err.to_string());
            Err(UploadError::Failed(body.chars().take(200).collect()))
        }
    }

    /// Delete a product image given its public URL.
    ///
    /// # Errors
    ///
    /// Returns `Failed` when the URL does not point into the products
    /// bucket, otherwise see [`StorageClient::delete`].
    pub async fn delete_product_image(&self, image_url: &str) -> Result<(), UploadError> {
        let Some(path) = bucket_path(image_url, "products") else {
            return Err(UploadError::Failed("invalid image URL".to_owned()));
        };
        self.delete("products", &path).await
    }
}

/// Extract the in-bucket path from a public object URL.
fn bucket_path(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/{bucket}/");
    let index = url.find(&marker)?;
    let path = &url[index + marker.len()..];
    (!path.is_empty()).then(|| path.to_owned())
}

/// Match a concrete MIME type against the allow-list.
fn mime_allowed(content_type: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    allowed.iter().any(|pattern| {
        pattern.strip_suffix("/*").map_or_else(
            || pattern == content_type,
            |category| {
                content_type
                    .split('/')
                    .next()
                    .is_some_and(|prefix| prefix == category)
            },
        )
    })
}

/// Collision-resistant stored name: timestamp plus random suffix, keeping
/// only the original extension.
fn generated_name(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    let extension = original_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && *ext != original_name)
        .unwrap_or("bin")
        .to_ascii_lowercase();
    format!("{timestamp}-{}.{extension}", suffix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_wildcard() {
        let allowed = vec!["image/*".to_owned()];
        assert!(mime_allowed("image/png", &allowed));
        assert!(mime_allowed("image/jpeg", &allowed));
        assert!(!mime_allowed("application/pdf", &allowed));
    }

    #[test]
    fn test_mime_exact() {
        let allowed = vec!["image/png".to_owned(), "image/webp".to_owned()];
        assert!(mime_allowed("image/webp", &allowed));
        assert!(!mime_allowed("image/gif", &allowed));
    }

    #[test]
    fn test_mime_empty_list_allows_all() {
        assert!(mime_allowed("application/zip", &[]));
    }

    #[test]
    fn test_generated_name_keeps_extension_only() {
        let name = generated_name("foto produk (1).JPG");
        assert!(name.ends_with(".jpg"));
        assert!(!name.contains("foto"));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_generated_name_without_extension() {
        assert!(generated_name("README").ends_with(".bin"));
    }

    #[test]
    fn test_generated_names_differ() {
        assert_ne!(generated_name("a.png"), generated_name("a.png"));
    }

    #[test]
    fn test_bucket_path_extraction() {
        let url = "https://xyz.supabase.co/storage/v1/object/public/products/images/17-abc.jpg";
        assert_eq!(
            bucket_path(url, "products"),
            Some("images/17-abc.jpg".to_owned())
        );
        assert_eq!(bucket_path("https://example.com/x.jpg", "products"), None);
    }

    #[tokio::test]
    async fn test_unconfigured_upload_fails_fast() {
        let client = StorageClient::new(&BackendConfig::unconfigured());
        let result = client
            .upload_product_image("a.png", "image/png", vec![0_u8; 16])
            .await;
        assert!(matches!(result, Err(UploadError::NotConfigured)));
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let errors = [
            UploadError::NotConfigured,
            UploadError::TooLarge { size: 1, limit: DEFAULT_MAX_UPLOAD_BYTES },
            UploadError::UnsupportedType("application/pdf".to_owned()),
            UploadError::BucketMissing("products".to_owned()),
            UploadError::AlreadyExists,
            UploadError::Failed("boom".to_owned()),
        ];
        let messages: Vec<String> = errors.iter().map(UploadError::user_message).collect();
        let mut deduped = messages.clone();
        deduped.dedup();
        assert_eq!(messages.len(), deduped.len());
    }
}
