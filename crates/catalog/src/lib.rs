//! BloomGift Catalog - Data access façades with static fallback.
//!
//! This crate is the data layer shared by the storefront and the admin area.
//! Persistence and authentication are delegated to a hosted Supabase
//! backend; when the connection parameters are missing or look like
//! placeholders, every read transparently serves the bundled static dataset
//! instead, and every write fails with a configuration error.
//!
//! # Architecture
//!
//! - [`config::BackendConfig`] - connection parameters plus the
//!   configuration probe, evaluated once per process
//! - [`supabase`] - low-level REST, auth, and storage clients with an
//!   explicit error type per call (no exception-type inspection)
//! - [`stores`] - one façade per resource, hiding the live-vs-fallback
//!   decision from callers
//! - [`CachedCatalog`] - read-through cache layer with request coalescing
//!   and invalidation-on-mutation
//! - [`whatsapp`] - outbound `wa.me` link builders
//!
//! # Example
//!
//! ```rust,ignore
//! use bloomgift_catalog::Catalog;
//!
//! let catalog = Catalog::from_env();
//! let queries = catalog.cached();
//!
//! // Serves the live backend, or the bundled dataset in fallback mode.
//! let products = queries.products().await;
//! let detail = queries.product_by_slug("buket-mawar-merah-premium").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cache;
mod catalog;
pub mod config;
pub mod error;
pub mod fallback;
pub mod stores;
pub mod supabase;
pub mod whatsapp;

pub use cache::CachedCatalog;
pub use catalog::Catalog;
pub use config::BackendConfig;
pub use error::StoreError;
