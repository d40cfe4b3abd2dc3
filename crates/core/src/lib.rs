//! BloomGift Core - Shared types library.
//!
//! This crate provides common types used across all BloomGift components:
//! - `catalog` - Data access façades for the storefront and admin area
//! - `cli` - Command-line tools for seeding and diagnostics
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog entities, settings documents, and their input types
//! - [`slug`] - Slug derivation and legacy-slug cleanup helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod slug;
pub mod types;

pub use types::*;
