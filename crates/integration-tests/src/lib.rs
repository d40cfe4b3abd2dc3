//! Integration tests for BloomGift.
//!
//! Two kinds of tests live under `tests/`:
//!
//! - Fallback-mode tests run against an explicitly unconfigured catalog and
//!   never touch the network. They cover the fallback contract end to end.
//! - Live-backend tests are `#[ignore]`d and require `SUPABASE_URL` /
//!   `SUPABASE_ANON_KEY` pointing at a disposable project. Run with
//!   `cargo test -p bloomgift-integration-tests -- --ignored`.

#![cfg_attr(not(test), forbid(unsafe_code))]
