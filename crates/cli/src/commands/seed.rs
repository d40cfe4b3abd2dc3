//! Push bundled default data to the live backend.
//!
//! These are the "sync defaults" admin actions. Upserts are keyed by slug
//! (products) or settings key (cities), so re-running is idempotent - and
//! rows sharing a slug are overwritten, including ones edited since.

use tracing::{info, warn};

use bloomgift_catalog::Catalog;

/// Bulk-upsert the bundled product catalog.
///
/// # Errors
///
/// Returns an error when the backend is unconfigured or the upsert fails.
pub async fn products(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    warn!("seeding overwrites live rows that share a slug with the bundled catalog");

    let count = catalog.products().sync_defaults().await?;
    info!("products seeded: {count}");
    Ok(())
}

/// Rebuild the delivery coverage list from the bundled table.
///
/// # Errors
///
/// Returns an error when the backend is unconfigured or the save fails.
pub async fn cities(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let count = catalog.cities().sync_defaults().await?;
    info!("cities seeded: {count}");
    Ok(())
}
