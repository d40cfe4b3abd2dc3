//! Backend mode and catalog counts.

use tracing::info;

use bloomgift_catalog::Catalog;

/// Print the probe result and per-resource counts.
///
/// # Errors
///
/// Currently infallible; kept fallible for parity with the other commands.
pub async fn run(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    if catalog.is_backend_configured() {
        info!("mode: live backend");
    } else {
        info!("mode: bundled fallback data (backend unconfigured)");
    }

    let products = catalog.products().get_all().await;
    let testimonials = catalog.testimonials().get_all().await;
    let navigation = catalog.navigation().get().await;
    let cities = catalog.cities().get().await;
    let inquiries = catalog.inquiries().get_all().await;

    info!("products: {}", products.len());
    info!("testimonials (approved): {}", testimonials.len());
    info!("navigation items: {}", navigation.len());
    info!("coverage cities: {}", cities.len());
    info!("inquiries: {}", inquiries.len());
    Ok(())
}
