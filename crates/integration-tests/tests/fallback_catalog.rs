//! Fallback-mode behavior of the resource façades.
//!
//! Every test here runs against an explicitly unconfigured catalog: reads
//! must serve the bundled dataset without a network call, and writes must
//! refuse with a configuration error.

use bloomgift_catalog::{BackendConfig, Catalog, StoreError, fallback};
use bloomgift_core::slug::clean_slug;
use bloomgift_core::{Category, NewProduct, NewTestimonial, ProductPatch};

fn offline_catalog() -> Catalog {
    Catalog::new(BackendConfig::unconfigured())
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn product_list_is_exactly_the_bundled_dataset() {
    let catalog = offline_catalog();
    let products = catalog.products().get_all().await;
    assert_eq!(products, fallback::products());
    assert!(!products.is_empty());
}

#[tokio::test]
async fn slug_lookup_reduces_embedded_urls() {
    let catalog = offline_catalog();
    let product = catalog
        .products()
        .get_by_slug("https://example.com/produk/buket-mawar-merah-premium")
        .await
        .expect("product behind dirty slug");
    assert_eq!(product.slug, "buket-mawar-merah-premium");
}

#[tokio::test]
async fn slug_lookup_is_normalization_idempotent() {
    let catalog = offline_catalog();
    let dirty = "https://example.com/produk/hampers-lebaran-eksklusif";
    let via_dirty = catalog.products().get_by_slug(dirty).await.expect("dirty");
    let via_clean = catalog
        .products()
        .get_by_slug(clean_slug(dirty))
        .await
        .expect("clean");
    assert_eq!(via_dirty, via_clean);
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let catalog = offline_catalog();
    let result = catalog.products().get_by_slug("produk-yang-tidak-ada").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn category_listing_is_bounded_and_filtered() {
    let catalog = offline_catalog();
    let buket = catalog
        .products()
        .get_by_category(Category::BuketBunga, 2)
        .await;
    assert_eq!(buket.len(), 2);
    assert!(buket.iter().all(|p| p.category == Category::BuketBunga));
}

#[tokio::test]
async fn public_testimonials_are_all_approved() {
    let catalog = offline_catalog();
    let testimonials = catalog.testimonials().get_all().await;
    assert!(!testimonials.is_empty());
    assert!(testimonials.iter().all(|t| t.is_approved));
}

#[tokio::test]
async fn inquiries_degrade_to_empty() {
    let catalog = offline_catalog();
    assert!(catalog.inquiries().get_all().await.is_empty());
}

#[tokio::test]
async fn navigation_is_sorted_by_order() {
    let catalog = offline_catalog();
    let items = catalog.navigation().get().await;
    assert!(items.windows(2).all(|pair| pair[0].order <= pair[1].order));
}

#[tokio::test]
async fn settings_reads_serve_defined_defaults() {
    let catalog = offline_catalog();
    assert_eq!(
        catalog.whatsapp().get().await.default_number,
        fallback::DEFAULT_WHATSAPP_NUMBER
    );
    assert_eq!(catalog.footer().get().await, fallback::default_footer());
    assert_eq!(
        catalog.home_content().get().await,
        fallback::default_home_content()
    );
    assert_eq!(catalog.cities().get().await, fallback::default_cities());
}

#[tokio::test]
async fn active_cities_filter_holds() {
    let catalog = offline_catalog();
    let active = catalog.cities().active().await;
    assert!(active.iter().all(|c| c.is_active));
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn product_writes_refuse_without_backend() {
    let catalog = offline_catalog();

    let input = NewProduct {
        name: "Buket Tulip".to_owned(),
        price: 300_000,
        category: Some(Category::BuketBunga),
        ..NewProduct::default()
    };
    assert!(matches!(
        catalog.products().create(input).await,
        Err(StoreError::Configuration(_))
    ));

    let patch = ProductPatch {
        price: Some(320_000),
        ..ProductPatch::default()
    };
    assert!(matches!(
        catalog.products().update("1", patch).await,
        Err(StoreError::Configuration(_))
    ));

    assert!(matches!(
        catalog.products().delete("1").await,
        Err(StoreError::Configuration(_))
    ));
}

#[tokio::test]
async fn validation_precedes_configuration_errors() {
    let catalog = offline_catalog();

    // Missing category: caught client-side even though the backend is also
    // unconfigured.
    let input = NewProduct {
        name: "Buket Tulip".to_owned(),
        price: 300_000,
        ..NewProduct::default()
    };
    assert!(matches!(
        catalog.products().create(input).await,
        Err(StoreError::Validation(_))
    ));

    let bad_rating = NewTestimonial {
        name: "Sarah".to_owned(),
        content: "Bagus".to_owned(),
        rating: 6,
        ..NewTestimonial::default()
    };
    assert!(matches!(
        catalog.testimonials().create(bad_rating).await,
        Err(StoreError::Validation(_))
    ));
}

#[tokio::test]
async fn settings_saves_refuse_without_backend() {
    let catalog = offline_catalog();

    assert!(matches!(
        catalog
            .navigation()
            .save(fallback::default_navigation())
            .await,
        Err(StoreError::Configuration(_))
    ));
    assert!(matches!(
        catalog.cities().sync_defaults().await,
        Err(StoreError::Configuration(_))
    ));
    assert!(matches!(
        catalog.products().sync_defaults().await,
        Err(StoreError::Configuration(_))
    ));
}
