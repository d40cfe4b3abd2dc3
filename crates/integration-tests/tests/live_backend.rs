//! Live-backend tests.
//!
//! These tests require:
//! - `SUPABASE_URL` and `SUPABASE_ANON_KEY` pointing at a disposable
//!   project with the `products`, `testimonials`, and `site_settings`
//!   tables provisioned
//!
//! Run with: cargo test -p bloomgift-integration-tests -- --ignored

use bloomgift_catalog::Catalog;
use bloomgift_core::{Category, CityMapping, Island, NewProduct, ProductPatch};

fn live_catalog() -> Catalog {
    let catalog = Catalog::from_env();
    assert!(
        catalog.is_backend_configured(),
        "live tests need SUPABASE_URL / SUPABASE_ANON_KEY"
    );
    catalog
}

fn unique_slug(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .subsec_nanos();
    format!("{prefix}-{nanos}")
}

#[tokio::test]
#[ignore = "Requires a live Supabase project"]
async fn create_assigns_boolean_defaults() {
    let catalog = live_catalog();
    let slug = unique_slug("test-defaults");

    let created = catalog
        .products()
        .create(NewProduct {
            name: "Test Defaults".to_owned(),
            slug: Some(slug.clone()),
            price: 100_000,
            category: Some(Category::Hampers),
            ..NewProduct::default()
        })
        .await
        .expect("create");

    assert!(created.is_active);
    assert!(!created.is_featured);
    assert!(!created.is_best_seller);
    assert!(!created.is_exclusive);
    assert!(!created.is_premium);

    assert!(catalog.products().delete(&created.id).await.expect("cleanup"));
}

#[tokio::test]
#[ignore = "Requires a live Supabase project"]
async fn update_is_visible_to_the_next_cached_read() {
    let catalog = live_catalog();
    let queries = catalog.cached();
    let slug = unique_slug("test-invalidation");

    let created = queries
        .create_product(NewProduct {
            name: "Test Invalidation".to_owned(),
            slug: Some(slug),
            price: 100_000,
            category: Some(Category::Hampers),
            ..NewProduct::default()
        })
        .await
        .expect("create");

    // Warm the cache, then mutate through the cached layer.
    let _ = queries.products().await;
    let updated = queries
        .update_product(
            &created.id,
            ProductPatch {
                price: Some(275_000),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.price, 275_000);

    // The mutation invalidated the list: the next read reflects the new
    // price instead of the cached copy.
    let listed = queries.products().await;
    let found = listed
        .iter()
        .find(|p| p.id == created.id)
        .expect("updated product listed");
    assert_eq!(found.price, 275_000);

    assert!(queries.delete_product(&created.id).await.expect("cleanup"));
}

#[tokio::test]
#[ignore = "Requires a live Supabase project"]
async fn cities_upsert_collapses_reused_ids() {
    let catalog = live_catalog();

    let mut cities: Vec<CityMapping> = (0..19)
        .map(|i| CityMapping::new(Island::Jawa, &format!("Kota Uji {i}"), "628111"))
        .collect();
    // Entry 20 reuses an existing id with changed fields.
    let mut reused = CityMapping::new(Island::Jawa, "Kota Uji 7", "628999");
    reused.is_active = false;
    cities.push(reused.clone());

    catalog.cities().save(cities).await.expect("save");

    let stored = catalog.cities().get().await;
    assert_eq!(stored.len(), 19);
    let kota7 = stored
        .iter()
        .find(|c| c.id == reused.id)
        .expect("reused id stored once");
    assert_eq!(kota7.whatsapp_number, "628999");
    assert!(!kota7.is_active);
}

#[tokio::test]
#[ignore = "Requires a live Supabase project"]
async fn deleting_a_missing_testimonial_is_a_false_noop() {
    let catalog = live_catalog();
    let deleted = catalog
        .testimonials()
        .delete("00000000-0000-0000-0000-000000000000")
        .await
        .expect("delete should not error");
    assert!(!deleted);
}

#[tokio::test]
#[ignore = "Requires a live Supabase project"]
async fn duplicate_slug_create_conflicts() {
    let catalog = live_catalog();
    let slug = unique_slug("test-conflict");

    let input = NewProduct {
        name: "Test Conflict".to_owned(),
        slug: Some(slug),
        price: 100_000,
        category: Some(Category::Hampers),
        ..NewProduct::default()
    };
    let created = catalog.products().create(input.clone()).await.expect("first");

    let second = catalog.products().create(input).await;
    assert!(matches!(
        second,
        Err(bloomgift_catalog::StoreError::Conflict(_))
    ));

    assert!(catalog.products().delete(&created.id).await.expect("cleanup"));
}
