//! Read-through cache layer over the resource façades.
//!
//! One `moka` cache per resource family (5-minute TTL, capacity 1000),
//! string keys with parameter suffixes so distinct parameter sets never
//! collide. Cache keys and value variants are paired one-to-one by
//! construction.
//!
//! Two rules carried over from the UI's query layer:
//!
//! - Concurrent reads of the same key coalesce into a single underlying
//!   fetch (`moka`'s `get_with` guarantees one init future per key).
//! - Every successful mutation invalidates its whole resource family, so
//!   the next read refetches instead of trusting a locally patched copy.
//!   Consistency with the backend wins over optimistic-update latency.
//!
//! Failed mutations invalidate nothing: the cached data is still the best
//! known state.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::instrument;

use bloomgift_core::slug::clean_slug;
use bloomgift_core::{
    Category, CityMapping, FooterContent, HomeContent, Inquiry, InquiryStatus, MenuItem,
    NewInquiry, NewProduct, NewTestimonial, Product, ProductPatch, Testimonial, TestimonialPatch,
    WhatsAppConfig,
};

use crate::catalog::Catalog;
use crate::error::StoreError;

const CACHE_TTL: Duration = Duration::from_secs(300);
const CACHE_CAPACITY: u64 = 1000;

#[derive(Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Option<Box<Product>>),
    Testimonials(Vec<Testimonial>),
    Menu(Vec<MenuItem>),
    Footer(Box<FooterContent>),
    Whatsapp(Box<WhatsAppConfig>),
    Home(Box<HomeContent>),
    Cities(Vec<CityMapping>),
}

/// Cached query layer; hand out one per process and share clones freely.
#[derive(Clone)]
pub struct CachedCatalog {
    inner: Arc<CachedCatalogInner>,
}

struct CachedCatalogInner {
    catalog: Catalog,
    products: Cache<String, CacheValue>,
    testimonials: Cache<String, CacheValue>,
    settings: Cache<String, CacheValue>,
}

impl CachedCatalog {
    /// Wrap a catalog with fresh, empty caches.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let build = || {
            Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build()
        };
        Self {
            inner: Arc::new(CachedCatalogInner {
                catalog,
                products: build(),
                testimonials: build(),
                settings: build(),
            }),
        }
    }

    /// The wrapped catalog, for uncached access.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    // =========================================================================
    // Product reads
    // =========================================================================

    /// Cached product list.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Vec<Product> {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .products
            .get_with("all".to_owned(), async move {
                CacheValue::Products(catalog.products().get_all().await)
            })
            .await;
        match value {
            CacheValue::Products(products) => products,
            _ => Vec::new(),
        }
    }

    /// Cached slug lookup. The key is the cleaned slug, so a dirty URL and
    /// its clean form share one entry. Misses are cached too and cleared by
    /// the next product mutation.
    ///
    /// # Errors
    ///
    /// `NotFound` when no slug matches in either source.
    #[instrument(skip(self))]
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, StoreError> {
        let cleaned = clean_slug(slug).to_owned();
        let key = format!("slug:{cleaned}");
        let catalog = self.inner.catalog.clone();
        let lookup = cleaned.clone();
        let value = self
            .inner
            .products
            .get_with(key, async move {
                match catalog.products().get_by_slug(&lookup).await {
                    Ok(product) => CacheValue::Product(Some(Box::new(product))),
                    Err(_) => CacheValue::Product(None),
                }
            })
            .await;
        match value {
            CacheValue::Product(Some(product)) => Ok(*product),
            _ => Err(StoreError::NotFound(format!("product slug {cleaned}"))),
        }
    }

    /// Cached bounded category listing.
    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category: Category, limit: u32) -> Vec<Product> {
        let key = format!("category:{category}:{limit}");
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .products
            .get_with(key, async move {
                CacheValue::Products(catalog.products().get_by_category(category, limit).await)
            })
            .await;
        match value {
            CacheValue::Products(products) => products,
            _ => Vec::new(),
        }
    }

    // =========================================================================
    // Testimonial reads
    // =========================================================================

    /// Cached public testimonial list (approved entries only).
    #[instrument(skip(self))]
    pub async fn testimonials(&self) -> Vec<Testimonial> {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .testimonials
            .get_with("all".to_owned(), async move {
                CacheValue::Testimonials(catalog.testimonials().get_all().await)
            })
            .await;
        match value {
            CacheValue::Testimonials(testimonials) => testimonials,
            _ => Vec::new(),
        }
    }

    /// Cached admin testimonial list (approval state ignored).
    #[instrument(skip(self))]
    pub async fn testimonials_admin(&self) -> Vec<Testimonial> {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .testimonials
            .get_with("admin".to_owned(), async move {
                CacheValue::Testimonials(catalog.testimonials().get_all_admin().await)
            })
            .await;
        match value {
            CacheValue::Testimonials(testimonials) => testimonials,
            _ => Vec::new(),
        }
    }

    // =========================================================================
    // Settings reads
    // =========================================================================

    /// Cached navigation, sorted by `order` ascending.
    #[instrument(skip(self))]
    pub async fn navigation(&self) -> Vec<MenuItem> {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .settings
            .get_with("navigation".to_owned(), async move {
                CacheValue::Menu(catalog.navigation().get().await)
            })
            .await;
        match value {
            CacheValue::Menu(items) => items,
            _ => Vec::new(),
        }
    }

    /// Cached footer content.
    #[instrument(skip(self))]
    pub async fn footer(&self) -> FooterContent {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .settings
            .get_with("footer".to_owned(), async move {
                CacheValue::Footer(Box::new(catalog.footer().get().await))
            })
            .await;
        match value {
            CacheValue::Footer(content) => *content,
            _ => FooterContent::default(),
        }
    }

    /// Cached WhatsApp configuration.
    #[instrument(skip(self))]
    pub async fn whatsapp(&self) -> WhatsAppConfig {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .settings
            .get_with("whatsapp_config".to_owned(), async move {
                CacheValue::Whatsapp(Box::new(catalog.whatsapp().get().await))
            })
            .await;
        match value {
            CacheValue::Whatsapp(config) => *config,
            _ => WhatsAppConfig::default(),
        }
    }

    /// Cached home content document.
    #[instrument(skip(self))]
    pub async fn home_content(&self) -> HomeContent {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .settings
            .get_with("home_content".to_owned(), async move {
                CacheValue::Home(Box::new(catalog.home_content().get().await))
            })
            .await;
        match value {
            CacheValue::Home(content) => *content,
            _ => HomeContent::default(),
        }
    }

    /// Cached coverage list.
    #[instrument(skip(self))]
    pub async fn cities(&self) -> Vec<CityMapping> {
        let catalog = self.inner.catalog.clone();
        let value = self
            .inner
            .settings
            .get_with("cities".to_owned(), async move {
                CacheValue::Cities(catalog.cities().get().await)
            })
            .await;
        match value {
            CacheValue::Cities(cities) => cities,
            _ => Vec::new(),
        }
    }

    // =========================================================================
    // Mutations (invalidate-on-success)
    // =========================================================================

    /// Create a product and invalidate the product family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::ProductStore::create`].
    pub async fn create_product(&self, input: NewProduct) -> Result<Product, StoreError> {
        let product = self.inner.catalog.products().create(input).await?;
        self.invalidate_products().await;
        Ok(product)
    }

    /// Update a product and invalidate the product family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::ProductStore::update`].
    pub async fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product, StoreError> {
        let product = self.inner.catalog.products().update(id, patch).await?;
        self.invalidate_products().await;
        Ok(product)
    }

    /// Delete a product and invalidate the product family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::ProductStore::delete`].
    pub async fn delete_product(&self, id: &str) -> Result<bool, StoreError> {
        let deleted = self.inner.catalog.products().delete(id).await?;
        self.invalidate_products().await;
        Ok(deleted)
    }

    /// Insert-or-replace a product keyed by slug and invalidate the product
    /// family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::ProductStore::upsert`].
    pub async fn upsert_product(&self, product: &Product) -> Result<(), StoreError> {
        self.inner.catalog.products().upsert(product).await?;
        self.invalidate_products().await;
        Ok(())
    }

    /// Bulk-seed the bundled catalog and invalidate the product family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::ProductStore::sync_defaults`].
    pub async fn sync_default_products(&self) -> Result<usize, StoreError> {
        let count = self.inner.catalog.products().sync_defaults().await?;
        self.invalidate_products().await;
        Ok(count)
    }

    /// Create a testimonial and invalidate the testimonial family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::TestimonialStore::create`].
    pub async fn create_testimonial(&self, input: NewTestimonial) -> Result<Testimonial, StoreError> {
        let testimonial = self.inner.catalog.testimonials().create(input).await?;
        self.invalidate_testimonials().await;
        Ok(testimonial)
    }

    /// Update a testimonial and invalidate the testimonial family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::TestimonialStore::update`].
    pub async fn update_testimonial(
        &self,
        id: &str,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, StoreError> {
        let testimonial = self.inner.catalog.testimonials().update(id, patch).await?;
        self.invalidate_testimonials().await;
        Ok(testimonial)
    }

    /// Delete a testimonial and invalidate the testimonial family.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::TestimonialStore::delete`].
    pub async fn delete_testimonial(&self, id: &str) -> Result<bool, StoreError> {
        let deleted = self.inner.catalog.testimonials().delete(id).await?;
        self.invalidate_testimonials().await;
        Ok(deleted)
    }

    /// Save navigation and drop its cache entry.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::NavigationStore::save`].
    pub async fn save_navigation(&self, items: Vec<MenuItem>) -> Result<(), StoreError> {
        self.inner.catalog.navigation().save(items).await?;
        self.inner.settings.invalidate("navigation").await;
        Ok(())
    }

    /// Save footer content and drop its cache entry.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::FooterStore::save`].
    pub async fn save_footer(&self, content: &FooterContent) -> Result<(), StoreError> {
        self.inner.catalog.footer().save(content).await?;
        self.inner.settings.invalidate("footer").await;
        Ok(())
    }

    /// Save WhatsApp configuration and drop its cache entry.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::WhatsappStore::save`].
    pub async fn save_whatsapp(&self, config: &WhatsAppConfig) -> Result<(), StoreError> {
        self.inner.catalog.whatsapp().save(config).await?;
        self.inner.settings.invalidate("whatsapp_config").await;
        Ok(())
    }

    /// Save home content and drop its cache entry.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::HomeContentStore::save`].
    pub async fn save_home_content(&self, content: &HomeContent) -> Result<(), StoreError> {
        self.inner.catalog.home_content().save(content).await?;
        self.inner.settings.invalidate("home_content").await;
        Ok(())
    }

    /// Save the coverage list and drop its cache entry.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::CitiesStore::save`].
    pub async fn save_cities(&self, cities: Vec<CityMapping>) -> Result<(), StoreError> {
        self.inner.catalog.cities().save(cities).await?;
        self.inner.settings.invalidate("cities").await;
        Ok(())
    }

    /// Record a contact-form submission. Inquiries are uncached (admin-only,
    /// always fresh), so nothing is invalidated.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::InquiryStore::create`].
    pub async fn create_inquiry(&self, input: NewInquiry) -> Result<Inquiry, StoreError> {
        self.inner.catalog.inquiries().create(input).await
    }

    /// Move an inquiry through the workflow.
    ///
    /// # Errors
    ///
    /// See [`crate::stores::InquiryStore::set_status`].
    pub async fn set_inquiry_status(
        &self,
        id: &str,
        next: InquiryStatus,
    ) -> Result<Inquiry, StoreError> {
        self.inner.catalog.inquiries().set_status(id, next).await
    }

    async fn invalidate_products(&self) {
        self.inner.products.invalidate_all();
        self.inner.products.run_pending_tasks().await;
    }

    async fn invalidate_testimonials(&self) {
        self.inner.testimonials.invalidate_all();
        self.inner.testimonials.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use crate::fallback;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn offline_queries() -> CachedCatalog {
        Catalog::new(BackendConfig::unconfigured()).cached()
    }

    #[tokio::test]
    async fn test_products_cached_after_first_read() {
        let queries = offline_queries();
        let first = queries.products().await;
        assert_eq!(first, fallback::products());

        queries.inner.products.run_pending_tasks().await;
        assert!(queries.inner.products.contains_key("all"));

        let second = queries.products().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_dirty_and_clean_slug_share_cache_entry() {
        let queries = offline_queries();
        let dirty = "https://example.com/produk/buket-mawar-merah-premium";
        let via_dirty = queries.product_by_slug(dirty).await.expect("dirty");
        let via_clean = queries
            .product_by_slug("buket-mawar-merah-premium")
            .await
            .expect("clean");
        assert_eq!(via_dirty, via_clean);

        queries.inner.products.run_pending_tasks().await;
        assert_eq!(queries.inner.products.entry_count(), 1);
    }

    #[tokio::test]
    async fn test_negative_slug_lookup_cached_and_invalidated() {
        let queries = offline_queries();
        assert!(queries.product_by_slug("tidak-ada").await.is_err());

        queries.inner.products.run_pending_tasks().await;
        assert!(queries.inner.products.contains_key("slug:tidak-ada"));

        queries.invalidate_products().await;
        assert!(!queries.inner.products.contains_key("slug:tidak-ada"));
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_cache_intact() {
        let queries = offline_queries();
        let _ = queries.products().await;
        queries.inner.products.run_pending_tasks().await;
        assert!(queries.inner.products.contains_key("all"));

        // Unconfigured backend: the write fails, so nothing is invalidated.
        let result = queries.delete_product("1").await;
        assert!(result.is_err());
        assert!(queries.inner.products.contains_key("all"));
    }

    #[tokio::test]
    async fn test_invalidation_forces_refetch() {
        let queries = offline_queries();
        let _ = queries.products().await;
        queries.invalidate_products().await;
        assert!(!queries.inner.products.contains_key("all"));

        let refetched = queries.products().await;
        assert_eq!(refetched, fallback::products());
    }

    #[tokio::test]
    async fn test_distinct_parameters_get_distinct_keys() {
        let queries = offline_queries();
        let two = queries
            .products_by_category(Category::BuketBunga, 2)
            .await;
        let three = queries
            .products_by_category(Category::BuketBunga, 3)
            .await;
        assert_eq!(two.len(), 2);
        assert_eq!(three.len(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_reads_coalesce() {
        // Pins the coalescing contract the layer relies on: one init future
        // per key, no matter how many concurrent readers.
        let cache: Cache<String, usize> = Cache::builder().max_capacity(10).build();
        let calls = Arc::new(AtomicUsize::new(0));

        let fetch = |calls: Arc<AtomicUsize>| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            42_usize
        };

        let (a, b) = tokio::join!(
            cache.get_with("k".to_owned(), fetch(calls.clone())),
            cache.get_with("k".to_owned(), fetch(calls.clone())),
        );
        assert_eq!((a, b), (42, 42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_settings_reads_serve_defaults_offline() {
        let queries = offline_queries();
        assert_eq!(queries.navigation().await, fallback::default_navigation());
        assert_eq!(queries.whatsapp().await, fallback::default_whatsapp());
        assert_eq!(queries.cities().await, fallback::default_cities());
        assert_eq!(
            queries.home_content().await,
            fallback::default_home_content()
        );
    }
}
