//! Product façade.

use tracing::{instrument, warn};

use bloomgift_core::slug::clean_slug;
use bloomgift_core::{Category, NewProduct, Product, ProductPatch};

use crate::error::StoreError;
use crate::fallback;
use crate::supabase::records::{
    ProductRow, new_product_to_row, product_from_row, product_patch_to_row, product_to_row,
};
use crate::supabase::{FetchError, RestClient};

const TABLE: &str = "products";
const ORDER_COLUMN: &str = "created_at";

/// Façade over the product catalog: live backend first, bundled dataset as
/// the read fallback.
#[derive(Clone)]
pub struct ProductStore {
    rest: RestClient,
}

impl ProductStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    // =========================================================================
    // Reads (fallback-absorbing)
    // =========================================================================

    /// All products, ordered by creation time ascending. Never fails: any
    /// live read error degrades to the bundled catalog.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Vec<Product> {
        if !self.rest.is_configured() {
            return fallback::products();
        }
        match self.fetch_all().await {
            Ok(products) => products,
            Err(err) => {
                warn!(error = %err, "product list fetch failed, serving bundled catalog");
                fallback::products()
            }
        }
    }

    /// Direct id lookup across the live store and the bundled catalog.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is absent from both sources.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Product, StoreError> {
        if self.rest.is_configured() {
            match self.rest.select_single::<ProductRow>(TABLE, "id", id).await {
                Ok(Some(row)) => return Ok(product_from_row(row)),
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "product lookup failed, checking bundled catalog");
                }
            }
        }
        fallback::products()
            .into_iter()
            .find(|product| product.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
    }

    /// Slug lookup with legacy-URL cleanup: tries the raw slug, then the
    /// cleaned slug, then a full-list scan comparing cleaned values (stored
    /// slugs can be dirty too).
    ///
    /// # Errors
    ///
    /// `NotFound` when no slug matches in either source.
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> Result<Product, StoreError> {
        let cleaned = clean_slug(slug);

        if self.rest.is_configured() {
            match self.lookup_slug(slug, cleaned).await {
                Ok(Some(product)) => return Ok(product),
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "slug lookup failed, checking bundled catalog");
                }
            }
        }

        fallback::products()
            .into_iter()
            .find(|product| clean_slug(&product.slug) == cleaned)
            .ok_or_else(|| StoreError::NotFound(format!("product slug {cleaned}")))
    }

    /// Bounded category listing, used for related-item strips.
    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category: Category, limit: u32) -> Vec<Product> {
        if self.rest.is_configured() {
            match self
                .rest
                .select_eq::<ProductRow>(TABLE, "category", category.as_str(), ORDER_COLUMN, Some(limit))
                .await
            {
                Ok(rows) => return rows.into_iter().map(product_from_row).collect(),
                Err(err) => {
                    warn!(error = %err, "category fetch failed, serving bundled catalog");
                }
            }
        }
        fallback::products()
            .into_iter()
            .filter(|product| product.category == category)
            .take(limit as usize)
            .collect()
    }

    // =========================================================================
    // Writes (never fall back)
    // =========================================================================

    /// Validate and create a product. Missing slug derives from the name;
    /// `is_active` defaults to true, feature flags to false.
    ///
    /// # Errors
    ///
    /// `Validation` before any network call, `Configuration` in fallback
    /// mode, `Conflict` on a duplicate slug.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let category = validate_new(&input)?;
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }

        let row = new_product_to_row(input, category);
        let slug = row.slug.clone();
        match self.rest.insert::<ProductRow, _>(TABLE, &row).await {
            Ok(stored) => Ok(product_from_row(stored)),
            Err(FetchError::Conflict(_)) => {
                Err(StoreError::Conflict(format!("slug already exists: {slug}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Partial update; unset fields are left untouched server-side.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed fields, `Configuration` in fallback mode,
    /// `NotFound` when the id does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: ProductPatch) -> Result<Product, StoreError> {
        if patch.is_empty() {
            return self.get_by_id(id).await;
        }
        validate_patch(&patch)?;
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }

        let row = product_patch_to_row(&patch);
        match self.rest.update_eq::<ProductRow, _>(TABLE, "id", id, &row).await? {
            Some(stored) => Ok(product_from_row(stored)),
            None => Err(StoreError::NotFound(format!("product {id}"))),
        }
    }

    /// Insert-or-replace keyed by slug.
    ///
    /// # Errors
    ///
    /// `Configuration` in fallback mode; backend faults propagate.
    #[instrument(skip(self, product), fields(slug = %product.slug))]
    pub async fn upsert(&self, product: &Product) -> Result<(), StoreError> {
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        let row = product_to_row(product);
        self.rest
            .upsert::<serde_json::Value, _>(TABLE, &row, "slug")
            .await?;
        Ok(())
    }

    /// Bulk-upsert the bundled catalog keyed by slug; returns the number of
    /// rows written. Idempotent seeding: rows sharing a slug are
    /// overwritten.
    ///
    /// # Errors
    ///
    /// `Configuration` in fallback mode; backend faults propagate.
    #[instrument(skip(self))]
    pub async fn sync_defaults(&self) -> Result<usize, StoreError> {
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        let rows: Vec<_> = fallback::products().iter().map(product_to_row).collect();
        let stored = self
            .rest
            .upsert::<serde_json::Value, _>(TABLE, &rows, "slug")
            .await?;
        Ok(stored.len())
    }

    /// Hard delete; idempotent. Deleting an absent id yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// `Configuration` in fallback mode; backend faults propagate.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        Ok(self.rest.delete_eq(TABLE, "id", id).await? > 0)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        let rows = match self.rest.select_all::<ProductRow>(TABLE, ORDER_COLUMN).await {
            Ok(rows) => rows,
            // One retry on transport faults; everything else is deterministic.
            Err(err) if err.is_transient() => {
                self.rest.select_all::<ProductRow>(TABLE, ORDER_COLUMN).await?
            }
            Err(err) => return Err(err),
        };
        Ok(rows.into_iter().map(product_from_row).collect())
    }

    async fn lookup_slug(&self, raw: &str, cleaned: &str) -> Result<Option<Product>, FetchError> {
        if let Some(row) = self.rest.select_single::<ProductRow>(TABLE, "slug", raw).await? {
            return Ok(Some(product_from_row(row)));
        }
        if cleaned != raw
            && let Some(row) = self
                .rest
                .select_single::<ProductRow>(TABLE, "slug", cleaned)
                .await?
        {
            return Ok(Some(product_from_row(row)));
        }
        let rows = self.rest.select_all::<ProductRow>(TABLE, ORDER_COLUMN).await?;
        Ok(rows
            .into_iter()
            .map(product_from_row)
            .find(|product| clean_slug(&product.slug) == cleaned))
    }
}

fn validate_new(input: &NewProduct) -> Result<Category, StoreError> {
    if input.name.trim().is_empty() {
        return Err(StoreError::Validation("name is required".to_owned()));
    }
    let Some(category) = input.category else {
        return Err(StoreError::Validation("category is required".to_owned()));
    };
    if input.price <= 0 {
        return Err(StoreError::Validation("price must be positive".to_owned()));
    }
    if let Some(original) = input.original_price
        && original < input.price
    {
        return Err(StoreError::Validation(
            "original price must not be below price".to_owned(),
        ));
    }
    Ok(category)
}

fn validate_patch(patch: &ProductPatch) -> Result<(), StoreError> {
    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(StoreError::Validation("name must not be empty".to_owned()));
    }
    if let Some(price) = patch.price
        && price <= 0
    {
        return Err(StoreError::Validation("price must be positive".to_owned()));
    }
    // Only checkable client-side when the patch carries both sides.
    if let (Some(price), Some(original)) = (patch.price, patch.original_price)
        && original < price
    {
        return Err(StoreError::Validation(
            "original price must not be below price".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    fn offline_store() -> ProductStore {
        ProductStore::new(RestClient::new(&BackendConfig::unconfigured()))
    }

    fn valid_input() -> NewProduct {
        NewProduct {
            name: "Buket Tulip".to_owned(),
            price: 300_000,
            category: Some(Category::BuketBunga),
            ..NewProduct::default()
        }
    }

    #[tokio::test]
    async fn test_get_all_serves_bundled_catalog_offline() {
        let products = offline_store().get_all().await;
        assert_eq!(products, fallback::products());
    }

    #[tokio::test]
    async fn test_get_by_slug_cleans_embedded_url() {
        let store = offline_store();
        let product = store
            .get_by_slug("https://example.com/produk/buket-mawar-merah-premium")
            .await
            .expect("product");
        assert_eq!(product.slug, "buket-mawar-merah-premium");
    }

    #[tokio::test]
    async fn test_get_by_slug_clean_and_raw_agree() {
        let store = offline_store();
        let dirty = "https://example.com/produk/buket-mawar-merah-premium";
        let via_dirty = store.get_by_slug(dirty).await.expect("dirty");
        let via_clean = store.get_by_slug(clean_slug(dirty)).await.expect("clean");
        assert_eq!(via_dirty, via_clean);
    }

    #[tokio::test]
    async fn test_get_by_slug_unknown_is_not_found() {
        let result = offline_store().get_by_slug("tidak-ada").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_by_category_respects_limit() {
        let store = offline_store();
        let products = store.get_by_category(Category::BuketBunga, 2).await;
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.category == Category::BuketBunga));
    }

    #[tokio::test]
    async fn test_create_validates_before_configuration_check() {
        let store = offline_store();
        let input = NewProduct {
            category: None,
            ..valid_input()
        };
        assert!(matches!(
            store.create(input).await,
            Err(StoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_original_price_below_price() {
        let store = offline_store();
        let input = NewProduct {
            original_price: Some(100_000),
            ..valid_input()
        };
        assert!(matches!(
            store.create(input).await,
            Err(StoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_writes_refused_offline() {
        let store = offline_store();
        assert!(matches!(
            store.create(valid_input()).await,
            Err(StoreError::Configuration(_))
        ));
        let patch = ProductPatch {
            price: Some(475_000),
            ..ProductPatch::default()
        };
        assert!(matches!(
            store.update("1", patch).await,
            Err(StoreError::Configuration(_))
        ));
        assert!(matches!(
            store.delete("1").await,
            Err(StoreError::Configuration(_))
        ));
        assert!(matches!(
            store.sync_defaults().await,
            Err(StoreError::Configuration(_))
        ));
    }
}
