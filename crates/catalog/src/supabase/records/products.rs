//! Product record shapes and conversion functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloomgift_core::slug::slugify;
use bloomgift_core::{Category, NewProduct, Product, ProductPatch};

/// Wire shape of a `products` row.
///
/// Booleans and text columns are nullable in storage; defaults are applied
/// by [`product_from_row`], not by serde, so the defaulting rules live in
/// one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_best_seller: Option<bool>,
    #[serde(default)]
    pub is_exclusive: Option<bool>,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert/upsert shape of a `products` row. Booleans are always written
/// explicitly so storage never has to guess a default.
#[derive(Debug, Clone, Serialize)]
pub struct ProductInsertRow {
    pub slug: String,
    pub name: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_exclusive: bool,
    pub is_premium: bool,
}

/// Patch shape: only set fields are serialized, so unset fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_best_seller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exclusive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

/// Shape of the bundled static dataset (legacy layout: flat flags, gallery
/// list, no explicit active flag).
#[derive(Debug, Clone)]
pub struct StaticProduct {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub original_price: Option<i64>,
    pub category: Category,
    pub description: &'static str,
    pub short_description: &'static str,
    pub images: &'static [&'static str],
    pub featured: bool,
    pub best_seller: bool,
    pub exclusive: bool,
    pub product_url: &'static str,
}

// =============================================================================
// Wire row conversions
// =============================================================================

/// Map a wire row to the canonical shape.
#[must_use]
pub fn product_from_row(row: ProductRow) -> Product {
    let mut images = row.images.unwrap_or_default();
    images.retain(|url| !url.is_empty());
    if images.is_empty()
        && let Some(url) = row.image_url
        && !url.is_empty()
    {
        images.push(url);
    }
    let image_url = images.first().cloned().unwrap_or_default();

    Product {
        id: row.id,
        slug: row.slug,
        name: row.name,
        price: row.price,
        original_price: row.original_price,
        category: row.category,
        description: row.description.unwrap_or_default(),
        image_url,
        images,
        product_url: row.product_url.filter(|url| !url.is_empty()),
        is_active: row.is_active.unwrap_or(true),
        is_featured: row.is_featured.unwrap_or(false),
        is_best_seller: row.is_best_seller.unwrap_or(false),
        is_exclusive: row.is_exclusive.unwrap_or(false),
        is_premium: row.is_premium.unwrap_or(false),
        created_at: row.created_at,
    }
}

/// Build the insert row for a creation request. The slug falls back to
/// `slugify(name)`; `is_active` defaults to true, feature flags to false.
#[must_use]
pub fn new_product_to_row(input: NewProduct, category: Category) -> ProductInsertRow {
    let slug = input
        .slug
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| slugify(&input.name));

    ProductInsertRow {
        slug,
        name: input.name,
        price: input.price,
        original_price: input.original_price,
        category,
        description: input.description,
        image_url: input.image_url,
        product_url: input.product_url,
        is_active: input.is_active.unwrap_or(true),
        is_featured: input.is_featured.unwrap_or(false),
        is_best_seller: input.is_best_seller.unwrap_or(false),
        is_exclusive: input.is_exclusive.unwrap_or(false),
        is_premium: input.is_premium.unwrap_or(false),
    }
}

/// Build the upsert row for an existing entity (bulk seeding path).
#[must_use]
pub fn product_to_row(product: &Product) -> ProductInsertRow {
    ProductInsertRow {
        slug: product.slug.clone(),
        name: product.name.clone(),
        price: product.price,
        original_price: product.original_price,
        category: product.category,
        description: Some(product.description.clone()),
        image_url: (!product.image_url.is_empty()).then(|| product.image_url.clone()),
        product_url: product.product_url.clone(),
        is_active: product.is_active,
        is_featured: product.is_featured,
        is_best_seller: product.is_best_seller,
        is_exclusive: product.is_exclusive,
        is_premium: product.is_premium,
    }
}

/// Build the patch row for a partial update.
#[must_use]
pub fn product_patch_to_row(patch: &ProductPatch) -> ProductPatchRow {
    ProductPatchRow {
        name: patch.name.clone(),
        slug: patch.slug.clone(),
        price: patch.price,
        original_price: patch.original_price,
        category: patch.category,
        description: patch.description.clone(),
        image_url: patch.image_url.clone(),
        product_url: patch.product_url.clone(),
        is_active: patch.is_active,
        is_featured: patch.is_featured,
        is_best_seller: patch.is_best_seller,
        is_exclusive: patch.is_exclusive,
        is_premium: patch.is_premium,
    }
}

// =============================================================================
// Static dataset conversions
// =============================================================================

/// Map a bundled static record to the canonical shape. The static catalog
/// is always active; the premium flag postdates the dataset.
#[must_use]
pub fn product_from_static(record: &StaticProduct) -> Product {
    let images: Vec<String> = record.images.iter().map(|&url| url.to_owned()).collect();
    let image_url = images.first().cloned().unwrap_or_default();

    Product {
        id: record.id.to_owned(),
        slug: record.slug.to_owned(),
        name: record.name.to_owned(),
        price: record.price,
        original_price: record.original_price,
        category: record.category,
        description: record.description.to_owned(),
        image_url,
        images,
        product_url: (!record.product_url.is_empty()).then(|| record.product_url.to_owned()),
        is_active: true,
        is_featured: record.featured,
        is_best_seller: record.best_seller,
        is_exclusive: record.exclusive,
        is_premium: false,
        created_at: None,
    }
}
