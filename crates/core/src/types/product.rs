//! Product catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category.
///
/// The catalog uses a fixed set of categories; category values are stored as
/// kebab-case strings both in the backend and in catalog URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BuketBunga,
    Hampers,
    KueTart,
    Dekorasi,
    PapanBunga,
    ParselNatal,
}

impl Category {
    /// All categories, in catalog display order.
    pub const ALL: [Self; 6] = [
        Self::BuketBunga,
        Self::Hampers,
        Self::KueTart,
        Self::Dekorasi,
        Self::PapanBunga,
        Self::ParselNatal,
    ];

    /// The stored kebab-case value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuketBunga => "buket-bunga",
            Self::Hampers => "hampers",
            Self::KueTart => "kue-tart",
            Self::Dekorasi => "dekorasi",
            Self::PapanBunga => "papan-bunga",
            Self::ParselNatal => "parsel-natal",
        }
    }

    /// Display label shown on the storefront.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BuketBunga => "Buket Bunga",
            Self::Hampers => "Hampers",
            Self::KueTart => "Kue & Tart",
            Self::Dekorasi => "Dekorasi",
            Self::PapanBunga => "Papan Bunga",
            Self::ParselNatal => "Parsel Natal",
        }
    }

    /// Parse a stored category value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// URL-safe, globally unique.
    pub slug: String,
    pub name: String,
    /// Price in rupiah.
    pub price: i64,
    /// Strikethrough price; `>= price` when present.
    pub original_price: Option<i64>,
    pub category: Category,
    pub description: String,
    /// Primary image shown on catalog cards.
    pub image_url: String,
    /// Full gallery, primary image first.
    pub images: Vec<String>,
    /// External marketplace deep link.
    pub product_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_best_seller: bool,
    pub is_exclusive: bool,
    pub is_premium: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Discount percentage implied by `original_price`, if any.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?;
        if original <= 0 || original <= self.price {
            return None;
        }
        let percent = ((original - self.price) * 100) / original;
        u8::try_from(percent).ok()
    }
}

/// Input for creating a product.
///
/// `slug` is derived from `name` when absent; boolean flags default to
/// inactive-feature / active-listing semantics at the façade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub slug: Option<String>,
    pub price: i64,
    pub original_price: Option<i64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_exclusive: Option<bool>,
    pub is_premium: Option<bool>,
}

/// Partial update for a product. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_exclusive: Option<bool>,
    pub is_premium: Option<bool>,
}

impl ProductPatch {
    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.product_url.is_none()
            && self.is_active.is_none()
            && self.is_featured.is_none()
            && self.is_best_seller.is_none()
            && self.is_exclusive.is_none()
            && self.is_premium.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&Category::ParselNatal).expect("serialize");
        assert_eq!(json, "\"parsel-natal\"");
        let parsed: Category = serde_json::from_str("\"kue-tart\"").expect("deserialize");
        assert_eq!(parsed, Category::KueTart);
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(Category::parse("elektronik"), None);
    }

    #[test]
    fn test_discount_percent() {
        let product = Product {
            id: "1".to_owned(),
            slug: "buket-mawar-merah-premium".to_owned(),
            name: "Buket Mawar Merah Premium".to_owned(),
            price: 450_000,
            original_price: Some(550_000),
            category: Category::BuketBunga,
            description: String::new(),
            image_url: String::new(),
            images: Vec::new(),
            product_url: None,
            is_active: true,
            is_featured: false,
            is_best_seller: false,
            is_exclusive: false,
            is_premium: false,
            created_at: None,
        };
        assert_eq!(product.discount_percent(), Some(18));

        let no_discount = Product {
            original_price: None,
            ..product
        };
        assert_eq!(no_discount.discount_percent(), None);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            price: Some(100_000),
            ..ProductPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
