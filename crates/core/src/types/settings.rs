//! Settings documents stored as JSON blobs in the generic settings store.
//!
//! Field names serialize as camelCase to stay wire-compatible with the blobs
//! the admin UI has historically written. Every document derives `Default`
//! and decodes leniently (`#[serde(default)]`), so a partial or legacy blob
//! never fails a read.

use serde::{Deserialize, Serialize};

/// A site navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub href: String,
    /// Display sequence, ascending.
    pub order: i32,
    /// Hidden items are kept in storage but excluded from public rendering.
    pub visible: bool,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            href: String::new(),
            order: 0,
            visible: true,
        }
    }
}

/// Stable sort by `order` ascending.
#[must_use]
pub fn sorted_menu(mut items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.sort_by_key(|item| item.order);
    items
}

/// Footer content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub instagram_url: String,
    pub facebook_url: String,
}

/// WhatsApp contact configuration.
///
/// Numbers are stored digit-only with the country code prefix and no
/// leading `+`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsAppConfig {
    pub default_number: String,
    pub consultation_message: String,
    pub order_message: String,
}

/// Home page content document (hero / features / call-to-action sections).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    pub hero: HeroContent,
    pub features: FeaturesContent,
    pub cta: CtaContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub subtitle: String,
    pub title: String,
    pub title_highlight: String,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub stats_customers: String,
    pub stats_orders: String,
    pub stats_rating: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturesContent {
    pub section_subtitle: String,
    pub section_title: String,
    pub section_description: String,
    pub feature1_title: String,
    pub feature1_desc: String,
    pub feature2_title: String,
    pub feature2_desc: String,
    pub feature3_title: String,
    pub feature3_desc: String,
    pub feature4_title: String,
    pub feature4_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaContent {
    pub title: String,
    pub title_highlight: String,
    pub description: String,
    pub button_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, order: i32) -> MenuItem {
        MenuItem {
            id: id.to_owned(),
            name: id.to_owned(),
            href: format!("/{id}"),
            order,
            visible: true,
        }
    }

    #[test]
    fn test_sorted_menu_ascending() {
        let items = vec![item("c", 3), item("a", 1), item("b", 2)];
        let sorted = sorted_menu(items);
        let ids: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_sorted_menu_is_stable() {
        let mut first = item("first", 1);
        first.visible = false;
        let items = vec![first.clone(), item("second", 1)];
        let sorted = sorted_menu(items);
        assert_eq!(sorted[0], first);
    }

    #[test]
    fn test_menu_item_camel_case_wire_format() {
        let json = r#"{"id":"1","name":"Beranda","href":"/","order":1,"visible":true}"#;
        let parsed: MenuItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.name, "Beranda");
        assert_eq!(parsed.order, 1);
    }

    #[test]
    fn test_home_content_partial_blob_decodes() {
        let json = r#"{"hero":{"title":"Hadirkan Kebahagiaan di","titleHighlight":"Setiap Momen"}}"#;
        let parsed: HomeContent = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.hero.title_highlight, "Setiap Momen");
        assert!(parsed.cta.button_text.is_empty());
    }
}
