//! Delivery coverage types.

use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Island group used to organize the coverage list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Island {
    Jawa,
    Sumatra,
    Kalimantan,
    Sulawesi,
    Bali,
    PapuaMaluku,
}

impl Island {
    /// All island groups, in display order.
    pub const ALL: [Self; 6] = [
        Self::Jawa,
        Self::Sumatra,
        Self::Kalimantan,
        Self::Sulawesi,
        Self::Bali,
        Self::PapuaMaluku,
    ];

    /// The stored snake_case value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jawa => "jawa",
            Self::Sumatra => "sumatra",
            Self::Kalimantan => "kalimantan",
            Self::Sulawesi => "sulawesi",
            Self::Bali => "bali",
            Self::PapuaMaluku => "papua_maluku",
        }
    }

    /// Display label shown on the storefront.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jawa => "Jawa",
            Self::Sumatra => "Sumatra",
            Self::Kalimantan => "Kalimantan",
            Self::Sulawesi => "Sulawesi",
            Self::Bali => "Bali",
            Self::PapuaMaluku => "Papua & Maluku",
        }
    }

    /// Parse a stored island value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == value)
    }
}

impl std::fmt::Display for Island {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a covered city to the WhatsApp number that serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMapping {
    /// Deterministic: `slugify(island) + "-" + slugify(city)`.
    pub id: String,
    pub city: String,
    pub island: Island,
    /// Digits only, country code prefixed.
    pub whatsapp_number: String,
    pub is_active: bool,
}

impl CityMapping {
    /// Build a mapping with the derived id and `is_active = true`.
    #[must_use]
    pub fn new(island: Island, city: &str, whatsapp_number: &str) -> Self {
        Self {
            id: Self::derive_id(island, city),
            city: city.to_owned(),
            island,
            whatsapp_number: whatsapp_number.to_owned(),
            is_active: true,
        }
    }

    /// Derive the deterministic mapping id.
    #[must_use]
    pub fn derive_id(island: Island, city: &str) -> String {
        format!("{}-{}", slugify(island.as_str()), slugify(city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_id() {
        assert_eq!(CityMapping::derive_id(Island::Jawa, "Jakarta"), "jawa-jakarta");
        assert_eq!(
            CityMapping::derive_id(Island::PapuaMaluku, "Jayapura"),
            "papua-maluku-jayapura"
        );
    }

    #[test]
    fn test_island_serde_snake_case() {
        let json = serde_json::to_string(&Island::PapuaMaluku).expect("serialize");
        assert_eq!(json, "\"papua_maluku\"");
        let parsed: Island = serde_json::from_str("\"jawa\"").expect("deserialize");
        assert_eq!(parsed, Island::Jawa);
    }

    #[test]
    fn test_city_mapping_wire_format() {
        let mapping = CityMapping::new(Island::Bali, "Denpasar", "6285646420488");
        let json = serde_json::to_string(&mapping).expect("serialize");
        assert!(json.contains("\"whatsappNumber\":\"6285646420488\""));
        assert!(json.contains("\"isActive\":true"));
    }
}
