//! Settings-blob façades.
//!
//! Navigation, footer, WhatsApp config, cities, and home content are all
//! stored as JSON blobs in the generic `site_settings` key/value table.
//! [`SettingsStore`] is the one typed repository behind them: a fixed key, a
//! JSON codec for the value type, and a defined default for every way a read
//! can come up empty. An absent row is an expected, common state, so
//! settings reads are never retried.
//!
//! Keys: `navigation`, `footer`, `whatsapp_config`, `cities`, `home_content`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use bloomgift_core::{CityMapping, FooterContent, HomeContent, MenuItem, WhatsAppConfig, sorted_menu};

use crate::error::StoreError;
use crate::fallback;
use crate::supabase::records::SettingRow;
use crate::supabase::{FetchError, RestClient};

const TABLE: &str = "site_settings";

/// Typed repository over a single settings blob.
#[derive(Clone)]
pub struct SettingsStore<T> {
    rest: RestClient,
    key: &'static str,
    default: fn() -> T,
}

impl<T: Serialize + DeserializeOwned> SettingsStore<T> {
    pub(crate) fn new(rest: RestClient, key: &'static str, default: fn() -> T) -> Self {
        Self { rest, key, default }
    }

    /// Read and decode the blob. Unconfigured backend, absent row, fetch
    /// failure, and decode failure all yield the default, never an error.
    #[instrument(skip(self), fields(key = self.key))]
    pub async fn get(&self) -> T {
        if !self.rest.is_configured() {
            return (self.default)();
        }

        let row = match self.rest.select_single::<SettingRow>(TABLE, "key", self.key).await {
            Ok(Some(row)) => row,
            Ok(None) => return (self.default)(),
            Err(err) => {
                debug!(error = %err, key = self.key, "settings fetch failed, using default");
                return (self.default)();
            }
        };

        match serde_json::from_str(&row.value) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, key = self.key, "settings blob decode failed, using default");
                (self.default)()
            }
        }
    }

    /// JSON-encode and upsert under the fixed key.
    ///
    /// # Errors
    ///
    /// `Configuration` in fallback mode; backend faults propagate.
    #[instrument(skip(self, value), fields(key = self.key))]
    pub async fn save(&self, value: &T) -> Result<(), StoreError> {
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        let row = SettingRow {
            key: self.key.to_owned(),
            value: serde_json::to_string(value).map_err(FetchError::from)?,
        };
        self.rest
            .upsert::<serde_json::Value, _>(TABLE, &row, "key")
            .await?;
        Ok(())
    }
}

// =============================================================================
// Typed wrappers
// =============================================================================

/// Site navigation façade. Listings are always sorted by `order` ascending.
#[derive(Clone)]
pub struct NavigationStore {
    store: SettingsStore<Vec<MenuItem>>,
}

impl NavigationStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self {
            store: SettingsStore::new(rest, "navigation", fallback::default_navigation),
        }
    }

    /// Every entry, hidden ones included, sorted by `order` ascending.
    pub async fn get(&self) -> Vec<MenuItem> {
        sorted_menu(self.store.get().await)
    }

    /// Visible entries only, for public rendering.
    pub async fn public_items(&self) -> Vec<MenuItem> {
        let mut items = self.get().await;
        items.retain(|item| item.visible);
        items
    }

    /// Persist the full list (hidden entries are retained in storage).
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub async fn save(&self, items: Vec<MenuItem>) -> Result<(), StoreError> {
        self.store.save(&items).await
    }
}

/// Footer content façade.
#[derive(Clone)]
pub struct FooterStore {
    store: SettingsStore<FooterContent>,
}

impl FooterStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self {
            store: SettingsStore::new(rest, "footer", fallback::default_footer),
        }
    }

    pub async fn get(&self) -> FooterContent {
        self.store.get().await
    }

    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub async fn save(&self, content: &FooterContent) -> Result<(), StoreError> {
        self.store.save(content).await
    }
}

/// WhatsApp contact configuration façade.
#[derive(Clone)]
pub struct WhatsappStore {
    store: SettingsStore<WhatsAppConfig>,
}

impl WhatsappStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self {
            store: SettingsStore::new(rest, "whatsapp_config", fallback::default_whatsapp),
        }
    }

    pub async fn get(&self) -> WhatsAppConfig {
        self.store.get().await
    }

    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub async fn save(&self, config: &WhatsAppConfig) -> Result<(), StoreError> {
        self.store.save(config).await
    }
}

/// Home page content façade.
#[derive(Clone)]
pub struct HomeContentStore {
    store: SettingsStore<HomeContent>,
}

impl HomeContentStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self {
            store: SettingsStore::new(rest, "home_content", fallback::default_home_content),
        }
    }

    pub async fn get(&self) -> HomeContent {
        self.store.get().await
    }

    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub async fn save(&self, content: &HomeContent) -> Result<(), StoreError> {
        self.store.save(content).await
    }
}

/// Delivery coverage façade.
#[derive(Clone)]
pub struct CitiesStore {
    store: SettingsStore<Vec<CityMapping>>,
}

impl CitiesStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self {
            store: SettingsStore::new(rest, "cities", fallback::default_cities),
        }
    }

    /// The full coverage list.
    pub async fn get(&self) -> Vec<CityMapping> {
        self.store.get().await
    }

    /// Active mappings only, for public rendering.
    pub async fn active(&self) -> Vec<CityMapping> {
        let mut cities = self.get().await;
        cities.retain(|city| city.is_active);
        cities
    }

    /// Persist the list, deduplicated by id (the last occurrence wins), so
    /// upserting a batch that reuses ids stores one row per distinct id.
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub async fn save(&self, cities: Vec<CityMapping>) -> Result<(), StoreError> {
        self.store.save(&merge_by_id(cities)).await
    }

    /// Rebuild the list from the bundled coverage table; returns how many
    /// mappings were written.
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub async fn sync_defaults(&self) -> Result<usize, StoreError> {
        let cities = fallback::default_cities();
        let count = cities.len();
        self.save(cities).await?;
        Ok(count)
    }
}

/// Deduplicate by id; the last occurrence wins, first-appearance order is
/// kept.
pub(crate) fn merge_by_id(cities: Vec<CityMapping>) -> Vec<CityMapping> {
    let mut merged: Vec<CityMapping> = Vec::with_capacity(cities.len());
    for city in cities {
        if let Some(existing) = merged.iter_mut().find(|c| c.id == city.id) {
            *existing = city;
        } else {
            merged.push(city);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use bloomgift_core::Island;

    fn offline_rest() -> RestClient {
        RestClient::new(&BackendConfig::unconfigured())
    }

    #[tokio::test]
    async fn test_navigation_default_sorted_and_visible() {
        let store = NavigationStore::new(offline_rest());
        let items = store.get().await;
        assert!(items.windows(2).all(|pair| pair[0].order <= pair[1].order));
        assert_eq!(store.public_items().await.len(), items.len());
    }

    #[tokio::test]
    async fn test_settings_get_never_fails_offline() {
        let whatsapp = WhatsappStore::new(offline_rest()).get().await;
        assert_eq!(whatsapp.default_number, fallback::DEFAULT_WHATSAPP_NUMBER);

        let home = HomeContentStore::new(offline_rest()).get().await;
        assert_eq!(home.hero.title_highlight, "Setiap Momen");

        let footer = FooterStore::new(offline_rest()).get().await;
        assert!(!footer.email.is_empty());
    }

    #[tokio::test]
    async fn test_save_refused_offline() {
        let store = NavigationStore::new(offline_rest());
        let result = store.save(fallback::default_navigation()).await;
        assert!(matches!(result, Err(StoreError::Configuration(_))));
    }

    #[test]
    fn test_merge_by_id_last_wins() {
        let mut cities: Vec<CityMapping> = (0..18)
            .map(|i| CityMapping::new(Island::Jawa, &format!("Kota {i}"), "628111"))
            .collect();
        let mut updated = CityMapping::new(Island::Jawa, "Kota 3", "628999");
        updated.is_active = false;
        cities.push(updated.clone());
        cities.push(CityMapping::new(Island::Bali, "Denpasar", "628222"));

        let merged = merge_by_id(cities);
        // 20 entries, 19 distinct ids.
        assert_eq!(merged.len(), 19);
        let kota3 = merged.iter().find(|c| c.id == updated.id).expect("kota 3");
        assert_eq!(kota3.whatsapp_number, "628999");
        assert!(!kota3.is_active);
    }
}
