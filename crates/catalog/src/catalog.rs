//! Catalog aggregate: the composition point for the data access layer.

use std::sync::Arc;

use crate::cache::CachedCatalog;
use crate::config::BackendConfig;
use crate::stores::{
    CitiesStore, FooterStore, HomeContentStore, InquiryStore, NavigationStore, ProductStore,
    TestimonialStore, WhatsappStore,
};
use crate::supabase::RestClient;
use crate::supabase::auth::AuthClient;
use crate::supabase::storage::StorageClient;

/// The assembled data access layer.
///
/// Construction evaluates the configuration probe exactly once and passes
/// the immutable result into every façade; there is no global state and no
/// hot-reload. Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    config: BackendConfig,
    products: ProductStore,
    testimonials: TestimonialStore,
    navigation: NavigationStore,
    footer: FooterStore,
    whatsapp: WhatsappStore,
    home_content: HomeContentStore,
    cities: CitiesStore,
    inquiries: InquiryStore,
    auth: AuthClient,
    storage: StorageClient,
}

impl Catalog {
    /// Build every façade from one shared REST client.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        let rest = RestClient::new(&config);
        let auth = AuthClient::new(&config);
        let storage = StorageClient::new(&config);

        Self {
            inner: Arc::new(CatalogInner {
                products: ProductStore::new(rest.clone()),
                testimonials: TestimonialStore::new(rest.clone()),
                navigation: NavigationStore::new(rest.clone()),
                footer: FooterStore::new(rest.clone()),
                whatsapp: WhatsappStore::new(rest.clone()),
                home_content: HomeContentStore::new(rest.clone()),
                cities: CitiesStore::new(rest.clone()),
                inquiries: InquiryStore::new(rest),
                auth,
                storage,
                config,
            }),
        }
    }

    /// Load configuration from the environment and build the catalog.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    /// The probe result captured at construction: true when reads hit the
    /// live backend, false when the bundled dataset serves them.
    #[must_use]
    pub fn is_backend_configured(&self) -> bool {
        self.inner.config.is_configured()
    }

    /// Connection configuration (key redacted in `Debug`).
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    /// Read-through cached query layer over this catalog.
    #[must_use]
    pub fn cached(&self) -> CachedCatalog {
        CachedCatalog::new(self.clone())
    }

    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    #[must_use]
    pub fn testimonials(&self) -> &TestimonialStore {
        &self.inner.testimonials
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationStore {
        &self.inner.navigation
    }

    #[must_use]
    pub fn footer(&self) -> &FooterStore {
        &self.inner.footer
    }

    #[must_use]
    pub fn whatsapp(&self) -> &WhatsappStore {
        &self.inner.whatsapp
    }

    #[must_use]
    pub fn home_content(&self) -> &HomeContentStore {
        &self.inner.home_content
    }

    #[must_use]
    pub fn cities(&self) -> &CitiesStore {
        &self.inner.cities
    }

    #[must_use]
    pub fn inquiries(&self) -> &InquiryStore {
        &self.inner.inquiries
    }

    #[must_use]
    pub fn auth(&self) -> &AuthClient {
        &self.inner.auth
    }

    #[must_use]
    pub fn storage(&self) -> &StorageClient {
        &self.inner.storage
    }
}
