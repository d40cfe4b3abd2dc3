//! Resource façades over the hosted backend with static fallback.
//!
//! Uniform contract across all façades:
//!
//! - Reads try the live backend first; any failure (network, missing table,
//!   permission) degrades to the bundled dataset, or to a defined default /
//!   empty list for resources without one. When the backend is
//!   unconfigured the network is skipped entirely.
//! - Writes never fall back: static data is immutable, so create, update,
//!   upsert, and delete fail with [`crate::StoreError::Configuration`] in
//!   fallback mode and propagate backend faults otherwise.
//! - Required-field validation happens before any network call.
//!
//! Fallback sources per resource: products and testimonials have bundled
//! lists; navigation, footer, WhatsApp config, cities, and home content
//! have defined defaults; inquiries degrade to an empty list.

mod inquiries;
mod products;
mod settings;
mod testimonials;

pub use inquiries::InquiryStore;
pub use products::ProductStore;
pub use settings::{
    CitiesStore, FooterStore, HomeContentStore, NavigationStore, SettingsStore, WhatsappStore,
};
pub use testimonials::TestimonialStore;
