//! Wire record shapes and their mapping functions.
//!
//! Two record shapes exist per entity: the snake_case row stored by the
//! backend and the canonical entity from `bloomgift-core`. The bundled
//! static dataset has a third, legacy shape. All mappings are pure and
//! total: optional wire booleans get their documented defaults
//! (`is_active = true`, feature flags `false`) and image references are
//! normalized into a single primary image plus a gallery.

mod inquiries;
mod products;
mod testimonials;

pub use inquiries::{InquiryInsertRow, InquiryRow, inquiry_from_row, new_inquiry_to_row};
pub use products::{
    ProductInsertRow, ProductPatchRow, ProductRow, StaticProduct, new_product_to_row,
    product_from_row, product_from_static, product_patch_to_row, product_to_row,
};
pub use testimonials::{
    StaticTestimonial, TestimonialInsertRow, TestimonialPatchRow, TestimonialRow,
    new_testimonial_to_row, testimonial_from_row, testimonial_from_static,
    testimonial_patch_to_row,
};

use serde::{Deserialize, Serialize};

/// Generic key/value row of the `site_settings` table. The value is a
/// serialized JSON document; decoding is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
}
