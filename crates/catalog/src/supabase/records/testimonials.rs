//! Testimonial record shapes and conversion functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloomgift_core::{NewTestimonial, Testimonial, TestimonialPatch};

/// Wire shape of a `testimonials` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub is_approved: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert shape of a `testimonials` row.
#[derive(Debug, Clone, Serialize)]
pub struct TestimonialInsertRow {
    pub name: String,
    pub content: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub is_approved: bool,
}

/// Patch shape: only set fields are serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestimonialPatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

/// Shape of the bundled seed list.
#[derive(Debug, Clone)]
pub struct StaticTestimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub product: &'static str,
}

/// Map a wire row to the canonical shape. A missing approval flag is
/// treated as not approved: the public gate must never open by accident.
#[must_use]
pub fn testimonial_from_row(row: TestimonialRow) -> Testimonial {
    Testimonial {
        id: row.id,
        name: row.name,
        role: row.role.filter(|r| !r.is_empty()),
        content: row.content,
        rating: row.rating,
        product: row.product.filter(|p| !p.is_empty()),
        is_approved: row.is_approved.unwrap_or(false),
        created_at: row.created_at,
    }
}

/// Build the insert row. Admin-created entries are approved unless the
/// caller says otherwise.
#[must_use]
pub fn new_testimonial_to_row(input: NewTestimonial) -> TestimonialInsertRow {
    TestimonialInsertRow {
        name: input.name,
        content: input.content,
        rating: input.rating,
        role: input.role.filter(|r| !r.is_empty()),
        product: input.product.filter(|p| !p.is_empty()),
        is_approved: input.is_approved.unwrap_or(true),
    }
}

/// Build the patch row for a partial update.
#[must_use]
pub fn testimonial_patch_to_row(patch: &TestimonialPatch) -> TestimonialPatchRow {
    TestimonialPatchRow {
        name: patch.name.clone(),
        role: patch.role.clone(),
        content: patch.content.clone(),
        rating: patch.rating,
        product: patch.product.clone(),
        is_approved: patch.is_approved,
    }
}

/// Map a bundled seed record to the canonical shape. Seed entries are
/// approved by definition.
#[must_use]
pub fn testimonial_from_static(record: &StaticTestimonial) -> Testimonial {
    Testimonial {
        id: record.id.to_owned(),
        name: record.name.to_owned(),
        role: (!record.role.is_empty()).then(|| record.role.to_owned()),
        content: record.content.to_owned(),
        rating: record.rating,
        product: (!record.product.is_empty()).then(|| record.product.to_owned()),
        is_approved: true,
        created_at: None,
    }
}
