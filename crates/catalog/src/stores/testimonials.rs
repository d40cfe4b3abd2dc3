//! Testimonial façade.

use tracing::{instrument, warn};

use bloomgift_core::{NewTestimonial, Testimonial, TestimonialPatch, valid_rating};

use crate::error::StoreError;
use crate::fallback;
use crate::supabase::records::{
    TestimonialRow, new_testimonial_to_row, testimonial_from_row, testimonial_patch_to_row,
};
use crate::supabase::{FetchError, RestClient};

const TABLE: &str = "testimonials";
const ORDER_COLUMN: &str = "created_at";

/// Façade over customer testimonials. Public reads are gated on approval;
/// the bundled seed list serves as the read fallback.
#[derive(Clone)]
pub struct TestimonialStore {
    rest: RestClient,
}

impl TestimonialStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Approved testimonials for public display, ordered by creation time.
    /// Never fails; never returns an unapproved entry.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Vec<Testimonial> {
        let mut testimonials = if self.rest.is_configured() {
            match self.fetch_approved().await {
                Ok(testimonials) => testimonials,
                Err(err) => {
                    warn!(error = %err, "testimonial fetch failed, serving bundled seed list");
                    fallback::testimonials()
                }
            }
        } else {
            fallback::testimonials()
        };
        // The approval gate holds regardless of where the data came from.
        testimonials.retain(|testimonial| testimonial.is_approved);
        testimonials
    }

    /// Every testimonial, including unapproved ones, for the admin area.
    #[instrument(skip(self))]
    pub async fn get_all_admin(&self) -> Vec<Testimonial> {
        if !self.rest.is_configured() {
            return fallback::testimonials();
        }
        match self.fetch_all().await {
            Ok(testimonials) => testimonials,
            Err(err) => {
                warn!(error = %err, "testimonial fetch failed, serving bundled seed list");
                fallback::testimonials()
            }
        }
    }

    /// Direct id lookup across the live store and the bundled seed list.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is absent from both sources.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Testimonial, StoreError> {
        if self.rest.is_configured() {
            match self
                .rest
                .select_single::<TestimonialRow>(TABLE, "id", id)
                .await
            {
                Ok(Some(row)) => return Ok(testimonial_from_row(row)),
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "testimonial lookup failed, checking bundled seed list");
                }
            }
        }
        fallback::testimonials()
            .into_iter()
            .find(|testimonial| testimonial.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("testimonial {id}")))
    }

    /// Validate and create a testimonial.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name/content or an out-of-range rating
    /// (before any network call), `Configuration` in fallback mode.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewTestimonial) -> Result<Testimonial, StoreError> {
        validate_new(&input)?;
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        let row = new_testimonial_to_row(input);
        let stored = self.rest.insert::<TestimonialRow, _>(TABLE, &row).await?;
        Ok(testimonial_from_row(stored))
    }

    /// Partial update; unset fields are left untouched server-side.
    ///
    /// # Errors
    ///
    /// `Validation` for an out-of-range rating or empty content,
    /// `Configuration` in fallback mode, `NotFound` for an unknown id.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: TestimonialPatch) -> Result<Testimonial, StoreError> {
        validate_patch(&patch)?;
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        let row = testimonial_patch_to_row(&patch);
        match self
            .rest
            .update_eq::<TestimonialRow, _>(TABLE, "id", id, &row)
            .await?
        {
            Some(stored) => Ok(testimonial_from_row(stored)),
            None => Err(StoreError::NotFound(format!("testimonial {id}"))),
        }
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

    async fn fetch_approved(&self) -> Result<Vec<Testimonial>, FetchError> {
        let rows = match self
            .rest
            .select_eq::<TestimonialRow>(TABLE, "is_approved", "true", ORDER_COLUMN, None)
            .await
        {
            Ok(rows) => rows,
            Err(err) if err.is_transient() => {
                self.rest
                    .select_eq::<TestimonialRow>(TABLE, "is_approved", "true", ORDER_COLUMN, None)
                    .await?
            }
            Err(err) => return Err(err),
        };
        Ok(rows.into_iter().map(testimonial_from_row).collect())
    }

    async fn fetch_all(&self) -> Result<Vec<Testimonial>, FetchError> {
        let rows = self
            .rest
            .select_all::<TestimonialRow>(TABLE, ORDER_COLUMN)
            .await?;
        Ok(rows.into_iter().map(testimonial_from_row).collect())
    }
}

fn validate_new(input: &NewTestimonial) -> Result<(), StoreError> {
    if input.name.trim().is_empty() {
        return Err(StoreError::Validation("name is required".to_owned()));
    }
    if input.content.trim().is_empty() {
        return Err(StoreError::Validation("content is required".to_owned()));
    }
    if !valid_rating(input.rating) {
        return Err(StoreError::Validation(
            "rating must be between 1 and 5".to_owned(),
        ));
    }
    Ok(())
}

fn validate_patch(patch: &TestimonialPatch) -> Result<(), StoreError> {
    if let Some(content) = &patch.content
        && content.trim().is_empty()
    {
        return Err(StoreError::Validation("content must not be empty".to_owned()));
    }
    if let Some(rating) = patch.rating
        && !valid_rating(rating)
    {
        return Err(StoreError::Validation(
            "rating must be between 1 and 5".to_owned(),
        ));
    }
    Ok(())
}
