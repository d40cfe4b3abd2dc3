//! Inquiry façade.
//!
//! Customer contact requests have no bundled dataset: listings degrade to
//! an empty list when the backend is unreachable, and every write requires
//! a live backend.

use serde::Serialize;
use tracing::{instrument, warn};

use bloomgift_core::{Inquiry, InquiryStatus, NewInquiry};

use crate::error::StoreError;
use crate::supabase::RestClient;
use crate::supabase::records::{InquiryRow, inquiry_from_row, new_inquiry_to_row};

const TABLE: &str = "inquiries";
const ORDER_COLUMN: &str = "created_at";

#[derive(Serialize)]
struct StatusPatchRow {
    status: InquiryStatus,
}

#[derive(Serialize)]
struct NotesPatchRow<'a> {
    notes: &'a str,
}

/// Façade over customer inquiries (admin workflow plus the public contact
/// form).
#[derive(Clone)]
pub struct InquiryStore {
    rest: RestClient,
}

impl InquiryStore {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// All inquiries, oldest first. Degrades to empty on any failure.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Vec<Inquiry> {
        if !self.rest.is_configured() {
            return Vec::new();
        }
        match self.rest.select_all::<InquiryRow>(TABLE, ORDER_COLUMN).await {
            Ok(rows) => rows.into_iter().map(inquiry_from_row).collect(),
            Err(err) => {
                warn!(error = %err, "inquiry fetch failed, serving empty list");
                Vec::new()
            }
        }
    }

    /// Direct id lookup.
    ///
    /// # Errors
    ///
    /// `NotFound` when absent; there is no fallback source for inquiries.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Inquiry, StoreError> {
        if self.rest.is_configured()
            && let Some(row) = self.rest.select_single::<InquiryRow>(TABLE, "id", id).await?
        {
            return Ok(inquiry_from_row(row));
        }
        Err(StoreError::NotFound(format!("inquiry {id}")))
    }

    /// Record a contact-form submission; new inquiries start pending.
    ///
    /// # Errors
    ///
    /// `Validation` for missing name/phone/message (before any network
    /// call), `Configuration` in fallback mode.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewInquiry) -> Result<Inquiry, StoreError> {
        validate_new(&input)?;
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        let row = new_inquiry_to_row(input);
        let stored = self.rest.insert::<InquiryRow, _>(TABLE, &row).await?;
        Ok(inquiry_from_row(stored))
    }

    /// Move an inquiry through the workflow.
    ///
    /// # Errors
    ///
    /// `Validation` when the transition is not legal from the current
    /// state, `Configuration` in fallback mode, `NotFound` for an unknown
    /// id.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: &str, next: InquiryStatus) -> Result<Inquiry, StoreError> {
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }

        let current = self.get_by_id(id).await?;
        if !current.status.can_transition(next) {
            return Err(StoreError::Validation(format!(
                "cannot move inquiry from {} to {next}",
                current.status
            )));
        }

        match self
            .rest
            .update_eq::<InquiryRow, _>(TABLE, "id", id, &StatusPatchRow { status: next })
            .await?
        {
            Some(row) => Ok(inquiry_from_row(row)),
            None => Err(StoreError::NotFound(format!("inquiry {id}"))),
        }
    }

    /// Replace the internal follow-up notes.
    ///
    /// # Errors
    ///
    /// `Configuration` in fallback mode, `NotFound` for an unknown id.
    #[instrument(skip(self, notes))]
    pub async fn set_notes(&self, id: &str, notes: &str) -> Result<Inquiry, StoreError> {
        if !self.rest.is_configured() {
            return Err(StoreError::not_configured());
        }
        match self
            .rest
            .update_eq::<InquiryRow, _>(TABLE, "id", id, &NotesPatchRow { notes })
            .await?
        {
            Some(row) => Ok(inquiry_from_row(row)),
            None => Err(StoreError::NotFound(format!("inquiry {id}"))),
        }
    }

    /// Hard delete; idempotent.
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
}

fn validate_new(input: &NewInquiry) -> Result<(), StoreError> {
    if input.name.trim().is_empty() {
        return Err(StoreError::Validation("name is required".to_owned()));
    }
    if input.phone.trim().is_empty() {
        return Err(StoreError::Validation("phone is required".to_owned()));
    }
    if input.message.trim().is_empty() {
        return Err(StoreError::Validation("message is required".to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    fn offline_store() -> InquiryStore {
        InquiryStore::new(RestClient::new(&BackendConfig::unconfigured()))
    }

    #[tokio::test]
    async fn test_listing_degrades_to_empty_offline() {
        assert!(offline_store().get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_validates_first() {
        let input = NewInquiry {
            name: "Budi".to_owned(),
            phone: String::new(),
            message: "Halo".to_owned(),
            ..NewInquiry::default()
        };
        assert!(matches!(
            offline_store().create(input).await,
            Err(StoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_refused_offline() {
        let input = NewInquiry {
            name: "Budi".to_owned(),
            phone: "6281234567890".to_owned(),
            message: "Halo".to_owned(),
            ..NewInquiry::default()
        };
        assert!(matches!(
            offline_store().create(input).await,
            Err(StoreError::Configuration(_))
        ));
    }
}
