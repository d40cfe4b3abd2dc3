//! Inquiry record shapes and conversion functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloomgift_core::{Inquiry, InquiryStatus, NewInquiry};

/// Wire shape of an `inquiries` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    pub message: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert shape of an `inquiries` row; new inquiries always start pending.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryInsertRow {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
}

/// Map a wire row to the canonical shape.
#[must_use]
pub fn inquiry_from_row(row: InquiryRow) -> Inquiry {
    Inquiry {
        id: row.id,
        name: row.name,
        phone: row.phone,
        email: row.email.filter(|e| !e.is_empty()),
        product_name: row.product_name.filter(|p| !p.is_empty()),
        message: row.message,
        notes: row.notes.filter(|n| !n.is_empty()),
        status: row.status,
        created_at: row.created_at,
    }
}

/// Build the insert row for a contact-form submission.
#[must_use]
pub fn new_inquiry_to_row(input: NewInquiry) -> InquiryInsertRow {
    InquiryInsertRow {
        name: input.name,
        phone: input.phone,
        email: input.email.filter(|e| !e.is_empty()),
        product_name: input.product_name.filter(|p| !p.is_empty()),
        message: input.message,
        status: InquiryStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_is_pending() {
        let row: InquiryRow = serde_json::from_value(serde_json::json!({
            "id": "i1",
            "name": "Budi",
            "phone": "6281234567890",
            "message": "Halo",
        }))
        .expect("row");
        assert_eq!(inquiry_from_row(row).status, InquiryStatus::Pending);
    }

    #[test]
    fn test_new_inquiry_starts_pending() {
        let input = NewInquiry {
            name: "Budi".to_owned(),
            phone: "6281234567890".to_owned(),
            message: "Halo".to_owned(),
            ..NewInquiry::default()
        };
        assert_eq!(new_inquiry_to_row(input).status, InquiryStatus::Pending);
    }
}
