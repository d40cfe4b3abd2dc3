//! Customer inquiry types.
//!
//! Inquiries arrive from the public contact form and are worked through the
//! admin area. They have no fallback dataset; listings degrade to empty when
//! the backend is unreachable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inquiry workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Contacted,
    Completed,
    Cancelled,
}

impl InquiryStatus {
    /// The stored snake_case value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Display label shown in the admin area.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Contacted => "Sudah Dihubungi",
            Self::Completed => "Selesai",
            Self::Cancelled => "Dibatalkan",
        }
    }

    /// Whether moving to `next` is a legal workflow step.
    ///
    /// Allowed: pending -> contacted|cancelled, contacted -> completed|cancelled.
    /// Completed and cancelled are terminal.
    #[must_use]
    pub const fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Contacted | Self::Cancelled)
                | (Self::Contacted, Self::Completed | Self::Cancelled)
        )
    }

    /// True for states with no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer contact request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    /// Digits with country code, as entered by the customer.
    pub phone: String,
    pub email: Option<String>,
    pub product_name: Option<String>,
    pub message: String,
    /// Internal follow-up notes, admin-only.
    pub notes: Option<String>,
    pub status: InquiryStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input from the public contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub product_name: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert!(InquiryStatus::Pending.can_transition(InquiryStatus::Contacted));
        assert!(InquiryStatus::Contacted.can_transition(InquiryStatus::Completed));
    }

    #[test]
    fn test_cancellation_allowed_before_completion() {
        assert!(InquiryStatus::Pending.can_transition(InquiryStatus::Cancelled));
        assert!(InquiryStatus::Contacted.can_transition(InquiryStatus::Cancelled));
    }

    #[test]
    fn test_terminal_states_are_frozen() {
        for next in [
            InquiryStatus::Pending,
            InquiryStatus::Contacted,
            InquiryStatus::Completed,
            InquiryStatus::Cancelled,
        ] {
            assert!(!InquiryStatus::Completed.can_transition(next));
            assert!(!InquiryStatus::Cancelled.can_transition(next));
        }
    }

    #[test]
    fn test_no_skipping_contact() {
        assert!(!InquiryStatus::Pending.can_transition(InquiryStatus::Completed));
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&InquiryStatus::Contacted).expect("serialize");
        assert_eq!(json, "\"contacted\"");
    }
}
