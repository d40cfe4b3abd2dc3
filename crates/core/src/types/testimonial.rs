//! Customer testimonial types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// True when `rating` is within the accepted range.
#[must_use]
pub const fn valid_rating(rating: u8) -> bool {
    rating >= MIN_RATING && rating <= MAX_RATING
}

/// A customer testimonial.
///
/// Public listings only show approved entries; `product` is a free-text
/// label, not a catalog reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: u8,
    pub product: Option<String>,
    pub is_approved: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTestimonial {
    pub name: String,
    pub content: String,
    pub rating: u8,
    pub role: Option<String>,
    pub product: Option<String>,
    /// Admin-created entries are approved immediately when unset.
    pub is_approved: Option<bool>,
}

impl Default for NewTestimonial {
    fn default() -> Self {
        Self {
            name: String::new(),
            content: String::new(),
            rating: MAX_RATING,
            role: None,
            product: None,
            is_approved: None,
        }
    }
}

/// Partial update for a testimonial. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
    pub product: Option<String>,
    pub is_approved: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!valid_rating(0));
        assert!(valid_rating(1));
        assert!(valid_rating(5));
        assert!(!valid_rating(6));
    }

    #[test]
    fn test_new_testimonial_default_rating() {
        assert_eq!(NewTestimonial::default().rating, MAX_RATING);
    }
}
