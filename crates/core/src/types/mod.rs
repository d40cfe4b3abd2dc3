//! Catalog entities and settings documents.
//!
//! Every entity here is the *canonical* in-process shape. The wire shapes
//! used by the hosted backend (snake_case rows) and the bundled static
//! dataset live in the `catalog` crate next to their mapping functions.

mod city;
mod inquiry;
mod product;
mod settings;
mod testimonial;

pub use city::{CityMapping, Island};
pub use inquiry::{Inquiry, InquiryStatus, NewInquiry};
pub use product::{Category, NewProduct, Product, ProductPatch};
pub use settings::{
    CtaContent, FeaturesContent, FooterContent, HeroContent, HomeContent, MenuItem,
    WhatsAppConfig, sorted_menu,
};
pub use testimonial::{
    MAX_RATING, MIN_RATING, NewTestimonial, Testimonial, TestimonialPatch, valid_rating,
};
