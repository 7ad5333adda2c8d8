// Reusable components live here.

pub mod content_card;
pub mod error_banner;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod testimonial_card;
