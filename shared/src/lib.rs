//! Data model and view logic shared by the newsroom front-end.
//!
//! Everything here is free of browser bindings so it builds for both
//! `wasm32` and the host, which is where the tests run.

pub mod content;
pub mod datetime;
pub mod disclosure;
pub mod loading;
pub mod share;
pub mod testimonial;

pub use content::{
    Attachment, AttachmentsView, ContentCardView, ContentCategory, ContentItem,
};
pub use disclosure::Disclosure;
pub use loading::{LoaderColor, LoaderConfig, LoaderSize};
pub use share::{share_item, ShareError, ShareHost, ShareOutcome, SharePayload};
pub use testimonial::{AvatarView, RatingView, Testimonial, TestimonialCardView};
