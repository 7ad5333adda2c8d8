pub mod newsroom;
pub mod not_found;
pub mod testimonials;

pub use newsroom::NewsroomPage;
pub use testimonials::TestimonialsPage;
