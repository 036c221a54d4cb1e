//! Reusable storefront components.

mod button;
mod rating_stars;
mod testimonial_carousel;

pub use button::*;
pub use rating_stars::*;
pub use testimonial_carousel::*;
