//! Testimonial carousel.
//!
//! - [`controller`]: index and transition lock, no notion of time
//! - [`driver`]: the controller on a [`Scheduler`](crate::timer::Scheduler)
//!   with auto-advance
//! - [`presentation`]: the render model, with every default applied

pub mod controller;
pub mod driver;
pub mod item;
pub mod presentation;

pub use controller::{CarouselController, Direction, Navigation, TransitionLock, TransitionTicket};
pub use driver::{Carousel, CarouselEvent, CarouselTiming};
pub use item::{normalize_items, DisplayItem};
pub use presentation::{CarouselBody, CarouselView, Indicator, ItemView};
