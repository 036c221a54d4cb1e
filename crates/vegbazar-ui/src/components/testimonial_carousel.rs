//! Testimonial Carousel Component
//!
//! Shows one customer testimonial at a time with previous/next controls, a
//! row of indicator dots and auto-advance. All sequencing lives in
//! [`vegbazar_core::carousel::Carousel`]; this component only feeds it timer
//! events from tokio and renders its view.

use dioxus::prelude::*;
use vegbazar_core::carousel::presentation::{EMPTY_PLACEHOLDER, INVALID_PLACEHOLDER};
use vegbazar_core::carousel::{
    Carousel, CarouselBody, CarouselEvent, CarouselTiming, Direction, DisplayItem, ItemView,
};
use vegbazar_core::timer::TokioScheduler;

use super::{IconButton, RatingStars};
use crate::hooks::use_timed;

pub type LiveCarousel = Carousel<TokioScheduler<CarouselEvent>>;

/// Build a carousel already mounted with `items`, so the very first render
/// shows the first testimonial rather than the empty placeholder.
pub fn mounted_carousel(
    scheduler: TokioScheduler<CarouselEvent>,
    timing: CarouselTiming,
    items: Vec<DisplayItem>,
) -> LiveCarousel {
    let mut carousel = Carousel::new(scheduler, timing);
    carousel.mount(items);
    carousel
}

/// Hook owning a tokio-driven carousel for the calling component.
///
/// The carousel is mounted with the first item list, re-clamped whenever
/// `items` changes, and unmounted with the component.
pub fn use_carousel(
    items: ReadOnlySignal<Vec<DisplayItem>>,
    timing: CarouselTiming,
) -> Signal<LiveCarousel> {
    let mut carousel = use_timed(
        move |scheduler: TokioScheduler<CarouselEvent>| {
            mounted_carousel(scheduler, timing, items.peek().clone())
        },
        |carousel: &mut LiveCarousel, fired| carousel.fire(fired),
    );

    // Identical lists are ignored, so the effect's first run changes nothing.
    use_effect(move || {
        let items = items();
        carousel.write().set_items(items);
    });

    use_drop(move || {
        carousel.write().unmount();
    });

    carousel
}

/// Customer testimonial carousel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TestimonialCarousel {
///         items: vec![
///             DisplayItem::new("Great!", "Asha", 5),
///             DisplayItem::new("Good", "Ravi", 3),
///         ],
///     }
/// }
/// ```
#[component]
pub fn TestimonialCarousel(
    /// Testimonials in display order
    items: ReadOnlySignal<Vec<DisplayItem>>,
    #[props(default)] timing: CarouselTiming,
) -> Element {
    let mut carousel = use_carousel(items, timing);
    let view = carousel.read().view();

    let body = match view.body {
        CarouselBody::Empty => rsx! {
            p { class: "carousel-placeholder", "{EMPTY_PLACEHOLDER}" }
        },
        CarouselBody::InvalidItem => rsx! {
            p { class: "carousel-placeholder invalid", "{INVALID_PLACEHOLDER}" }
        },
        CarouselBody::Item(item) => rsx! {
            TestimonialCard { item: item, fading: view.fading }
        },
    };

    rsx! {
        section { class: "testimonial-carousel",
            h2 { class: "section-title", "What our customers say" }

            div { class: "carousel-stage",
                IconButton {
                    aria_label: "Previous testimonial".to_string(),
                    class: "carousel-nav prev".to_string(),
                    onclick: move |_| {
                        carousel.write().advance(Direction::Previous);
                    },
                    "‹"
                }

                {body}

                IconButton {
                    aria_label: "Next testimonial".to_string(),
                    class: "carousel-nav next".to_string(),
                    onclick: move |_| {
                        carousel.write().advance(Direction::Next);
                    },
                    "›"
                }
            }

            div { class: "carousel-indicators", role: "tablist",
                for indicator in view.indicators {
                    button {
                        key: "{indicator.index}",
                        class: indicator_class(indicator.active),
                        role: "tab",
                        "aria-selected": if indicator.active { "true" } else { "false" },
                        "aria-label": format!("Show testimonial {}", indicator.index + 1),
                        onclick: move |_| {
                            carousel.write().go_to(indicator.index);
                        },
                    }
                }
            }
        }
    }
}

/// The active testimonial plus its side summary.
#[component]
fn TestimonialCard(item: ItemView, fading: bool) -> Element {
    rsx! {
        div { class: card_class(fading),
            blockquote { class: "testimonial-comment", "“{item.comment}”" }
            div { class: "testimonial-author",
                span { class: "author-name", "{item.author}" }
                RatingStars { rating: item.rating as i64 }
            }
        }

        aside { class: card_class(fading),
            div { class: "author-initial", "{item.initial}" }
            p { class: "testimonial-excerpt", "{item.excerpt}" }
            span { class: "rating-label", "{item.rating_label}" }
        }
    }
}

fn card_class(fading: bool) -> &'static str {
    if fading {
        "testimonial-card fading"
    } else {
        "testimonial-card"
    }
}

fn indicator_class(active: bool) -> &'static str {
    if active {
        "carousel-dot active"
    } else {
        "carousel-dot"
    }
}
