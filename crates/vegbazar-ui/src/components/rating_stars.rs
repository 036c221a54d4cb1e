//! Five-slot star rating.

use dioxus::prelude::*;
use vegbazar_core::carousel::presentation::{rating_slots, RATING_SLOTS};

/// CSS class for one star slot.
pub fn star_class(filled: bool) -> &'static str {
    if filled {
        "star filled"
    } else {
        "star"
    }
}

/// Renders `rating` as five stars, clamping out-of-range values.
#[component]
pub fn RatingStars(#[props(default)] rating: i64) -> Element {
    let slots = rating_slots(Some(rating));
    let filled = slots.iter().filter(|f| **f).count();

    rsx! {
        div {
            class: "rating-stars",
            role: "img",
            "aria-label": "{filled} out of {RATING_SLOTS} stars",
            for (i, is_filled) in slots.into_iter().enumerate() {
                span { key: "{i}", class: star_class(is_filled), "★" }
            }
        }
    }
}
