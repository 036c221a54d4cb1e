//! What the carousel shows, derived from controller state.
//!
//! Rendering never fails: missing fields fall back to defaults and an
//! impossible index yields a placeholder instead of a panic.

use super::controller::CarouselController;
use super::item::DisplayItem;

/// Number of slots in the rating indicator.
pub const RATING_SLOTS: usize = 5;

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 120;

pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
pub const MISSING_COMMENT: &str = "No comment provided.";
pub const UNKNOWN_INITIAL: char = '?';
pub const EMPTY_PLACEHOLDER: &str = "No testimonials yet.";
pub const INVALID_PLACEHOLDER: &str = "This testimonial could not be displayed.";

/// Everything needed to draw one testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub comment: String,
    pub author: String,
    /// Rating clamped into `0..=5`
    pub rating: usize,
    pub stars: [bool; RATING_SLOTS],
    pub initial: char,
    pub excerpt: String,
    pub rating_label: String,
}

impl ItemView {
    pub fn from_item(item: &DisplayItem, excerpt_chars: usize) -> Self {
        let comment = item
            .comment
            .clone()
            .filter(|comment| !comment.trim().is_empty())
            .unwrap_or_else(|| MISSING_COMMENT.to_string());
        let author = item
            .author_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
        let rating = clamp_rating(item.rating);

        Self {
            excerpt: truncate_comment(&comment, excerpt_chars),
            initial: item.initial.map_or_else(|| initial_for(item.author_name.as_deref()), |c| {
                c.to_uppercase().next().unwrap_or(c)
            }),
            stars: rating_slots(item.rating),
            rating_label: format!("{}/{}", rating, RATING_SLOTS),
            rating,
            comment,
            author,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.stars.iter().filter(|filled| **filled).count()
    }
}

/// The body of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselBody {
    /// No items were supplied
    Empty,
    /// Items exist but nothing lives at the active index
    InvalidItem,
    Item(ItemView),
}

/// One selectable dot under the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Full render model of the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub body: CarouselBody,
    pub indicators: Vec<Indicator>,
    pub active_index: usize,
    /// Presentation flag derived from the transition lock
    pub fading: bool,
}

impl CarouselView {
    pub fn from_controller(controller: &CarouselController, excerpt_chars: usize) -> Self {
        let active_index = controller.active_index();
        let body = if controller.is_empty() {
            CarouselBody::Empty
        } else {
            match controller.active_item() {
                Some(item) => CarouselBody::Item(ItemView::from_item(item, excerpt_chars)),
                None => CarouselBody::InvalidItem,
            }
        };

        Self {
            body,
            indicators: (0..controller.len())
                .map(|index| Indicator {
                    index,
                    active: index == active_index,
                })
                .collect(),
            active_index,
            fading: controller.is_transitioning(),
        }
    }
}

/// Absent or negative ratings count as zero; anything above five is capped.
pub fn clamp_rating(rating: Option<i64>) -> usize {
    rating.unwrap_or(0).clamp(0, RATING_SLOTS as i64) as usize
}

/// Slot `i` is filled when `i < rating`.
pub fn rating_slots(rating: Option<i64>) -> [bool; RATING_SLOTS] {
    let filled = clamp_rating(rating);
    std::array::from_fn(|slot| slot < filled)
}

/// Upper-cased first character of the author's name, or `?`.
pub fn initial_for(author_name: Option<&str>) -> char {
    author_name
        .and_then(|name| name.trim().chars().next())
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(UNKNOWN_INITIAL)
}

/// First `max_chars` characters, with an ellipsis only when something was cut.
pub fn truncate_comment(comment: &str, max_chars: usize) -> String {
    match comment.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &comment[..cut]),
        None => comment.to_string(),
    }
}
