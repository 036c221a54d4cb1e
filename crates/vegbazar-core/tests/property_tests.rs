//! Property-based tests for the carousel state machine
//!
//! Uses proptest to verify the navigation laws over arbitrary list sizes,
//! starting positions and request sequences.

use proptest::prelude::*;
use vegbazar_core::carousel::presentation::{rating_slots, truncate_comment, RATING_SLOTS};
use vegbazar_core::carousel::{CarouselBody, CarouselController, CarouselView, Direction, DisplayItem};

// ============================================================================
// Strategy Generators
// ============================================================================

fn items(n: usize) -> Vec<DisplayItem> {
    (0..n)
        .map(|i| DisplayItem::new(format!("comment {}", i), format!("author {}", i), (i % 6) as i64))
        .collect()
}

/// A list length and a valid starting index within it
fn list_and_start(min_len: usize) -> impl Strategy<Value = (usize, usize)> {
    (min_len..30usize).prop_flat_map(|len| (Just(len), 0..len))
}

#[derive(Debug, Clone)]
enum Request {
    Advance(Direction),
    GoTo(usize),
    Complete,
}

fn request_strategy() -> impl Strategy<Value = Request> {
    prop_oneof![
        2 => prop_oneof![Just(Direction::Next), Just(Direction::Previous)].prop_map(Request::Advance),
        1 => (0..40usize).prop_map(Request::GoTo),
        2 => Just(Request::Complete),
    ]
}

fn positioned(len: usize, start: usize) -> CarouselController {
    let mut c = CarouselController::initialize(items(len));
    if let Some(ticket) = c.go_to(start) {
        c.complete(ticket);
    }
    c
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Stepping forward `len` times returns to the start
    #[test]
    fn next_wraps_around((len, start) in list_and_start(2)) {
        let mut c = positioned(len, start);
        prop_assert_eq!(c.active_index(), start);

        for _ in 0..len {
            let ticket = c.advance(Direction::Next).unwrap();
            prop_assert!(c.complete(ticket));
        }
        prop_assert_eq!(c.active_index(), start);
    }

    /// Stepping back `len` times returns to the start
    #[test]
    fn previous_wraps_around((len, start) in list_and_start(2)) {
        let mut c = positioned(len, start);
        for _ in 0..len {
            let ticket = c.advance(Direction::Previous).unwrap();
            c.complete(ticket);
        }
        prop_assert_eq!(c.active_index(), start);
    }

    /// Requests during a transition neither move the index nor replace the ticket
    #[test]
    fn contention_is_idempotent(
        (len, start) in list_and_start(2),
        extra in prop::collection::vec(request_strategy(), 1..10),
    ) {
        let mut c = positioned(len, start);
        let ticket = c.advance(Direction::Next).unwrap();

        for request in extra {
            match request {
                Request::Advance(direction) => prop_assert!(c.advance(direction).is_none()),
                Request::GoTo(index) => prop_assert!(c.go_to(index).is_none()),
                Request::Complete => {}
            }
            prop_assert_eq!(c.active_index(), start);
            prop_assert!(c.is_transitioning());
        }

        prop_assert!(c.complete(ticket));
        prop_assert_eq!(c.active_index(), (start + 1) % len);
    }

    /// Selecting the active item never engages the lock
    #[test]
    fn go_to_active_is_noop((len, start) in list_and_start(1)) {
        let mut c = positioned(len, start);
        prop_assert!(c.go_to(start).is_none());
        prop_assert!(!c.is_transitioning());
        prop_assert_eq!(c.active_index(), start);
    }

    /// The index stays in bounds under any mix of requests and list changes
    #[test]
    fn index_always_in_bounds(
        (len, start) in list_and_start(1),
        requests in prop::collection::vec(request_strategy(), 0..40),
        new_len in 0..30usize,
    ) {
        let mut c = positioned(len, start);
        let mut pending = None;

        for request in requests {
            match request {
                Request::Advance(direction) => {
                    if let Some(ticket) = c.advance(direction) {
                        pending = Some(ticket);
                    }
                }
                Request::GoTo(index) => {
                    if let Some(ticket) = c.go_to(index) {
                        pending = Some(ticket);
                    }
                }
                Request::Complete => {
                    if let Some(ticket) = pending.take() {
                        c.complete(ticket);
                    }
                }
            }
            prop_assert!(c.active_index() < c.len());
        }

        c.on_items_changed(items(new_len));
        if let Some(ticket) = pending.take() {
            c.complete(ticket);
        }
        if new_len > 0 {
            prop_assert!(c.active_index() < new_len);
        } else {
            prop_assert_eq!(c.active_index(), 0);
            prop_assert_eq!(CarouselView::from_controller(&c, 120).body, CarouselBody::Empty);
        }
    }

    /// Shrinking past the index resets to zero, otherwise the index is kept
    #[test]
    fn shrink_resets_only_when_needed((len, start) in list_and_start(1), new_len in 0..30usize) {
        let mut c = positioned(len, start);
        c.on_items_changed(items(new_len));
        if start >= new_len {
            prop_assert_eq!(c.active_index(), 0);
        } else {
            prop_assert_eq!(c.active_index(), start);
        }
    }

    /// Filled rating slots never exceed five and never go negative
    #[test]
    fn rating_slots_clamped(rating in proptest::option::of(any::<i64>())) {
        let filled = rating_slots(rating).iter().filter(|f| **f).count();
        prop_assert!(filled <= RATING_SLOTS);
        let expected = rating.unwrap_or(0).clamp(0, 5) as usize;
        prop_assert_eq!(filled, expected);
    }

    /// Excerpts are at most the limit plus an ellipsis, and only cut when needed
    #[test]
    fn excerpt_length(comment in "[a-zA-Z ]{0,200}") {
        let excerpt = truncate_comment(&comment, 120);
        if comment.chars().count() > 120 {
            prop_assert_eq!(excerpt.chars().count(), 123);
            prop_assert!(excerpt.ends_with("..."));
        } else {
            prop_assert_eq!(excerpt, comment);
        }
    }
}
