//! Active-index state machine with a transition lock.
//!
//! The controller knows nothing about time. A navigation request that is
//! accepted engages the lock and hands back a [`TransitionTicket`]; whoever
//! owns the clock redeems the ticket once the transition delay has passed.

use super::item::DisplayItem;

/// Direction of a relative navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

/// What an accepted navigation will do once it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    Step(Direction),
    Jump(usize),
}

/// Proof that a navigation was accepted and the lock is held for it.
///
/// A ticket is honoured at most once, and never after a teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket {
    seq: u64,
    navigation: Navigation,
}

impl TransitionTicket {
    pub fn navigation(&self) -> Navigation {
        self.navigation
    }
}

/// Guard preventing overlapping transitions.
///
/// Holds the sequence number of the transition in flight, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionLock {
    holder: Option<u64>,
}

impl TransitionLock {
    pub fn is_engaged(&self) -> bool {
        self.holder.is_some()
    }

    fn try_engage(&mut self, seq: u64) -> bool {
        if self.holder.is_some() {
            return false;
        }
        self.holder = Some(seq);
        true
    }

    fn is_held_by(&self, seq: u64) -> bool {
        self.holder == Some(seq)
    }

    fn release(&mut self) {
        self.holder = None;
    }
}

/// Owns the item list, the active index and the transition lock.
#[derive(Debug, Clone, Default)]
pub struct CarouselController {
    items: Vec<DisplayItem>,
    active_index: usize,
    lock: TransitionLock,
    next_seq: u64,
}

impl CarouselController {
    /// Start at the first item with the lock released. Empty input is fine.
    pub fn initialize(items: Vec<DisplayItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The item at the active index, if any.
    pub fn active_item(&self) -> Option<&DisplayItem> {
        self.items.get(self.active_index)
    }

    pub fn is_transitioning(&self) -> bool {
        self.lock.is_engaged()
    }

    /// Request a relative step.
    ///
    /// Returns `None` when there is nothing to rotate through or another
    /// transition is already in flight. The request is dropped, not queued.
    pub fn advance(&mut self, direction: Direction) -> Option<TransitionTicket> {
        if self.items.len() <= 1 {
            return None;
        }
        self.begin(Navigation::Step(direction))
    }

    /// Request a jump to `index`. Selecting the active item, or an index
    /// outside the list, does nothing.
    pub fn go_to(&mut self, index: usize) -> Option<TransitionTicket> {
        if index >= self.items.len() || index == self.active_index {
            return None;
        }
        self.begin(Navigation::Jump(index))
    }

    fn begin(&mut self, navigation: Navigation) -> Option<TransitionTicket> {
        let seq = self.next_seq;
        if !self.lock.try_engage(seq) {
            tracing::trace!(?navigation, "Navigation dropped, transition in flight");
            return None;
        }
        self.next_seq = self.next_seq.wrapping_add(1);
        Some(TransitionTicket { seq, navigation })
    }

    /// Finish an accepted transition.
    ///
    /// The target is computed against the list as it is now, so a list that
    /// changed mid-transition is still indexed safely. Returns whether the
    /// ticket was honoured.
    pub fn complete(&mut self, ticket: TransitionTicket) -> bool {
        if !self.lock.is_held_by(ticket.seq) {
            return false;
        }

        let len = self.items.len();
        match ticket.navigation {
            Navigation::Step(_) if len <= 1 => {}
            Navigation::Step(Direction::Next) => {
                self.active_index = (self.active_index + 1) % len;
            }
            Navigation::Step(Direction::Previous) => {
                self.active_index = (self.active_index + len - 1) % len;
            }
            Navigation::Jump(index) if index < len => {
                self.active_index = index;
            }
            Navigation::Jump(_) => {}
        }

        self.lock.release();
        true
    }

    /// Replace the item list.
    ///
    /// The active index is kept unless the list shrank past it, in which case
    /// it returns to the first item. The lock is left as it is.
    pub fn on_items_changed(&mut self, items: Vec<DisplayItem>) {
        if items.len() <= self.active_index {
            self.active_index = 0;
        }
        self.items = items;
    }

    /// Invalidate any outstanding ticket and release the lock.
    pub fn teardown(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<DisplayItem> {
        (0..n)
            .map(|i| DisplayItem::new(format!("comment {}", i), format!("author {}", i), 4))
            .collect()
    }

    #[test]
    fn initialize_starts_at_zero_unlocked() {
        let c = CarouselController::initialize(items(3));
        assert_eq!(c.active_index(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn empty_list_ignores_navigation() {
        let mut c = CarouselController::initialize(Vec::new());
        assert!(c.advance(Direction::Next).is_none());
        assert!(c.go_to(0).is_none());
        assert!(c.active_item().is_none());
        assert!(!c.is_transitioning());
    }

    #[test]
    fn single_item_never_locks() {
        let mut c = CarouselController::initialize(items(1));
        assert!(c.advance(Direction::Next).is_none());
        assert!(c.advance(Direction::Previous).is_none());
        assert_eq!(c.active_index(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn advance_locks_until_completed() {
        let mut c = CarouselController::initialize(items(3));
        let ticket = c.advance(Direction::Next).unwrap();
        assert!(c.is_transitioning());
        assert_eq!(c.active_index(), 0);

        assert!(c.complete(ticket));
        assert_eq!(c.active_index(), 1);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut c = CarouselController::initialize(items(4));
        let ticket = c.advance(Direction::Previous).unwrap();
        c.complete(ticket);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn second_request_while_locked_is_dropped() {
        let mut c = CarouselController::initialize(items(3));
        let ticket = c.advance(Direction::Next).unwrap();
        assert!(c.advance(Direction::Next).is_none());
        assert!(c.go_to(2).is_none());

        c.complete(ticket);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn go_to_active_is_noop() {
        let mut c = CarouselController::initialize(items(3));
        assert!(c.go_to(0).is_none());
        assert!(!c.is_transitioning());
    }

    #[test]
    fn go_to_out_of_range_is_noop() {
        let mut c = CarouselController::initialize(items(3));
        assert!(c.go_to(3).is_none());
        assert!(!c.is_transitioning());
    }

    #[test]
    fn go_to_jumps_after_completion() {
        let mut c = CarouselController::initialize(items(5));
        let ticket = c.go_to(3).unwrap();
        assert_eq!(ticket.navigation(), Navigation::Jump(3));
        c.complete(ticket);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn shrinking_past_index_resets() {
        let mut c = CarouselController::initialize(items(5));
        let ticket = c.go_to(4).unwrap();
        c.complete(ticket);

        c.on_items_changed(items(4));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn shrinking_above_index_preserves() {
        let mut c = CarouselController::initialize(items(5));
        let ticket = c.go_to(2).unwrap();
        c.complete(ticket);

        c.on_items_changed(items(3));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn items_change_keeps_lock() {
        let mut c = CarouselController::initialize(items(3));
        let ticket = c.advance(Direction::Next).unwrap();
        c.on_items_changed(items(2));
        assert!(c.is_transitioning());
        assert!(c.complete(ticket));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn completion_after_list_emptied_only_unlocks() {
        let mut c = CarouselController::initialize(items(3));
        let ticket = c.go_to(2).unwrap();
        c.on_items_changed(Vec::new());
        assert!(c.complete(ticket));
        assert_eq!(c.active_index(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn teardown_invalidates_ticket() {
        let mut c = CarouselController::initialize(items(3));
        let ticket = c.advance(Direction::Next).unwrap();
        c.teardown();
        assert!(!c.complete(ticket));
        assert_eq!(c.active_index(), 0);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn ticket_cannot_be_redeemed_twice() {
        let mut c = CarouselController::initialize(items(3));
        let ticket = c.advance(Direction::Next).unwrap();
        assert!(c.complete(ticket));
        assert!(!c.complete(ticket));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn stale_ticket_cannot_complete_newer_transition() {
        let mut c = CarouselController::initialize(items(4));
        let first = c.advance(Direction::Next).unwrap();
        c.complete(first);

        let second = c.go_to(3).unwrap();
        assert!(!c.complete(first));
        assert_eq!(c.active_index(), 1);
        assert!(c.complete(second));
        assert_eq!(c.active_index(), 3);
    }
}
