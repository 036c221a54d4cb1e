//! Timer-driven carousel: auto-advance and delayed transitions.
//!
//! [`Carousel`] wraps a [`CarouselController`] with a [`Scheduler`]. It owns
//! at most one auto-advance timer and at most one pending transition, and
//! cancels both on teardown. Events for timers it no longer tracks are
//! ignored, so a late delivery can never touch a retired or replaced list.

use std::time::Duration;

use super::controller::{CarouselController, Direction, TransitionTicket};
use super::item::DisplayItem;
use super::presentation::{CarouselView, DEFAULT_EXCERPT_CHARS};
use crate::config::{StorefrontConfig, MIN_CAROUSEL_DELAY_MS};
use crate::timer::{Fired, Scheduler, TimerId, VirtualScheduler};

/// Events the carousel schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The transition delay for this ticket has elapsed
    TransitionDue(TransitionTicket),
    /// Auto-advance interval tick
    AutoAdvance,
}

/// Carousel delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub transition_delay: Duration,
    pub autoplay_interval: Duration,
    pub excerpt_chars: usize,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            transition_delay: Duration::from_millis(300),
            autoplay_interval: Duration::from_millis(5000),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl From<&StorefrontConfig> for CarouselTiming {
    /// Delays are floored at [`MIN_CAROUSEL_DELAY_MS`]; a zero delay would
    /// re-arm forever.
    fn from(config: &StorefrontConfig) -> Self {
        let floor = Duration::from_millis(MIN_CAROUSEL_DELAY_MS);
        Self {
            transition_delay: config.transition_delay().max(floor),
            autoplay_interval: config.autoplay_interval().max(floor),
            excerpt_chars: config.excerpt_chars,
        }
    }
}

/// A carousel controller bound to a clock.
pub struct Carousel<S> {
    controller: CarouselController,
    scheduler: S,
    timing: CarouselTiming,
    mounted: bool,
    autoplay: Option<TimerId>,
    transition: Option<TimerId>,
}

impl<S: Scheduler<CarouselEvent>> Carousel<S> {
    pub fn new(scheduler: S, timing: CarouselTiming) -> Self {
        Self {
            controller: CarouselController::default(),
            scheduler,
            timing,
            mounted: false,
            autoplay: None,
            transition: None,
        }
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether an auto-advance timer is currently armed.
    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Render model for the current state.
    pub fn view(&self) -> CarouselView {
        CarouselView::from_controller(&self.controller, self.timing.excerpt_chars)
    }

    /// Start presenting `items` and arm auto-advance.
    pub fn mount(&mut self, items: Vec<DisplayItem>) {
        self.controller = CarouselController::initialize(items);
        self.mounted = true;
        self.restart_autoplay();
        tracing::debug!(items = self.controller.len(), "Carousel mounted");
    }

    /// Supply a new item list. An identical list changes nothing; a
    /// different one re-clamps the index and restarts auto-advance.
    pub fn set_items(&mut self, items: Vec<DisplayItem>) {
        if items.as_slice() == self.controller.items() {
            return;
        }
        self.controller.on_items_changed(items);
        if self.mounted {
            self.restart_autoplay();
        }
    }

    pub fn advance(&mut self, direction: Direction) -> bool {
        let ticket = self.controller.advance(direction);
        self.arm_transition(ticket)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        let ticket = self.controller.go_to(index);
        self.arm_transition(ticket)
    }

    fn arm_transition(&mut self, ticket: Option<TransitionTicket>) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };
        let id = self
            .scheduler
            .schedule(self.timing.transition_delay, CarouselEvent::TransitionDue(ticket));
        self.transition = Some(id);
        true
    }

    fn restart_autoplay(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.scheduler.cancel(id);
        }
        if self.mounted && self.controller.len() > 1 {
            self.autoplay = Some(
                self.scheduler
                    .schedule(self.timing.autoplay_interval, CarouselEvent::AutoAdvance),
            );
        }
    }

    /// Deliver an elapsed timer.
    pub fn fire(&mut self, fired: Fired<CarouselEvent>) {
        // Retire the id; harmless if it already fired.
        self.scheduler.cancel(fired.id);

        if !self.mounted {
            return;
        }

        match fired.event {
            CarouselEvent::TransitionDue(ticket) => {
                if self.transition != Some(fired.id) {
                    return;
                }
                self.transition = None;
                if self.controller.complete(ticket) {
                    tracing::trace!(index = self.controller.active_index(), "Transition complete");
                }
            }
            CarouselEvent::AutoAdvance => {
                if self.autoplay != Some(fired.id) {
                    return;
                }
                self.autoplay = None;
                self.advance(Direction::Next);
                self.restart_autoplay();
            }
        }
    }

    /// Stop all timers and invalidate the transition in flight.
    pub fn unmount(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.transition.take() {
            self.scheduler.cancel(id);
        }
        self.controller.teardown();
        self.mounted = false;
        tracing::debug!("Carousel unmounted");
    }
}

impl Carousel<VirtualScheduler<CarouselEvent>> {
    /// Carousel on a virtual clock.
    pub fn virtual_clock(timing: CarouselTiming) -> Self {
        Self::new(VirtualScheduler::new(), timing)
    }

    /// Let `elapsed` of virtual time pass, firing every timer that comes due,
    /// including timers armed by earlier ones within the same window.
    pub fn run_for(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(fired) = self.scheduler.pop_next_due(until) {
            self.fire(fired);
        }
        self.scheduler.set_now(until);
    }
}
