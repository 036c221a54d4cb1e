//! Post-purchase cashback celebration modal.
//!
//! The modal shows the cashback earned and the new wallet balance, dismisses
//! itself after a few seconds, and plays a short exit animation before
//! telling its owner it has closed.
//!
//! ```text
//! Hidden ──open──▶ Visible ──(display elapsed | close)──▶ Exiting ──(exit elapsed)──▶ Closed
//! ```

use std::time::Duration;

use crate::config::StorefrontConfig;
use crate::money::Money;
use crate::timer::{Fired, Scheduler, TimerId};

/// Amounts shown in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashbackOffer {
    pub amount: Money,
    pub new_balance: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    Visible,
    /// Exit animation running
    Exiting,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    AutoDismiss,
    ExitFinished,
}

/// Notification for the modal's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalNotice {
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTiming {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for ModalTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(300),
        }
    }
}

impl From<&StorefrontConfig> for ModalTiming {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            display: config.modal_display(),
            exit: config.modal_exit(),
        }
    }
}

/// Lifecycle of the cashback modal.
pub struct CashbackModal<S> {
    scheduler: S,
    timing: ModalTiming,
    phase: ModalPhase,
    offer: Option<CashbackOffer>,
    timer: Option<TimerId>,
}

impl<S: Scheduler<ModalEvent>> CashbackModal<S> {
    pub fn new(scheduler: S, timing: ModalTiming) -> Self {
        Self {
            scheduler,
            timing,
            phase: ModalPhase::Hidden,
            offer: None,
            timer: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn offer(&self) -> Option<CashbackOffer> {
        self.offer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Whether anything should be on screen.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, ModalPhase::Visible | ModalPhase::Exiting)
    }

    /// Show the modal. Opening while visible swaps the amounts and restarts
    /// the display timer; opening while exiting is ignored.
    pub fn open(&mut self, amount: Money, new_balance: Money) {
        if self.phase == ModalPhase::Exiting {
            return;
        }
        self.offer = Some(CashbackOffer { amount, new_balance });
        self.phase = ModalPhase::Visible;
        self.rearm(self.timing.display, ModalEvent::AutoDismiss);
        tracing::debug!(amount = %amount, balance = %new_balance, "Cashback modal opened");
    }

    /// Begin the exit animation. Ignored unless visible.
    pub fn close(&mut self) {
        if self.phase != ModalPhase::Visible {
            return;
        }
        self.phase = ModalPhase::Exiting;
        self.rearm(self.timing.exit, ModalEvent::ExitFinished);
    }

    fn rearm(&mut self, delay: Duration, event: ModalEvent) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
        self.timer = Some(self.scheduler.schedule(delay, event));
    }

    /// Deliver an elapsed timer. Returns `Closed` exactly once per opening.
    pub fn fire(&mut self, fired: Fired<ModalEvent>) -> Option<ModalNotice> {
        self.scheduler.cancel(fired.id);
        if self.timer != Some(fired.id) {
            return None;
        }
        self.timer = None;

        match fired.event {
            ModalEvent::AutoDismiss => {
                self.close();
                None
            }
            ModalEvent::ExitFinished => {
                self.phase = ModalPhase::Closed;
                tracing::debug!("Cashback modal closed");
                Some(ModalNotice::Closed)
            }
        }
    }

    /// Cancel timers without notifying.
    pub fn teardown(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
        self.phase = ModalPhase::Hidden;
    }
}
