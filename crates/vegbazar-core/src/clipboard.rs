//! Order-ID copy helper.
//!
//! Copying shows "Copied!" feedback for a moment. A failed copy is logged and
//! leaves whatever was on screen untouched; there is no retry.

use std::time::Duration;

use crate::error::StorefrontResult;
use crate::timer::{Fired, Scheduler, TimerId};

/// Platform clipboard.
pub trait ClipboardService {
    fn copy_text(&mut self, text: &str) -> StorefrontResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Idle,
    Copied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyEvent {
    ResetFeedback,
}

/// Copy button state for one order ID.
pub struct OrderIdCopy<S> {
    order_id: String,
    scheduler: S,
    feedback_for: Duration,
    feedback: CopyFeedback,
    reset_timer: Option<TimerId>,
}

impl<S: Scheduler<CopyEvent>> OrderIdCopy<S> {
    pub fn new(order_id: impl Into<String>, scheduler: S, feedback_for: Duration) -> Self {
        Self {
            order_id: order_id.into(),
            scheduler,
            feedback_for,
            feedback: CopyFeedback::Idle,
            reset_timer: None,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn feedback(&self) -> CopyFeedback {
        self.feedback
    }

    /// Copy the order ID. Returns whether the clipboard accepted it.
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardService) -> bool {
        match clipboard.copy_text(&self.order_id) {
            Ok(()) => {
                self.feedback = CopyFeedback::Copied;
                if let Some(id) = self.reset_timer.take() {
                    self.scheduler.cancel(id);
                }
                self.reset_timer = Some(
                    self.scheduler
                        .schedule(self.feedback_for, CopyEvent::ResetFeedback),
                );
                true
            }
            Err(e) => {
                tracing::warn!(order_id = %self.order_id, error = %e, "Failed to copy order ID");
                false
            }
        }
    }

    pub fn fire(&mut self, fired: Fired<CopyEvent>) {
        self.scheduler.cancel(fired.id);
        if self.reset_timer != Some(fired.id) {
            return;
        }
        self.reset_timer = None;
        match fired.event {
            CopyEvent::ResetFeedback => self.feedback = CopyFeedback::Idle,
        }
    }

    pub fn teardown(&mut self) {
        if let Some(id) = self.reset_timer.take() {
            self.scheduler.cancel(id);
        }
    }
}
