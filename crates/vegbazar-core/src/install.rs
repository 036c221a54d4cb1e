//! Install-prompt flow.
//!
//! The platform may hand us a deferred install prompt at some point after
//! startup, or never. We wait a short while for it; if nothing arrives, the
//! banner falls back to static instructions. A prompt captured later still
//! takes over, because event-captured capabilities outrank fallbacks in the
//! [`CapabilitySlot`].

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;

use crate::capability::{CapabilitySlot, CapabilitySource};
use crate::dismissal::{DismissalPolicy, DismissalRecord};
use crate::error::StorefrontResult;
use crate::timer::{Fired, Scheduler, TimerId};

/// What the user chose in the native install dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

/// A platform-provided, single-use install prompt.
pub trait DeferredPrompt: Send + Sync {
    /// Show the native dialog and resolve with the user's choice.
    fn prompt(&self) -> BoxFuture<'_, StorefrontResult<InstallOutcome>>;
}

/// How the app can be installed on this platform.
#[derive(Clone)]
pub enum InstallCapability {
    /// A native prompt is available
    Native(Arc<dyn DeferredPrompt>),
    /// Only manual instructions can be shown
    Instructions,
}

impl fmt::Debug for InstallCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallCapability::Native(_) => f.write_str("Native(..)"),
            InstallCapability::Instructions => f.write_str("Instructions"),
        }
    }
}

/// The process-wide install capability slot.
pub fn install_slot() -> &'static CapabilitySlot<InstallCapability> {
    static SLOT: OnceLock<CapabilitySlot<InstallCapability>> = OnceLock::new();
    SLOT.get_or_init(CapabilitySlot::new)
}

/// Timer events of the install flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallEvent {
    FallbackDue,
}

/// What the install banner should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallBanner {
    Hidden,
    /// Offer the native install button
    Native,
    /// Show manual install steps
    Instructions,
}

/// Static steps shown when no native prompt exists.
pub const INSTALL_INSTRUCTIONS: &[&str] = &[
    "Open the app menu",
    "Choose \"Install VegBazar\" or \"Add to Home Screen\"",
    "Confirm to pin VegBazar for one-tap grocery orders",
];

/// Coordinates the install banner with the capability slot, dismissal
/// policy and fallback timer.
pub struct InstallPromptFlow<S> {
    slot: CapabilitySlot<InstallCapability>,
    scheduler: S,
    policy: DismissalPolicy,
    fallback_delay: Duration,
    fallback_timer: Option<TimerId>,
    dismissal: Option<DismissalRecord>,
    installed: bool,
    eligible: bool,
}

impl<S: Scheduler<InstallEvent>> InstallPromptFlow<S> {
    pub fn new(
        slot: CapabilitySlot<InstallCapability>,
        scheduler: S,
        policy: DismissalPolicy,
        fallback_delay: Duration,
    ) -> Self {
        Self {
            slot,
            scheduler,
            policy,
            fallback_delay,
            fallback_timer: None,
            dismissal: None,
            installed: false,
            eligible: false,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Begin at startup with the persisted dismissal (if any) and whether the
    /// app is already installed.
    pub fn start(&mut self, dismissal: Option<DismissalRecord>, installed: bool, now: DateTime<Utc>) {
        self.dismissal = dismissal;
        self.installed = installed;
        self.eligible = !installed && self.policy.should_show(self.dismissal.as_ref(), now);

        if self.eligible && !self.slot.is_present() {
            self.arm_fallback();
        }
        tracing::debug!(eligible = self.eligible, installed, "Install prompt flow started");
    }

    fn arm_fallback(&mut self) {
        self.cancel_fallback();
        self.fallback_timer = Some(
            self.scheduler
                .schedule(self.fallback_delay, InstallEvent::FallbackDue),
        );
    }

    fn cancel_fallback(&mut self) {
        if let Some(id) = self.fallback_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// The platform offered a native prompt.
    pub fn on_prompt_captured(&mut self, prompt: Arc<dyn DeferredPrompt>) {
        self.slot
            .set(InstallCapability::Native(prompt), CapabilitySource::Event);
        self.cancel_fallback();
    }

    /// Deliver an elapsed timer.
    pub fn fire(&mut self, fired: Fired<InstallEvent>) {
        self.scheduler.cancel(fired.id);
        if self.fallback_timer != Some(fired.id) {
            return;
        }
        self.fallback_timer = None;

        match fired.event {
            InstallEvent::FallbackDue => {
                if self
                    .slot
                    .set(InstallCapability::Instructions, CapabilitySource::Fallback)
                {
                    tracing::debug!("No native install prompt, showing instructions");
                }
            }
        }
    }

    /// What to render right now.
    pub fn banner(&self) -> InstallBanner {
        if !self.eligible || self.installed {
            return InstallBanner::Hidden;
        }
        match self.slot.get() {
            Some(InstallCapability::Native(_)) => InstallBanner::Native,
            Some(InstallCapability::Instructions) => InstallBanner::Instructions,
            None => InstallBanner::Hidden,
        }
    }

    /// Take the native prompt for showing. Prompts are single-use, so the
    /// slot is emptied; `None` means only instructions are available.
    pub fn take_native_prompt(&mut self) -> Option<Arc<dyn DeferredPrompt>> {
        match self.slot.get() {
            Some(InstallCapability::Native(_)) => match self.slot.take() {
                Some(InstallCapability::Native(prompt)) => Some(prompt),
                _ => None,
            },
            _ => None,
        }
    }

    /// Apply the native dialog's result. Returns a record to persist when the
    /// user declined.
    pub fn record_outcome(&mut self, outcome: InstallOutcome, now: DateTime<Utc>) -> Option<DismissalRecord> {
        tracing::info!(?outcome, "Install prompt answered");
        match outcome {
            InstallOutcome::Accepted => {
                self.mark_installed();
                None
            }
            InstallOutcome::Dismissed => Some(self.dismiss(now)),
        }
    }

    /// The user closed the banner. Returns the record to persist.
    pub fn dismiss(&mut self, now: DateTime<Utc>) -> DismissalRecord {
        let record = DismissalRecord::dismissed_at(now);
        self.dismissal = Some(record);
        self.eligible = false;
        self.cancel_fallback();
        record
    }

    /// The app was installed by any route.
    pub fn mark_installed(&mut self) {
        self.installed = true;
        self.eligible = false;
        self.slot.clear();
        self.cancel_fallback();
    }

    /// Cancel pending timers on teardown.
    pub fn stop(&mut self) {
        self.cancel_fallback();
    }
}

/// Show a native prompt, treating failures as a dismissal.
pub async fn run_prompt(prompt: Arc<dyn DeferredPrompt>) -> InstallOutcome {
    match prompt.prompt().await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(error = %e, "Install prompt failed");
            InstallOutcome::Dismissed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;
    use crate::timer::VirtualScheduler;
    use chrono::TimeZone;

    /// Resolves with a fixed outcome; `None` fails like a consumed prompt.
    struct FixedPrompt(Option<InstallOutcome>);

    impl DeferredPrompt for FixedPrompt {
        fn prompt(&self) -> BoxFuture<'_, StorefrontResult<InstallOutcome>> {
            let outcome = self.0;
            Box::pin(async move {
                outcome.ok_or_else(|| StorefrontError::InstallPrompt("already used".into()))
            })
        }
    }

    const FALLBACK: Duration = Duration::from_millis(3000);

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
    }

    fn flow() -> InstallPromptFlow<VirtualScheduler<InstallEvent>> {
        InstallPromptFlow::new(
            CapabilitySlot::new(),
            VirtualScheduler::new(),
            DismissalPolicy::default(),
            FALLBACK,
        )
    }

    fn run(flow: &mut InstallPromptFlow<VirtualScheduler<InstallEvent>>, until: Duration) {
        while let Some(fired) = flow.scheduler.pop_next_due(until) {
            flow.fire(fired);
        }
        flow.scheduler.set_now(until);
    }

    #[test]
    fn hidden_until_fallback_then_instructions() {
        let mut flow = flow();
        flow.start(None, false, now());
        assert_eq!(flow.banner(), InstallBanner::Hidden);

        run(&mut flow, FALLBACK);
        assert_eq!(flow.banner(), InstallBanner::Instructions);
    }

    #[test]
    fn captured_prompt_beats_fallback() {
        let mut flow = flow();
        flow.start(None, false, now());
        flow.on_prompt_captured(Arc::new(FixedPrompt(Some(InstallOutcome::Accepted))));
        assert_eq!(flow.scheduler().pending(), 0);

        run(&mut flow, FALLBACK * 2);
        assert_eq!(flow.banner(), InstallBanner::Native);
    }

    #[test]
    fn late_prompt_replaces_instructions() {
        let mut flow = flow();
        flow.start(None, false, now());
        run(&mut flow, FALLBACK);
        flow.on_prompt_captured(Arc::new(FixedPrompt(Some(InstallOutcome::Accepted))));
        assert_eq!(flow.banner(), InstallBanner::Native);
    }

    #[test]
    fn recent_dismissal_hides_banner() {
        let mut flow = flow();
        let record = DismissalRecord::dismissed_at(now() - chrono::Duration::days(2));
        flow.start(Some(record), false, now());
        assert_eq!(flow.scheduler().pending(), 0);
        run(&mut flow, FALLBACK);
        assert_eq!(flow.banner(), InstallBanner::Hidden);
    }

    #[test]
    fn old_dismissal_shows_again() {
        let mut flow = flow();
        let record = DismissalRecord::dismissed_at(now() - chrono::Duration::days(8));
        flow.start(Some(record), false, now());
        run(&mut flow, FALLBACK);
        assert_eq!(flow.banner(), InstallBanner::Instructions);
    }

    #[test]
    fn installed_app_never_prompts() {
        let mut flow = flow();
        flow.start(None, true, now());
        flow.on_prompt_captured(Arc::new(FixedPrompt(Some(InstallOutcome::Accepted))));
        assert_eq!(flow.banner(), InstallBanner::Hidden);
    }

    #[test]
    fn dismiss_returns_record_and_hides() {
        let mut flow = flow();
        flow.start(None, false, now());
        let record = flow.dismiss(now());
        assert!(record.dismissed);
        assert_eq!(record.dismissed_at, now());
        assert_eq!(flow.banner(), InstallBanner::Hidden);
        assert_eq!(flow.scheduler().pending(), 0);
    }

    #[tokio::test]
    async fn accepted_prompt_marks_installed() {
        let mut flow = flow();
        flow.start(None, false, now());
        flow.on_prompt_captured(Arc::new(FixedPrompt(Some(InstallOutcome::Accepted))));

        let prompt = flow.take_native_prompt().unwrap();
        assert!(flow.take_native_prompt().is_none());

        let outcome = run_prompt(prompt).await;
        assert_eq!(flow.record_outcome(outcome, now()), None);
        assert_eq!(flow.banner(), InstallBanner::Hidden);
    }

    #[tokio::test]
    async fn failing_prompt_counts_as_dismissal() {
        let mut flow = flow();
        flow.start(None, false, now());
        flow.on_prompt_captured(Arc::new(FixedPrompt(None)));

        let outcome = run_prompt(flow.take_native_prompt().unwrap()).await;
        assert_eq!(outcome, InstallOutcome::Dismissed);
        assert!(flow.record_outcome(outcome, now()).is_some());
    }

    #[test]
    fn instructions_are_not_a_native_prompt() {
        let mut flow = flow();
        flow.start(None, false, now());
        run(&mut flow, FALLBACK);
        assert!(flow.take_native_prompt().is_none());
        assert_eq!(flow.banner(), InstallBanner::Instructions);
    }

    #[test]
    fn global_slot_is_shared() {
        let a = install_slot();
        let b = install_slot();
        assert!(std::ptr::eq(a, b));
    }
}
