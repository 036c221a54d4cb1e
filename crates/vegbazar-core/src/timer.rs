//! Deferred events with cancellation.
//!
//! Components never sleep themselves. They ask a [`Scheduler`] to deliver an
//! event after a delay and keep the returned [`TimerId`] so the timer can be
//! cancelled on teardown or when newer input supersedes it. The owner feeds
//! each [`Fired`] event back into its state machine.
//!
//! Two schedulers are provided:
//! - [`TokioScheduler`]: real timers on the tokio runtime, delivered over an
//!   mpsc channel
//! - [`VirtualScheduler`]: a manually advanced clock for deterministic tests

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Handle to a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// An event whose delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub id: TimerId,
    pub event: E,
}

/// Something that can deliver `E` after a delay.
pub trait Scheduler<E> {
    /// Schedule `event` to fire once after `delay`.
    fn schedule(&mut self, delay: Duration, event: E) -> TimerId;

    /// Cancel a pending timer. Cancelling an unknown or already fired id is a no-op.
    fn cancel(&mut self, id: TimerId);
}

// ═══════════════════════════════════════════════════════════════════════════
// Tokio
// ═══════════════════════════════════════════════════════════════════════════

/// Scheduler backed by `tokio::time::sleep`.
///
/// Each timer is a spawned task racing its sleep against a
/// [`CancellationToken`]. Dropping the scheduler cancels everything still
/// pending, so a retired owner can never receive a late event.
pub struct TokioScheduler<E> {
    tx: mpsc::UnboundedSender<Fired<E>>,
    tokens: HashMap<TimerId, CancellationToken>,
    next_id: u64,
}

impl<E: Send + 'static> TokioScheduler<E> {
    pub fn new(tx: mpsc::UnboundedSender<Fired<E>>) -> Self {
        Self {
            tx,
            tokens: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create a scheduler together with the receiver its events arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Fired<E>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Number of timers that have not been cancelled or retired.
    pub fn pending(&self) -> usize {
        self.tokens.len()
    }
}

impl<E: Send + 'static> Scheduler<E> for TokioScheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Receiver gone means the owner was torn down.
                    let _ = tx.send(Fired { id, event });
                }
            }
        });

        self.tokens.insert(id, token);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(token) = self.tokens.remove(&id) {
            token.cancel();
        }
    }
}

impl<E> Drop for TokioScheduler<E> {
    fn drop(&mut self) {
        for (_, token) in self.tokens.drain() {
            token.cancel();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Virtual clock
// ═══════════════════════════════════════════════════════════════════════════

/// Scheduler with a manually advanced clock.
///
/// Time only moves when the owner pops due events, which makes timer
/// interleavings fully reproducible in tests.
#[derive(Debug)]
pub struct VirtualScheduler<E> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), E>,
    deadlines: HashMap<TimerId, Duration>,
}

impl<E> Default for VirtualScheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<E> VirtualScheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Pop the earliest event due at or before `until`, moving the clock to
    /// its deadline. Events with equal deadlines fire in scheduling order.
    pub fn pop_next_due(&mut self, until: Duration) -> Option<Fired<E>> {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }
        let event = self.queue.remove(&key)?;
        self.deadlines.remove(&key.1);
        self.now = self.now.max(key.0);
        Some(Fired { id: key.1, event })
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }
}

impl<E> Scheduler<E> for VirtualScheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let at = self.now + delay;
        self.queue.insert((at, id), event);
        self.deadlines.insert(id, at);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(at) = self.deadlines.remove(&id) {
            self.queue.remove(&(at, id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_fires_in_deadline_order() {
        let mut sched = VirtualScheduler::new();
        let late = sched.schedule(Duration::from_millis(500), "late");
        let early = sched.schedule(Duration::from_millis(100), "early");

        let first = sched.pop_next_due(Duration::from_secs(1)).unwrap();
        assert_eq!(first, Fired { id: early, event: "early" });
        assert_eq!(sched.now(), Duration::from_millis(100));

        let second = sched.pop_next_due(Duration::from_secs(1)).unwrap();
        assert_eq!(second.id, late);
        assert!(sched.pop_next_due(Duration::from_secs(1)).is_none());
    }

    #[test]
    fn virtual_respects_until() {
        let mut sched = VirtualScheduler::new();
        sched.schedule(Duration::from_millis(300), ());
        assert!(sched.pop_next_due(Duration::from_millis(299)).is_none());
        assert!(sched.pop_next_due(Duration::from_millis(300)).is_some());
    }

    #[test]
    fn virtual_cancel_removes_timer() {
        let mut sched = VirtualScheduler::new();
        let id = sched.schedule(Duration::from_millis(10), ());
        sched.cancel(id);
        assert_eq!(sched.pending(), 0);
        assert!(sched.pop_next_due(Duration::from_secs(60)).is_none());

        // Unknown ids are ignored
        sched.cancel(id);
    }

    #[test]
    fn virtual_delays_are_relative_to_now() {
        let mut sched = VirtualScheduler::new();
        sched.set_now(Duration::from_secs(10));
        sched.schedule(Duration::from_millis(300), ());
        assert_eq!(sched.next_deadline(), Some(Duration::from_millis(10_300)));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_delivers_after_delay() {
        let (mut sched, mut rx) = TokioScheduler::channel();
        let id = sched.schedule(Duration::from_millis(300), 7u32);

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired, Fired { id, event: 7 });
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_cancel_suppresses_delivery() {
        let (mut sched, mut rx) = TokioScheduler::channel();
        let id = sched.schedule(Duration::from_millis(300), ());
        sched.cancel(id);
        assert_eq!(sched.pending(), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_drop_cancels_pending() {
        let (mut sched, mut rx) = TokioScheduler::channel();
        sched.schedule(Duration::from_millis(300), ());
        drop(sched);

        // All senders are gone once the cancelled task exits.
        assert!(rx.recv().await.is_none());
    }
}
