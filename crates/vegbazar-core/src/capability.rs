//! Optional platform capabilities shared across the app.
//!
//! A [`CapabilitySlot`] replaces ad hoc globals for things the platform may or
//! may not hand us (an install prompt, for instance). Values carry the
//! [`CapabilitySource`] that produced them; a value captured from a platform
//! event always outranks one installed by a fallback timer.

use std::sync::Arc;

use parking_lot::RwLock;

/// Where a capability value came from. Later variants take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilitySource {
    /// Installed after a timeout when the platform stayed silent
    Fallback,
    /// Captured from a platform event
    Event,
}

/// A shared, optional capability value with source precedence.
///
/// Clones refer to the same slot.
pub struct CapabilitySlot<T> {
    inner: Arc<RwLock<Option<(T, CapabilitySource)>>>,
}

impl<T> Clone for CapabilitySlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for CapabilitySlot<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }
}

impl<T: Clone> CapabilitySlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` unless the slot holds one from a higher-ranked source.
    ///
    /// Returns whether the value was stored.
    pub fn set(&self, value: T, source: CapabilitySource) -> bool {
        let mut slot = self.inner.write();
        if let Some((_, current)) = slot.as_ref() {
            if *current > source {
                tracing::debug!(?source, ?current, "Capability kept, higher-ranked value present");
                return false;
            }
        }
        *slot = Some((value, source));
        true
    }

    /// Current value, if any.
    pub fn get(&self) -> Option<T> {
        self.inner.read().as_ref().map(|(value, _)| value.clone())
    }

    /// Source of the current value, if any.
    pub fn source(&self) -> Option<CapabilitySource> {
        self.inner.read().as_ref().map(|(_, source)| *source)
    }

    /// Remove and return the current value.
    pub fn take(&self) -> Option<T> {
        self.inner.write().take().map(|(value, _)| value)
    }

    pub fn clear(&self) {
        self.inner.write().take();
    }

    pub fn is_present(&self) -> bool {
        self.inner.read().is_some()
    }
}
