//! Re-prompt policy for dismissible surfaces.
//!
//! A dismissal is remembered with its timestamp. The surface comes back once
//! the configured window (seven days by default) has fully elapsed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Storage key for the install prompt's dismissal.
pub const INSTALL_PROMPT_KEY: &str = "install_prompt";

/// Storage key for a promotional banner's dismissal.
pub fn promo_key(banner_id: &str) -> String {
    format!("promo:{}", banner_id)
}

/// Persisted dismissal state for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissalRecord {
    pub dismissed: bool,
    pub dismissed_at: DateTime<Utc>,
}

impl DismissalRecord {
    pub fn dismissed_at(at: DateTime<Utc>) -> Self {
        Self {
            dismissed: true,
            dismissed_at: at,
        }
    }
}

/// Decides whether a previously dismissed surface may be shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissalPolicy {
    pub reprompt_after: Duration,
}

impl Default for DismissalPolicy {
    fn default() -> Self {
        Self {
            reprompt_after: Duration::days(7),
        }
    }
}

impl DismissalPolicy {
    pub fn new(reprompt_after: Duration) -> Self {
        Self { reprompt_after }
    }

    /// Show when there is no record, the record is not a dismissal, or
    /// strictly more than the re-prompt window has passed since it.
    pub fn should_show(&self, record: Option<&DismissalRecord>, now: DateTime<Utc>) -> bool {
        match record {
            None => true,
            Some(record) if !record.dismissed => true,
            Some(record) => now.signed_duration_since(record.dismissed_at) > self.reprompt_after,
        }
    }
}
