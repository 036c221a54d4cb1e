//! Storefront timing and display configuration.
//!
//! Every field has a default, so a partial (or absent) JSON file is valid:
//!
//! ```json
//! { "autoplay_interval_ms": 8000, "reprompt_after_days": 14 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};

/// Shortest accepted carousel transition delay or autoplay interval.
pub const MIN_CAROUSEL_DELAY_MS: u64 = 50;

/// Longest accepted re-prompt window (about ten years).
pub const MAX_REPROMPT_DAYS: i64 = 3650;

const DEFAULT_REPROMPT_DAYS: i64 = 7;

/// Tunable timings and limits for the storefront components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Delay between a navigation request and the index swap
    pub transition_delay_ms: u64,
    /// Cadence of carousel auto-advance
    pub autoplay_interval_ms: u64,
    /// How long the cashback modal stays up before dismissing itself
    pub modal_display_ms: u64,
    /// Length of the modal exit animation
    pub modal_exit_ms: u64,
    /// How long "Copied!" feedback lingers after copying an order ID
    pub copy_feedback_ms: u64,
    /// Wait before falling back to static install instructions
    pub install_fallback_ms: u64,
    /// Days after a dismissal before the install prompt may reappear
    pub reprompt_after_days: i64,
    /// Maximum characters shown in a testimonial excerpt
    pub excerpt_chars: usize,
    /// ISO currency code reported with analytics events
    pub currency: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: 300,
            autoplay_interval_ms: 5000,
            modal_display_ms: 5000,
            modal_exit_ms: 300,
            copy_feedback_ms: 2000,
            install_fallback_ms: 3000,
            reprompt_after_days: DEFAULT_REPROMPT_DAYS,
            excerpt_chars: 120,
            currency: "INR".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(raw: &str) -> StorefrontResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| StorefrontError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the timers cannot run on.
    ///
    /// Transition and autoplay delays re-arm themselves, so each must be at
    /// least [`MIN_CAROUSEL_DELAY_MS`]. The re-prompt window must fit a
    /// `chrono::Duration` and may not be negative.
    pub fn validate(&self) -> StorefrontResult<()> {
        if self.transition_delay_ms < MIN_CAROUSEL_DELAY_MS {
            return Err(StorefrontError::Config(format!(
                "transition_delay_ms must be at least {} (got {})",
                MIN_CAROUSEL_DELAY_MS, self.transition_delay_ms
            )));
        }
        if self.autoplay_interval_ms < MIN_CAROUSEL_DELAY_MS {
            return Err(StorefrontError::Config(format!(
                "autoplay_interval_ms must be at least {} (got {})",
                MIN_CAROUSEL_DELAY_MS, self.autoplay_interval_ms
            )));
        }
        if !(0..=MAX_REPROMPT_DAYS).contains(&self.reprompt_after_days) {
            return Err(StorefrontError::Config(format!(
                "reprompt_after_days must be between 0 and {} (got {})",
                MAX_REPROMPT_DAYS, self.reprompt_after_days
            )));
        }
        Ok(())
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn modal_display(&self) -> Duration {
        Duration::from_millis(self.modal_display_ms)
    }

    pub fn modal_exit(&self) -> Duration {
        Duration::from_millis(self.modal_exit_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn install_fallback(&self) -> Duration {
        Duration::from_millis(self.install_fallback_ms)
    }

    /// Re-prompt window. Values a `chrono::Duration` cannot hold fall back
    /// to the seven-day default.
    pub fn reprompt_after(&self) -> chrono::Duration {
        chrono::Duration::try_days(self.reprompt_after_days).unwrap_or_else(|| {
            tracing::warn!(days = self.reprompt_after_days, "Re-prompt window out of range, using 7 days");
            chrono::Duration::days(DEFAULT_REPROMPT_DAYS)
        })
    }
}
