//! Storefront context shared with every component.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Storefront::open(get_data_dir(), get_config(), analytics_enabled()));
//!
//! // In child components
//! let storefront = use_storefront();
//! storefront.analytics.track_order(&order_id);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use vegbazar_core::analytics::JsonlTagManager;
use vegbazar_core::{Analytics, DismissalPolicy, Money, Storage, StorefrontConfig};

/// Database file inside the data directory.
pub const STORAGE_FILE: &str = "vegbazar.redb";

/// Wallet balance a fresh session starts with.
pub const STARTING_WALLET: Money = Money::from_rupees(120);

/// Services every page may use.
///
/// Storage is optional: if the database cannot be opened the storefront
/// still renders, it just forgets dismissals between runs.
#[derive(Clone)]
pub struct Storefront {
    pub config: StorefrontConfig,
    pub storage: Option<Storage>,
    pub analytics: Analytics,
}

impl Storefront {
    pub fn open(data_dir: PathBuf, config: StorefrontConfig, analytics_enabled: bool) -> Self {
        let storage = match Storage::new(data_dir.join(STORAGE_FILE)) {
            Ok(storage) => Some(storage),
            Err(e) => {
                tracing::error!("Failed to open storage: {}", e);
                None
            }
        };

        let analytics = Analytics::new(config.currency.clone());
        if analytics_enabled {
            match JsonlTagManager::new(data_dir.join("analytics")) {
                Ok(hook) => analytics.install(Arc::new(hook)),
                Err(e) => tracing::warn!("Analytics disabled, cannot open event log: {}", e),
            }
        }

        Self {
            config,
            storage,
            analytics,
        }
    }

    pub fn dismissal_policy(&self) -> DismissalPolicy {
        DismissalPolicy::new(self.config.reprompt_after())
    }
}

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the storefront configuration.
pub fn get_config() -> StorefrontConfig {
    crate::get_config()
}

pub fn analytics_enabled() -> bool {
    crate::analytics_enabled()
}

/// Hook to access the storefront services from context.
pub fn use_storefront() -> Storefront {
    use_context::<Storefront>()
}

/// The order just placed, shown on the confirmation page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub total: Money,
    pub cashback: Money,
    pub new_balance: Money,
}

/// Hook to access the last placed order.
pub fn use_last_order() -> Signal<Option<PlacedOrder>> {
    use_context::<Signal<Option<PlacedOrder>>>()
}

/// Hook to access the wallet balance.
pub fn use_wallet() -> Signal<Money> {
    use_context::<Signal<Money>>()
}
