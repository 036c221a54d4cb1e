//! Fire-and-forget analytics forwarding.
//!
//! The storefront never depends on analytics working. [`Analytics::track`]
//! returns nothing and fails silently: with no tag manager installed it is a
//! no-op, and a tag manager that cannot record an event only logs.

mod event;
mod jsonl;

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

pub use event::{AnalyticsEvent, AnalyticsItem};
pub use jsonl::{AnalyticsRecord, JsonlTagManager};

/// The page-global tag-manager hook.
pub trait TagManager: Send + Sync {
    /// Record one event. Implementations must not panic.
    fn push(&self, event: &str, params: &Map<String, Value>);
}

/// Forwards typed events to an optional [`TagManager`].
#[derive(Clone)]
pub struct Analytics {
    hook: Arc<RwLock<Option<Arc<dyn TagManager>>>>,
    currency: String,
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new("INR")
    }
}

impl Analytics {
    /// Analytics with no hook installed yet.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            hook: Arc::new(RwLock::new(None)),
            currency: currency.into(),
        }
    }

    pub fn with_hook(currency: impl Into<String>, hook: Arc<dyn TagManager>) -> Self {
        let analytics = Self::new(currency);
        analytics.install(hook);
        analytics
    }

    pub fn install(&self, hook: Arc<dyn TagManager>) {
        *self.hook.write() = Some(hook);
    }

    pub fn uninstall(&self) {
        *self.hook.write() = None;
    }

    pub fn is_installed(&self) -> bool {
        self.hook.read().is_some()
    }

    /// Forward a typed event.
    pub fn track(&self, event: &AnalyticsEvent) {
        self.track_raw(event.name(), event.params(&self.currency));
    }

    /// Forward an arbitrary event name and parameters.
    pub fn track_raw(&self, event: &str, params: Map<String, Value>) {
        let hook = self.hook.read().clone();
        match hook {
            Some(hook) => hook.push(event, &params),
            None => tracing::debug!(event, "No tag manager installed, event skipped"),
        }
    }

    pub fn view_item(&self, item: AnalyticsItem) {
        self.track(&AnalyticsEvent::ViewItem(item));
    }

    pub fn select_item(&self, item: AnalyticsItem, list_name: impl Into<String>) {
        self.track(&AnalyticsEvent::SelectItem {
            item,
            list_name: list_name.into(),
        });
    }

    pub fn add_to_cart(&self, item: AnalyticsItem) {
        self.track(&AnalyticsEvent::AddToCart(item));
    }

    pub fn begin_checkout(&self, items: Vec<AnalyticsItem>) {
        self.track(&AnalyticsEvent::BeginCheckout(items));
    }

    pub fn purchase(
        &self,
        transaction_id: impl Into<String>,
        payment_type: impl Into<String>,
        items: Vec<AnalyticsItem>,
    ) {
        self.track(&AnalyticsEvent::Purchase {
            transaction_id: transaction_id.into(),
            payment_type: payment_type.into(),
            items,
        });
    }

    pub fn track_order(&self, order_id: impl Into<String>) {
        self.track(&AnalyticsEvent::TrackOrder {
            order_id: order_id.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use parking_lot::Mutex;

    /// Records pushed events in memory.
    #[derive(Default)]
    struct MemoryTagManager {
        events: Mutex<Vec<(String, Map<String, Value>)>>,
    }

    impl MemoryTagManager {
        fn new() -> Self {
            Self::default()
        }

        /// Everything recorded so far, oldest first.
        fn events(&self) -> Vec<(String, Map<String, Value>)> {
            self.events.lock().clone()
        }

        fn event_names(&self) -> Vec<String> {
            self.events.lock().iter().map(|(name, _)| name.clone()).collect()
        }
    }

    impl TagManager for MemoryTagManager {
        fn push(&self, event: &str, params: &Map<String, Value>) {
            self.events.lock().push((event.to_string(), params.clone()));
        }
    }

    fn carrots() -> AnalyticsItem {
        AnalyticsItem::new("veg-010", "Carrot", "Vegetables", Money::from_paise(2500), 1)
    }

    #[test]
    fn missing_hook_is_silent() {
        let analytics = Analytics::default();
        assert!(!analytics.is_installed());
        analytics.add_to_cart(carrots());
    }

    #[test]
    fn installed_hook_receives_events() {
        let hook = Arc::new(MemoryTagManager::new());
        let analytics = Analytics::with_hook("INR", hook.clone());

        analytics.view_item(carrots());
        analytics.select_item(carrots(), "Seasonal picks");
        analytics.track_order("VB-77");

        assert_eq!(hook.event_names(), vec!["view_item", "select_item", "track_order"]);
        let events = hook.events();
        let (_, params) = &events[1];
        assert_eq!(params["item_list_name"], "Seasonal picks");
    }

    #[test]
    fn uninstall_stops_forwarding() {
        let hook = Arc::new(MemoryTagManager::new());
        let analytics = Analytics::with_hook("INR", hook.clone());
        analytics.uninstall();
        analytics.begin_checkout(vec![carrots()]);
        assert!(hook.events().is_empty());
    }

    #[test]
    fn clones_share_the_hook() {
        let analytics = Analytics::default();
        let clone = analytics.clone();
        let hook = Arc::new(MemoryTagManager::new());
        analytics.install(hook.clone());

        clone.purchase("VB-1", "cod", vec![carrots()]);
        assert_eq!(hook.event_names(), vec!["purchase"]);
    }
}
