//! Typed storefront analytics events.
//!
//! Each variant maps to one tag-manager event name with a fixed parameter
//! schema. Money values are reported in major units (rupees) as the tag
//! manager expects.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::money::Money;

/// A product line as reported to analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsItem {
    pub item_id: String,
    pub item_name: String,
    pub item_category: String,
    pub price: Money,
    pub quantity: u32,
}

impl AnalyticsItem {
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        item_category: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            item_category: item_category.into(),
            price,
            quantity,
        }
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }

    fn to_params(&self) -> Value {
        json!({
            "item_id": self.item_id,
            "item_name": self.item_name,
            "item_category": self.item_category,
            "price": self.price.as_major(),
            "quantity": self.quantity,
        })
    }
}

/// Storefront events forwarded to the tag manager.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    ViewItem(AnalyticsItem),
    SelectItem {
        item: AnalyticsItem,
        list_name: String,
    },
    AddToCart(AnalyticsItem),
    BeginCheckout(Vec<AnalyticsItem>),
    Purchase {
        transaction_id: String,
        payment_type: String,
        items: Vec<AnalyticsItem>,
    },
    TrackOrder {
        order_id: String,
    },
}

impl AnalyticsEvent {
    /// Tag-manager event name.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::ViewItem(_) => "view_item",
            AnalyticsEvent::SelectItem { .. } => "select_item",
            AnalyticsEvent::AddToCart(_) => "add_to_cart",
            AnalyticsEvent::BeginCheckout(_) => "begin_checkout",
            AnalyticsEvent::Purchase { .. } => "purchase",
            AnalyticsEvent::TrackOrder { .. } => "track_order",
        }
    }

    /// Event parameters in the shape the tag manager expects.
    pub fn params(&self, currency: &str) -> Map<String, Value> {
        let value = match self {
            AnalyticsEvent::ViewItem(item) | AnalyticsEvent::AddToCart(item) => json!({
                "currency": currency,
                "value": item.line_total().as_major(),
                "items": [item.to_params()],
            }),
            AnalyticsEvent::SelectItem { item, list_name } => json!({
                "item_list_name": list_name,
                "items": [item.to_params()],
            }),
            AnalyticsEvent::BeginCheckout(items) => json!({
                "currency": currency,
                "value": cart_total(items).as_major(),
                "items": items.iter().map(AnalyticsItem::to_params).collect::<Vec<_>>(),
            }),
            AnalyticsEvent::Purchase {
                transaction_id,
                payment_type,
                items,
            } => json!({
                "transaction_id": transaction_id,
                "value": cart_total(items).as_major(),
                "currency": currency,
                "payment_type": payment_type,
                "items": items.iter().map(AnalyticsItem::to_params).collect::<Vec<_>>(),
            }),
            AnalyticsEvent::TrackOrder { order_id } => json!({ "order_id": order_id }),
        };

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

fn cart_total(items: &[AnalyticsItem]) -> Money {
    items
        .iter()
        .fold(Money::ZERO, |total, item| total + item.line_total())
}
