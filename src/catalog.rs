//! Demo product catalog and cart.

use chrono::{DateTime, Utc};
use vegbazar_core::{AnalyticsItem, DisplayItem, Money};

pub const CATALOG_LIST: &str = "Fresh today";

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub unit: &'static str,
    pub price: Money,
}

impl Product {
    pub fn analytics_item(&self, quantity: u32) -> AnalyticsItem {
        AnalyticsItem::new(self.id, self.name, self.category, self.price, quantity)
    }
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "tomato-1kg",
            name: "Desi Tomato",
            category: "Vegetables",
            unit: "1 kg",
            price: Money::from_paise(4_200),
        },
        Product {
            id: "onion-1kg",
            name: "Red Onion",
            category: "Vegetables",
            unit: "1 kg",
            price: Money::from_paise(3_850),
        },
        Product {
            id: "spinach-250g",
            name: "Palak",
            category: "Leafy Greens",
            unit: "250 g",
            price: Money::from_rupees(25),
        },
        Product {
            id: "banana-12",
            name: "Robusta Banana",
            category: "Fruits",
            unit: "12 pcs",
            price: Money::from_rupees(60),
        },
    ]
}

/// Cart lines in the order products were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<(Product, u32)>,
}

impl Cart {
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|(p, _)| p.id == product.id) {
            Some((_, qty)) => *qty += 1,
            None => self.lines.push((product.clone(), 1)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|(_, qty)| qty).sum()
    }

    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::ZERO, |acc, (p, qty)| acc + p.price.times(*qty))
    }

    pub fn analytics_items(&self) -> Vec<AnalyticsItem> {
        self.lines
            .iter()
            .map(|(p, qty)| p.analytics_item(*qty))
            .collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Wallet cashback earned on an order: 5% of the total, rounded down to the paisa.
pub fn cashback_for(total: Money) -> Money {
    Money::from_paise(total.paise() * 5 / 100)
}

/// Human-friendly order number derived from the placement time.
pub fn order_id_at(at: DateTime<Utc>) -> String {
    format!("VB{}", at.format("%y%m%d%H%M%S"))
}

const TESTIMONIALS_JSON: &str = r#"[
  {"comment": "Vegetables arrive crisp every single time. The palak is better than my local mandi.", "authorName": "Asha Kulkarni", "rating": 5},
  {"comment": "Quick delivery, fair prices.", "authorName": "Ravi Menon", "rating": 4},
  {"comment": "Tomatoes were a little soft once but support refunded without fuss.", "authorName": "Farah Sheikh", "rating": 4},
  {"comment": "The wallet cashback adds up nicely over a month of orders.", "name": "Gurpreet Singh", "rating": 5}
]"#;

/// Testimonials as delivered by the content feed. A feed that fails to
/// parse shows the empty-carousel placeholder.
pub fn testimonials() -> Vec<DisplayItem> {
    match serde_json::from_str::<serde_json::Value>(TESTIMONIALS_JSON) {
        Ok(feed) => DisplayItem::list_from_json(&feed),
        Err(e) => {
            tracing::warn!("Testimonial feed unreadable: {}", e);
            Vec::new()
        }
    }
}
