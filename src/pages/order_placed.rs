//! Order confirmation page.

use dioxus::prelude::*;
use vegbazar_core::Money;
use vegbazar_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::{CashbackCelebration, OrderIdChip};
use crate::context::{use_last_order, use_storefront};

#[component]
pub fn OrderPlaced(order_id: String) -> Element {
    let storefront = use_storefront();
    let navigator = use_navigator();
    let last_order = use_last_order();

    use_hook({
        let analytics = storefront.analytics.clone();
        let order_id = order_id.clone();
        move || analytics.track_order(order_id)
    });

    // Only celebrate the order that was placed in this session.
    let order = last_order
        .read()
        .clone()
        .filter(|order| order.order_id == order_id);
    let mut show_cashback = use_signal(|| {
        order
            .as_ref()
            .map(|order| order.cashback > Money::ZERO)
            .unwrap_or(false)
    });

    rsx! {
        main { class: "page order-confirmation",
            h1 { class: "section-title", "Order placed!" }
            OrderIdChip { order_id: order_id.clone() }

            if let Some(order) = order.as_ref() {
                p { "Paid {order.total}. Your vegetables are on their way." }
            }

            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    navigator.push(Route::Home {});
                },
                "Continue shopping"
            }

            if show_cashback() {
                if let Some(order) = order.as_ref() {
                    CashbackCelebration {
                        amount: order.cashback,
                        new_balance: order.new_balance,
                        on_closed: move |_| show_cashback.set(false),
                    }
                }
            }
        }
    }
}
