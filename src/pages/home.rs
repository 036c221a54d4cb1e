//! Storefront home: offers, today's produce, cart and testimonials.

use chrono::Utc;
use dioxus::prelude::*;
use vegbazar_core::carousel::CarouselTiming;
use vegbazar_core::DisplayItem;
use vegbazar_ui::{Button, ButtonVariant, TestimonialCarousel};

use crate::app::Route;
use crate::catalog::{self, cashback_for, order_id_at, Cart, Product, CATALOG_LIST};
use crate::components::{InstallPrompt, PromoStrip};
use crate::context::{use_last_order, use_storefront, use_wallet, PlacedOrder};

/// Payment method recorded for demo checkouts.
const PAYMENT_TYPE: &str = "wallet";

#[component]
pub fn Home() -> Element {
    let storefront = use_storefront();
    let navigator = use_navigator();
    let mut wallet = use_wallet();
    let mut last_order = use_last_order();

    let mut cart: Signal<Cart> = use_signal(Cart::default);
    let products = use_hook(catalog::products);
    let testimonials: Vec<DisplayItem> = use_hook(catalog::testimonials);
    let timing = CarouselTiming::from(&storefront.config);

    let place_order = {
        let analytics = storefront.analytics.clone();
        move |_: ()| {
            let items = cart.read().analytics_items();
            if items.is_empty() {
                return;
            }
            let total = cart.read().total();
            let order_id = order_id_at(Utc::now());

            analytics.begin_checkout(items.clone());
            analytics.purchase(order_id.clone(), PAYMENT_TYPE, items);

            let cashback = cashback_for(total);
            let new_balance = wallet() + cashback;
            wallet.set(new_balance);
            last_order.set(Some(PlacedOrder {
                order_id: order_id.clone(),
                total,
                cashback,
                new_balance,
            }));
            cart.write().clear();

            tracing::info!(%order_id, %total, "Order placed");
            navigator.push(Route::OrderPlaced { order_id });
        }
    };

    let item_count = cart.read().item_count();
    let total = cart.read().total();

    rsx! {
        header { class: "site-header",
            span { class: "brand", "VegBazar" }
            span { "Wallet: {wallet}" }
        }

        main { class: "page",
            InstallPrompt {}
            PromoStrip {}

            section {
                h2 { class: "section-title", "{CATALOG_LIST}" }
                div { class: "catalog",
                    for product in products {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            on_add: move |product: Product| cart.write().add(&product),
                        }
                    }
                }
            }

            div { class: "cart-summary",
                span { "{item_count} items · {total}" }
                Button {
                    disabled: item_count == 0,
                    onclick: place_order,
                    "Place order"
                }
            }

            TestimonialCarousel { items: testimonials, timing: timing }
        }
    }
}

#[component]
fn ProductCard(product: Product, on_add: EventHandler<Product>) -> Element {
    let analytics = use_storefront().analytics;

    use_hook({
        let analytics = analytics.clone();
        let product = product.clone();
        move || analytics.view_item(product.analytics_item(1))
    });

    let select = {
        let analytics = analytics.clone();
        let product = product.clone();
        move |_| analytics.select_item(product.analytics_item(1), CATALOG_LIST)
    };

    let add = {
        let product = product.clone();
        move |_: ()| {
            analytics.add_to_cart(product.analytics_item(1));
            on_add.call(product.clone());
        }
    };

    rsx! {
        div { class: "product-card",
            span { class: "product-name", onclick: select, "{product.name}" }
            span { class: "product-unit", "{product.unit}" }
            span { class: "product-price", "{product.price}" }
            Button { variant: ButtonVariant::Outline, onclick: add, "Add" }
        }
    }
}
