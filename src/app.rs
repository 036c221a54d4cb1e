use dioxus::prelude::*;
use vegbazar_core::Money;

use crate::context::{
    analytics_enabled, get_config, get_data_dir, PlacedOrder, Storefront, STARTING_WALLET,
};
use crate::pages::{Home, OrderPlaced};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Storefront with offers, catalog and testimonials
/// - `/orders/:order_id` - Confirmation for a just-placed order
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/orders/:order_id")]
    OrderPlaced { order_id: String },
}

/// Root application component.
///
/// Provides global styles, storefront services, session state and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Storefront::open(get_data_dir(), get_config(), analytics_enabled()));

    let wallet: Signal<Money> = use_signal(|| STARTING_WALLET);
    let last_order: Signal<Option<PlacedOrder>> = use_signal(|| None);
    use_context_provider(|| wallet);
    use_context_provider(|| last_order);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
