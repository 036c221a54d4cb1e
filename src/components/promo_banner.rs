//! Dismissible promotional banners.

use chrono::Utc;
use dioxus::prelude::*;
use vegbazar_core::promo::{default_banners, dismiss_banner, visible_banners, PromoBanner};
use vegbazar_ui::{Button, ButtonVariant, CloseButton};

use crate::context::use_storefront;

/// Row of the standing promotions the user has not recently closed.
#[component]
pub fn PromoStrip() -> Element {
    let storefront = use_storefront();

    let mut banners: Signal<Vec<PromoBanner>> = use_signal({
        let storefront = storefront.clone();
        move || match storefront.storage.as_ref() {
            Some(storage) => visible_banners(
                &default_banners(),
                storage,
                &storefront.dismissal_policy(),
                Utc::now(),
            ),
            None => default_banners(),
        }
    });

    let dismiss = move |banner_id: String| {
        if let Some(storage) = storefront.storage.as_ref() {
            if let Err(e) = dismiss_banner(storage, &banner_id, Utc::now()) {
                tracing::warn!(banner = %banner_id, error = %e, "Failed to persist banner dismissal");
            }
        }
        banners.write().retain(|b| b.id != banner_id);
    };

    if banners.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "promo-strip",
            for banner in banners() {
                div { key: "{banner.id}", class: "promo-banner",
                    CloseButton {
                        onclick: {
                            let mut dismiss = dismiss.clone();
                            let id = banner.id.clone();
                            move |_| dismiss(id.clone())
                        }
                    }
                    p { class: "promo-title", "{banner.title}" }
                    p { class: "promo-subtitle", "{banner.subtitle}" }
                    Button {
                        variant: ButtonVariant::Offer,
                        onclick: {
                            let id = banner.id.clone();
                            move |_| tracing::info!(banner = %id, "Promo banner opened")
                        },
                        "{banner.cta_label}"
                    }
                }
            }
        }
    }
}
