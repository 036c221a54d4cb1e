//! "Install VegBazar" banner.
//!
//! Shows the native install button when the platform captured a deferred
//! prompt, manual steps when it did not, and nothing once dismissed or
//! installed. Dismissals are persisted and honoured for the re-prompt window.

use chrono::Utc;
use dioxus::prelude::*;
use vegbazar_core::dismissal::INSTALL_PROMPT_KEY;
use vegbazar_core::install::{install_slot, run_prompt, InstallEvent, INSTALL_INSTRUCTIONS};
use vegbazar_core::timer::TokioScheduler;
use vegbazar_core::{DismissalRecord, InstallBanner, InstallPromptFlow, Storage};
use vegbazar_ui::{use_timed, Button, ButtonVariant, CloseButton};

use crate::context::use_storefront;
use crate::platform::{capture_install_prompt, launcher_installed};

type LiveFlow = InstallPromptFlow<TokioScheduler<InstallEvent>>;

fn persist(storage: Option<&Storage>, record: &DismissalRecord) {
    if let Some(storage) = storage {
        if let Err(e) = storage.save_dismissal(INSTALL_PROMPT_KEY, record) {
            tracing::warn!(error = %e, "Failed to persist install prompt dismissal");
        }
    }
}

#[component]
pub fn InstallPrompt() -> Element {
    let storefront = use_storefront();
    let policy = storefront.dismissal_policy();
    let fallback_delay = storefront.config.install_fallback();

    let mut flow = use_timed(
        move |scheduler: TokioScheduler<InstallEvent>| {
            InstallPromptFlow::new(install_slot().clone(), scheduler, policy, fallback_delay)
        },
        |flow: &mut LiveFlow, fired| flow.fire(fired),
    );

    use_hook({
        let storage = storefront.storage.clone();
        move || {
            let dismissal = storage.as_ref().and_then(|s| {
                s.load_dismissal(INSTALL_PROMPT_KEY).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Failed to read install prompt dismissal");
                    None
                })
            });
            let mut live = flow.write();
            live.start(dismissal, launcher_installed(), Utc::now());
            if let Some(prompt) = capture_install_prompt() {
                live.on_prompt_captured(prompt);
            }
        }
    });

    use_drop(move || flow.write().stop());

    let dismiss = {
        let storage = storefront.storage.clone();
        move |_: ()| {
            let record = flow.write().dismiss(Utc::now());
            persist(storage.as_ref(), &record);
        }
    };

    let install = {
        let storage = storefront.storage.clone();
        move |_: ()| {
            let Some(prompt) = flow.write().take_native_prompt() else {
                return;
            };
            let storage = storage.clone();
            spawn(async move {
                let outcome = run_prompt(prompt).await;
                if let Some(record) = flow.write().record_outcome(outcome, Utc::now()) {
                    persist(storage.as_ref(), &record);
                }
            });
        }
    };

    let banner = flow.read().banner();

    match banner {
        InstallBanner::Hidden => rsx! {},
        InstallBanner::Native => rsx! {
            section { class: "install-banner",
                CloseButton { onclick: dismiss }
                p { class: "promo-title", "Install VegBazar" }
                p { class: "promo-subtitle", "Reorder your weekly basket in one tap." }
                Button { onclick: install, "Install" }
            }
        },
        InstallBanner::Instructions => rsx! {
            section { class: "install-banner",
                CloseButton { onclick: dismiss.clone() }
                p { class: "promo-title", "Keep VegBazar one tap away" }
                ol { class: "install-steps",
                    for step in INSTALL_INSTRUCTIONS.iter() {
                        li { "{step}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: dismiss,
                    "Not now"
                }
            }
        },
    }
}
