//! Post-purchase cashback celebration.

use dioxus::prelude::*;
use vegbazar_core::cashback::{CashbackModal, ModalEvent, ModalTiming};
use vegbazar_core::timer::TokioScheduler;
use vegbazar_core::{ModalNotice, ModalPhase, Money};
use vegbazar_ui::{use_timed, Button, ButtonVariant, CloseButton};

use crate::context::use_storefront;

type LiveModal = CashbackModal<TokioScheduler<ModalEvent>>;

/// Shows the cashback earned, dismisses itself after a few seconds, and
/// calls `on_closed` once the exit animation has finished.
#[component]
pub fn CashbackCelebration(amount: Money, new_balance: Money, on_closed: EventHandler<()>) -> Element {
    let timing = ModalTiming::from(&use_storefront().config);

    let mut modal = use_timed(
        move |scheduler: TokioScheduler<ModalEvent>| CashbackModal::new(scheduler, timing),
        move |modal: &mut LiveModal, fired| {
            if modal.fire(fired) == Some(ModalNotice::Closed) {
                on_closed.call(());
            }
        },
    );

    use_hook(move || modal.write().open(amount, new_balance));
    use_drop(move || modal.write().teardown());

    let phase = modal.read().phase();
    let Some(offer) = modal.read().offer() else {
        return rsx! {};
    };

    let backdrop_class = match phase {
        ModalPhase::Visible => "modal-backdrop",
        ModalPhase::Exiting => "modal-backdrop exiting",
        ModalPhase::Hidden | ModalPhase::Closed => return rsx! {},
    };

    rsx! {
        div { class: backdrop_class,
            div {
                class: "cashback-modal",
                role: "dialog",
                "aria-modal": "true",
                CloseButton { onclick: move |_| modal.write().close() }
                p { "You earned" }
                p { class: "cashback-amount", "{offer.amount} cashback" }
                p { class: "wallet-balance", "Wallet balance: {offer.new_balance}" }
                Button {
                    variant: ButtonVariant::Offer,
                    onclick: move |_| modal.write().close(),
                    "Yay!"
                }
            }
        }
    }
}
