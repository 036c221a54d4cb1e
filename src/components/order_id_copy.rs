//! Order ID with a copy-to-clipboard button.

use dioxus::prelude::*;
use vegbazar_core::clipboard::{ClipboardService, CopyEvent, CopyFeedback, OrderIdCopy};
use vegbazar_core::timer::TokioScheduler;
use vegbazar_core::{StorefrontError, StorefrontResult};
use vegbazar_ui::{use_timed, Button, ButtonVariant};

use crate::context::use_storefront;

/// Desktop clipboard via arboard.
pub struct ArboardClipboard;

impl ClipboardService for ArboardClipboard {
    fn copy_text(&mut self, text: &str) -> StorefrontResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| StorefrontError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| StorefrontError::Clipboard(e.to_string()))
    }
}

type LiveCopy = OrderIdCopy<TokioScheduler<CopyEvent>>;

#[component]
pub fn OrderIdChip(order_id: String) -> Element {
    let feedback_for = use_storefront().config.copy_feedback();

    let mut copy = use_timed(
        move |scheduler: TokioScheduler<CopyEvent>| OrderIdCopy::new(order_id, scheduler, feedback_for),
        |copy: &mut LiveCopy, fired| copy.fire(fired),
    );

    use_drop(move || copy.write().teardown());

    let shown_id = copy.read().order_id().to_string();
    let copied = copy.read().feedback() == CopyFeedback::Copied;

    rsx! {
        div { class: "order-id",
            span { "Order ID: {shown_id}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    copy.write().copy(&mut ArboardClipboard);
                },
                "Copy"
            }
            if copied {
                span { class: "copy-feedback", "Copied!" }
            }
        }
    }
}
