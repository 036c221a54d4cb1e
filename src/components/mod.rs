//! Storefront components wired to app services.
//!
//! Generic widgets live in `vegbazar-ui`; these need the storefront context
//! (storage, analytics, config) or a platform service.

mod cashback_modal;
mod install_prompt;
mod order_id_copy;
mod promo_banner;

pub use cashback_modal::CashbackCelebration;
pub use install_prompt::InstallPrompt;
pub use order_id_copy::OrderIdChip;
pub use promo_banner::PromoStrip;
