//! VegBazar Storefront Core Library
//!
//! Framework-free logic behind the storefront's presentation layer.
//!
//! ## Overview
//!
//! Every component here is a small state machine that never fails on bad
//! input. Time enters only through a [`timer::Scheduler`]: components
//! schedule events, hold on to the [`timer::TimerId`], cancel it when
//! superseded or torn down, and are fed [`timer::Fired`] events back. The
//! same machines run on tokio in the app and on a virtual clock in tests.
//!
//! - [`carousel`]: testimonial carousel with a transition lock and auto-advance
//! - [`cashback`]: self-dismissing cashback modal
//! - [`install`]: install prompt with a timed fallback to instructions
//! - [`clipboard`]: order-ID copy with transient feedback
//! - [`promo`]: dismissible promotional banners
//! - [`analytics`]: fire-and-forget tag-manager forwarding
//!
//! ## Quick Start
//!
//! ```ignore
//! use vegbazar_core::carousel::{Carousel, CarouselTiming, DisplayItem, Direction};
//! use vegbazar_core::timer::TokioScheduler;
//!
//! let (scheduler, mut fired) = TokioScheduler::channel();
//! let mut carousel = Carousel::new(scheduler, CarouselTiming::default());
//! carousel.mount(vec![
//!     DisplayItem::new("Great!", "Asha", 5),
//!     DisplayItem::new("Good", "Ravi", 3),
//! ]);
//!
//! carousel.advance(Direction::Next);
//! while let Some(event) = fired.recv().await {
//!     carousel.fire(event);
//! }
//! ```

pub mod analytics;
pub mod capability;
pub mod carousel;
pub mod cashback;
pub mod clipboard;
pub mod config;
pub mod dismissal;
pub mod error;
pub mod install;
pub mod logging;
pub mod money;
pub mod promo;
pub mod storage;
pub mod timer;

// Re-exports
pub use analytics::{Analytics, AnalyticsEvent, AnalyticsItem, TagManager};
pub use capability::{CapabilitySlot, CapabilitySource};
pub use carousel::{Carousel, CarouselView, Direction, DisplayItem};
pub use cashback::{CashbackModal, ModalNotice, ModalPhase};
pub use config::StorefrontConfig;
pub use dismissal::{DismissalPolicy, DismissalRecord};
pub use error::{StorefrontError, StorefrontResult};
pub use install::{InstallBanner, InstallCapability, InstallOutcome, InstallPromptFlow};
pub use money::Money;
pub use storage::Storage;
pub use timer::{Fired, Scheduler, TimerId, TokioScheduler, VirtualScheduler};
