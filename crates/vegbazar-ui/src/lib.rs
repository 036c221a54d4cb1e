//! VegBazar UI Components
//!
//! Dioxus components for the storefront, rendering the state machines from
//! `vegbazar-core`.
//!
//! ## Palette
//!
//! - **Leaf (#2f9e44)**: primary actions, filled rating stars
//! - **Turmeric (#f59f00)**: offers, cashback highlights
//! - **Chalk (#f8f9fa)**: card backgrounds

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::use_timed;
