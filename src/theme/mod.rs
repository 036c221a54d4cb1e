//! Storefront look and feel.

mod styles;

pub use styles::GLOBAL_STYLES;
