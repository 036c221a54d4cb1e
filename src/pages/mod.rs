//! Page components for the VegBazar storefront.

mod home;
mod order_placed;

pub use home::Home;
pub use order_placed::OrderPlaced;
