//! Checkout module
//!
//! Provides cart handling and order totals:
//! - Cart: ordered line items with quantities
//! - CheckoutAggregator: prices each line and derives subtotal, shipping, tax

pub mod aggregator;
pub mod cart;

pub use aggregator::{CheckoutAggregator, CheckoutPolicy, CheckoutSummary, PricedLine};
pub use cart::{Cart, CartLine};
