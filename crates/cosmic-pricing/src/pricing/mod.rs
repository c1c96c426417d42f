//! Pricing module
//!
//! Provides personalized price calculation with:
//! - Loyalty tier discounts (Gold beats Welcome)
//! - Category offer for customers without a tier discount
//! - Single half-up rounding to the cent

pub mod engine;
pub mod rules;

pub use engine::{compute_price, PricingEngine};
pub use rules::PricingRules;
