//! # Cosmic Common
//!
//! Shared types and errors for CosmicStore personalized pricing.
//!
//! ## Core Types
//!
//! - [`CatalogItem`]: validated catalog record (list price + category)
//! - [`Actor`]: anonymous visitor or identified customer with a loyalty balance
//! - [`LoyaltyTier`]: Welcome / Member / Gold classification of a balance
//! - [`DiscountRule`]: the discount rules a price decision can name
//! - [`PriceDecision`]: the computed price for one (item, actor) pair

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CheckoutError, ConfigError, PricingError, Result, StorefrontError};
pub use types::{
    actor::{Actor, LoyaltyTier},
    catalog_item::{CatalogItem, CatalogItemRecord},
    price_decision::{round_to_cents, DiscountRule, PriceDecision},
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loyalty balance above which a customer is Gold
pub const GOLD_THRESHOLD_POINTS: u64 = 1000;

/// Category label that receives the accessory offer
pub const ACCESSORY_CATEGORY: &str = "Accessories";

/// Number of decimal places in a charged price
pub const CENT_SCALE: u32 = 2;
