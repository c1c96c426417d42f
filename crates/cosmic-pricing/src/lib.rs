//! # Cosmic Pricing
//!
//! Personalized pricing and checkout totals for the CosmicStore storefront.
//!
//! ## Discount Rules
//!
//! ```text
//! anonymous                          -> list price
//! points > 1000                      -> 10% off          (Gold)
//! points == 0 and price > 50         -> 5 off            (Welcome)
//! category == "Accessories", no tier -> 5% off           (Accessory offer)
//! ```
//!
//! At most one rule fires. Tier rules take precedence over the accessory
//! offer, and the final price is rounded half-up to the cent once.

pub mod checkout;
pub mod config;
pub mod pricing;

use checkout::{Cart, CheckoutAggregator, CheckoutSummary};
use config::StorefrontConfig;
use cosmic_common::{Actor, CatalogItem, LoyaltyTier, PriceDecision, Result};
use pricing::PricingEngine;

pub use checkout::CheckoutPolicy;
pub use pricing::{compute_price, PricingRules};

/// Pricing service: engine plus checkout totals under one configuration
#[derive(Debug, Clone, Default)]
pub struct CosmicPricing {
    aggregator: CheckoutAggregator,
}

impl CosmicPricing {
    /// Build the service from a validated configuration
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        config.validate()?;
        let engine = PricingEngine::new(config.pricing);
        Ok(Self {
            aggregator: CheckoutAggregator::new(engine, config.checkout),
        })
    }

    /// Price a single item
    pub fn quote(&self, item: &CatalogItem, actor: &Actor) -> PriceDecision {
        self.aggregator.engine().quote(item, actor)
    }

    /// Price a product listing, keeping input order
    pub fn quote_listing(&self, items: &[CatalogItem], actor: &Actor) -> Vec<PriceDecision> {
        self.aggregator.engine().quote_all(items, actor)
    }

    /// Price a cart and total the order
    pub fn checkout(&self, cart: &Cart, actor: &Actor) -> Result<CheckoutSummary> {
        self.aggregator.summarize(cart, actor)
    }

    /// Loyalty tier of an actor, `None` when anonymous
    pub fn tier_of(&self, actor: &Actor) -> Option<LoyaltyTier> {
        actor
            .loyalty_points()
            .map(|points| self.aggregator.engine().rules().tier_for(points))
    }
}
