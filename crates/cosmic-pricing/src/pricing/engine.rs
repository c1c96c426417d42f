//! Personalized pricing engine
//!
//! Computes a customer-specific price for a catalog item:
//! - Anonymous visitors pay the list price
//! - Loyalty tier rules, first match wins (Gold, then Welcome)
//! - Accessory offer only when no tier rule fired
//!
//! The engine holds nothing but its rules, so it is `Send + Sync` and a single
//! instance can price any number of items concurrently.

use super::rules::PricingRules;
use cosmic_common::{Actor, CatalogItem, DiscountRule, LoyaltyTier, PriceDecision};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tracing::trace;

/// Engine with the storefront's live rules, shared by [`compute_price`]
static DEFAULT_ENGINE: Lazy<PricingEngine> = Lazy::new(PricingEngine::default);

/// Rule-based personalized pricing engine
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rules: PricingRules,
}

impl PricingEngine {
    /// Create an engine with the given rules
    pub fn new(rules: PricingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Price one item for one actor. Never fails for a validated item.
    pub fn quote(&self, item: &CatalogItem, actor: &Actor) -> PriceDecision {
        let base_price = item.base_price();

        let Actor::Identified { loyalty_points } = *actor else {
            trace!(item_id = item.id(), "anonymous actor, list price");
            return PriceDecision::list_price(base_price);
        };

        let fired = self
            .tier_discount(base_price, loyalty_points)
            .or_else(|| self.category_discount(item, base_price));

        let decision = match fired {
            Some((rule, price)) => {
                PriceDecision::discounted(base_price, price, rule, self.rules.reason(rule))
            }
            None => PriceDecision::undiscounted(base_price),
        };

        trace!(
            item_id = item.id(),
            loyalty_points,
            rule = ?decision.rule,
            final_price = %decision.final_price,
            "priced item"
        );
        decision
    }

    /// Price a listing; one independent quote per item, in input order
    pub fn quote_all<'a, I>(&self, items: I, actor: &Actor) -> Vec<PriceDecision>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        items
            .into_iter()
            .map(|item| self.quote(item, actor))
            .collect()
    }

    /// Tier rule for an identified customer, if one applies
    fn tier_discount(&self, base_price: Decimal, loyalty_points: u64) -> Option<(DiscountRule, Decimal)> {
        match self.rules.tier_for(loyalty_points) {
            LoyaltyTier::Gold => Some((
                DiscountRule::GoldTier,
                base_price * (Decimal::ONE - self.rules.gold_rate),
            )),
            LoyaltyTier::Welcome if base_price > self.rules.welcome_min_price => Some((
                DiscountRule::WelcomeTier,
                base_price - self.rules.welcome_amount,
            )),
            LoyaltyTier::Welcome | LoyaltyTier::Member => None,
        }
    }

    /// Accessory offer, checked only after no tier rule fired
    fn category_discount(&self, item: &CatalogItem, price: Decimal) -> Option<(DiscountRule, Decimal)> {
        (item.category() == self.rules.accessory_category).then(|| {
            (
                DiscountRule::AccessoryOffer,
                price * (Decimal::ONE - self.rules.accessory_rate),
            )
        })
    }
}

/// Price one item under the default storefront rules
pub fn compute_price(item: &CatalogItem, actor: &Actor) -> PriceDecision {
    DEFAULT_ENGINE.quote(item, actor)
}
