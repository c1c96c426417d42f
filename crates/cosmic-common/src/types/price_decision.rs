//! Price decisions - the output of one pricing call
//!
//! A decision carries the charged price (rounded to the cent), the unrounded
//! list price for strike-through display, and the single rule that fired.

use crate::CENT_SCALE;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Discount rules, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountRule {
    /// Percentage off for customers above the gold threshold
    GoldTier,
    /// Flat amount off qualifying items for zero-point customers
    WelcomeTier,
    /// Category-wide percentage off when no tier rule fired
    AccessoryOffer,
}

impl DiscountRule {
    /// Whether this is a loyalty tier rule (as opposed to a category rule)
    pub fn is_tier_rule(&self) -> bool {
        matches!(self, DiscountRule::GoldTier | DiscountRule::WelcomeTier)
    }
}

/// Round half-up to whole cents.
///
/// Prices are never negative, so midpoint-away-from-zero is half-up.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Personalized price for one (item, actor) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDecision {
    /// Price to charge, rounded to the cent
    pub final_price: Decimal,
    /// Unmodified list price
    pub original_price: Decimal,
    /// True iff a discount rule fired
    pub discount_applied: bool,
    /// Display label of the rule that fired
    pub reason: Option<String>,
    /// The rule that fired
    pub rule: Option<DiscountRule>,
}

impl PriceDecision {
    /// Decision with no discount: the list price is charged as-is.
    ///
    /// List prices are whole cents, so this equals [`Self::undiscounted`].
    pub fn list_price(base_price: Decimal) -> Self {
        Self {
            final_price: base_price,
            original_price: base_price,
            discount_applied: false,
            reason: None,
            rule: None,
        }
    }

    /// Decision with no rule fired, rounded to the cent
    pub fn undiscounted(base_price: Decimal) -> Self {
        Self {
            final_price: round_to_cents(base_price),
            ..Self::list_price(base_price)
        }
    }

    /// Decision for a fired rule; `price` is rounded to the cent here
    pub fn discounted(
        base_price: Decimal,
        price: Decimal,
        rule: DiscountRule,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            final_price: round_to_cents(price),
            original_price: base_price,
            discount_applied: true,
            reason: Some(reason.into()),
            rule: Some(rule),
        }
    }

    /// Amount saved against the list price
    pub fn savings(&self) -> Decimal {
        self.original_price - self.final_price
    }
}
