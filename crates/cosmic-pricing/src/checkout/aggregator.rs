//! Checkout totals
//!
//! Prices every cart line through the [`PricingEngine`] exactly once and
//! derives the order totals:
//!
//! ```text
//! subtotal = Σ final_price × quantity
//! shipping = 0 if subtotal > free_shipping_threshold else flat_shipping
//! tax      = round_half_up(subtotal × tax_rate, 2)
//! total    = subtotal + shipping + tax
//! ```

use super::cart::{Cart, CartLine};
use crate::pricing::PricingEngine;
use cosmic_common::{round_to_cents, Actor, CheckoutError, ConfigError, PriceDecision, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shipping and tax parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutPolicy {
    /// Shipping is free for subtotals strictly above this
    pub free_shipping_threshold: Decimal,
    /// Shipping charged otherwise
    pub flat_shipping: Decimal,
    /// Sales tax on the subtotal (0.08 = 8%)
    pub tax_rate: Decimal,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: dec!(300),
            flat_shipping: dec!(15),
            tax_rate: dec!(0.08),
        }
    }
}

impl CheckoutPolicy {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (field, value) in [
            ("free_shipping_threshold", self.free_shipping_threshold),
            ("flat_shipping", self.flat_shipping),
        ] {
            if value < Decimal::ZERO {
                return Err(ConfigError::NegativeAmount { field, value });
            }
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(ConfigError::RateOutOfRange {
                field: "tax_rate",
                value: self.tax_rate,
            });
        }
        Ok(())
    }

    /// Shipping charge for a non-empty order
    pub fn shipping_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal > self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.flat_shipping
        }
    }
}

/// A cart line with its price decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub decision: PriceDecision,
    /// final_price × quantity
    pub line_total: Decimal,
}

/// Priced order totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub lines: Vec<PricedLine>,
    /// Units across all lines
    pub item_count: u64,
    pub subtotal: Decimal,
    /// List value minus subtotal
    pub savings: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CheckoutSummary {
    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            item_count: 0,
            subtotal: Decimal::ZERO,
            savings: Decimal::ZERO,
            shipping: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Computes checkout totals for a cart
#[derive(Debug, Clone, Default)]
pub struct CheckoutAggregator {
    engine: PricingEngine,
    policy: CheckoutPolicy,
}

impl CheckoutAggregator {
    pub fn new(engine: PricingEngine, policy: CheckoutPolicy) -> Self {
        Self { engine, policy }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    /// Price every line for `actor` and total the order.
    ///
    /// An empty cart is all zeros, shipping included. This deliberately
    /// departs from the storefront checkout page, which charged flat shipping
    /// whenever the subtotal was at or below the threshold, an empty cart
    /// included.
    #[instrument(skip(self, cart, actor), fields(lines = cart.lines().len()))]
    pub fn summarize(&self, cart: &Cart, actor: &Actor) -> Result<CheckoutSummary> {
        if cart.is_empty() {
            debug!("empty cart");
            return Ok(CheckoutSummary::empty());
        }

        let lines = self.price_lines(cart.lines(), actor)?;

        let mut subtotal = Decimal::ZERO;
        let mut list_value = Decimal::ZERO;
        for line in &lines {
            subtotal = checked_add(subtotal, line.line_total)?;
            let line_list = checked_mul(line.decision.original_price, line.quantity)?;
            list_value = checked_add(list_value, line_list)?;
        }

        let shipping = self.policy.shipping_for(subtotal);
        let tax = round_to_cents(
            subtotal
                .checked_mul(self.policy.tax_rate)
                .ok_or(CheckoutError::Overflow)?,
        );
        let total = checked_add(checked_add(subtotal, shipping)?, tax)?;

        debug!(
            subtotal = %subtotal,
            shipping = %shipping,
            tax = %tax,
            total = %total,
            "checkout summarized"
        );

        Ok(CheckoutSummary {
            lines,
            item_count: cart.item_count(),
            subtotal,
            savings: list_value - subtotal,
            shipping,
            tax,
            total,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn price_lines(&self, lines: &[CartLine], actor: &Actor) -> Result<Vec<PricedLine>> {
        lines.iter().map(|line| self.price_line(line, actor)).collect()
    }

    #[cfg(feature = "parallel")]
    fn price_lines(&self, lines: &[CartLine], actor: &Actor) -> Result<Vec<PricedLine>> {
        lines
            .par_iter()
            .map(|line| self.price_line(line, actor))
            .collect()
    }

    fn price_line(&self, line: &CartLine, actor: &Actor) -> Result<PricedLine> {
        let decision = self.engine.quote(&line.item, actor);
        let line_total = checked_mul(decision.final_price, line.quantity())?;

        Ok(PricedLine {
            item_id: line.item.id().to_string(),
            name: line.item.name().to_string(),
            quantity: line.quantity(),
            decision,
            line_total,
        })
    }
}

fn checked_mul(price: Decimal, quantity: u32) -> Result<Decimal> {
    Ok(price
        .checked_mul(Decimal::from(quantity))
        .ok_or(CheckoutError::Overflow)?)
}

fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    Ok(a.checked_add(b).ok_or(CheckoutError::Overflow)?)
}
