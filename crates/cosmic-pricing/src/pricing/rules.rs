//! Discount rule parameters
//!
//! Thresholds, rates and labels for the three discount rules. The defaults
//! are the storefront's live rules; every field can be overridden through
//! [`crate::config::StorefrontConfig`].

use cosmic_common::{ConfigError, DiscountRule, LoyaltyTier, ACCESSORY_CATEGORY, GOLD_THRESHOLD_POINTS};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Label of the welcome rule
pub const WELCOME_REASON: &str = "New Member Welcome Discount";

/// Label of the accessory rule
pub const ACCESSORY_REASON: &str = "Exclusive Accessory Offer";

/// Parameters of the discount rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Gold applies strictly above this balance
    pub gold_threshold: u64,
    /// Fraction taken off for Gold customers (0.10 = 10%)
    pub gold_rate: Decimal,
    /// Welcome applies only to items priced strictly above this
    pub welcome_min_price: Decimal,
    /// Flat amount taken off by the welcome rule
    pub welcome_amount: Decimal,
    /// Exact, case-sensitive category for the accessory offer
    pub accessory_category: String,
    /// Fraction taken off by the accessory offer
    pub accessory_rate: Decimal,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            gold_threshold: GOLD_THRESHOLD_POINTS,
            gold_rate: dec!(0.10),
            welcome_min_price: dec!(50),
            welcome_amount: dec!(5),
            accessory_category: ACCESSORY_CATEGORY.to_string(),
            accessory_rate: dec!(0.05),
        }
    }
}

impl PricingRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set gold threshold and rate
    pub fn with_gold(mut self, threshold: u64, rate: Decimal) -> Self {
        self.gold_threshold = threshold;
        self.gold_rate = rate;
        self
    }

    /// Set welcome minimum price and flat amount
    pub fn with_welcome(mut self, min_price: Decimal, amount: Decimal) -> Self {
        self.welcome_min_price = min_price;
        self.welcome_amount = amount;
        self
    }

    /// Set accessory category and rate
    pub fn with_accessory(mut self, category: impl Into<String>, rate: Decimal) -> Self {
        self.accessory_category = category.into();
        self.accessory_rate = rate;
        self
    }

    /// Check the rules can only ever discount, never mark up or go negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("gold_rate", self.gold_rate)?;
        check_rate("accessory_rate", self.accessory_rate)?;
        check_non_negative("welcome_min_price", self.welcome_min_price)?;
        check_non_negative("welcome_amount", self.welcome_amount)?;

        // base > min_price >= amount keeps the welcome price positive
        if self.welcome_amount > self.welcome_min_price {
            return Err(ConfigError::WelcomeAmountTooLarge {
                amount: self.welcome_amount,
                min_price: self.welcome_min_price,
            });
        }
        if self.accessory_category.is_empty() {
            return Err(ConfigError::EmptyAccessoryCategory);
        }
        Ok(())
    }

    /// Loyalty tier for a balance
    pub fn tier_for(&self, loyalty_points: u64) -> LoyaltyTier {
        LoyaltyTier::classify(loyalty_points, self.gold_threshold)
    }

    /// Display label for a rule, e.g. "Gold Member 10% Discount"
    pub fn reason(&self, rule: DiscountRule) -> String {
        match rule {
            DiscountRule::GoldTier => format!(
                "Gold Member {}% Discount",
                (self.gold_rate * dec!(100)).normalize()
            ),
            DiscountRule::WelcomeTier => WELCOME_REASON.to_string(),
            DiscountRule::AccessoryOffer => ACCESSORY_REASON.to_string(),
        }
    }
}

fn check_rate(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::RateOutOfRange { field, value });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO {
        return Err(ConfigError::NegativeAmount { field, value });
    }
    Ok(())
}
