//! Storefront pricing configuration

use crate::checkout::CheckoutPolicy;
use crate::pricing::PricingRules;
use cosmic_common::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// Pricing and checkout configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Discount rule parameters
    pub pricing: PricingRules,
    /// Shipping and tax parameters
    pub checkout: CheckoutPolicy,
}

impl StorefrontConfig {
    /// Load configuration from `.env` and `COSMIC_*` environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.validate()?;

        info!(
            gold_threshold = cfg.pricing.gold_threshold,
            accessory_category = %cfg.pricing.accessory_category,
            tax_rate = %cfg.checkout.tax_rate,
            "Loaded storefront configuration"
        );
        Ok(cfg)
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let cfg: Self = serde_json::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check pricing and checkout parameters
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.pricing.validate()?;
        self.checkout.validate()
    }

    /// Override fields from variables supplied by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let pricing = &mut self.pricing;
        override_parsed(&lookup, "COSMIC_GOLD_THRESHOLD", &mut pricing.gold_threshold);
        override_parsed(&lookup, "COSMIC_GOLD_RATE", &mut pricing.gold_rate);
        override_parsed(&lookup, "COSMIC_WELCOME_MIN_PRICE", &mut pricing.welcome_min_price);
        override_parsed(&lookup, "COSMIC_WELCOME_AMOUNT", &mut pricing.welcome_amount);
        override_parsed(&lookup, "COSMIC_ACCESSORY_RATE", &mut pricing.accessory_rate);
        if let Some(category) = lookup("COSMIC_ACCESSORY_CATEGORY") {
            pricing.accessory_category = category;
        }

        let checkout = &mut self.checkout;
        override_parsed(
            &lookup,
            "COSMIC_FREE_SHIPPING_THRESHOLD",
            &mut checkout.free_shipping_threshold,
        );
        override_parsed(&lookup, "COSMIC_FLAT_SHIPPING", &mut checkout.flat_shipping);
        override_parsed(&lookup, "COSMIC_TAX_RATE", &mut checkout.tax_rate);
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "ignoring unparsable config value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_valid() {
        let cfg = StorefrontConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.pricing.gold_threshold, 1000);
        assert_eq!(cfg.checkout.tax_rate, dec!(0.08));
    }

    #[test]
    fn test_env_overrides() {
        let mut cfg = StorefrontConfig::default();
        cfg.apply_env(lookup(&[
            ("COSMIC_GOLD_THRESHOLD", "2500"),
            ("COSMIC_ACCESSORY_CATEGORY", "Cables"),
            ("COSMIC_TAX_RATE", " 0.0725 "),
        ]));

        assert_eq!(cfg.pricing.gold_threshold, 2500);
        assert_eq!(cfg.pricing.accessory_category, "Cables");
        assert_eq!(cfg.checkout.tax_rate, dec!(0.0725));
        assert_eq!(cfg.pricing.gold_rate, dec!(0.10));
    }

    #[test]
    fn test_unparsable_env_ignored() {
        let mut cfg = StorefrontConfig::default();
        cfg.apply_env(lookup(&[
            ("COSMIC_GOLD_THRESHOLD", "lots"),
            ("COSMIC_FLAT_SHIPPING", "free"),
        ]));
        assert_eq!(cfg, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let cfg: StorefrontConfig =
            serde_json::from_str(r#"{"pricing":{"gold_threshold":500}}"#).unwrap();
        assert_eq!(cfg.pricing.gold_threshold, 500);
        assert_eq!(cfg.pricing.welcome_amount, dec!(5));
        assert_eq!(cfg.checkout, CheckoutPolicy::default());
    }

    #[test]
    fn test_missing_file() {
        let err = StorefrontConfig::from_json_file("/nonexistent/cosmic.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cosmic.json"));
    }
}
