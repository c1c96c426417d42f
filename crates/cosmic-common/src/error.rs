//! Error types for CosmicStore pricing
//!
//! Provides a unified error type and domain-specific error variants

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using StorefrontError
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Unified error type for storefront pricing operations
#[derive(Debug, Error)]
pub enum StorefrontError {
    // Input validation errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Cart and totals errors
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Invalid pricing inputs, rejected before they reach the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Base price must not be negative, got {price}")]
    NegativeBasePrice { price: Decimal },

    #[error("Loyalty points must not be negative, got {points}")]
    NegativeLoyaltyPoints { points: i64 },

    #[error("Base price must be whole cents, got {price}")]
    SubCentPrice { price: Decimal },

    #[error("Catalog item id must not be empty")]
    MissingItemId,
}

/// Cart and checkout total errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Quantity for item {item_id} must be at least 1")]
    ZeroQuantity { item_id: String },

    #[error("Item {item_id} is not in the cart")]
    UnknownItem { item_id: String },

    #[error("Checkout total overflow")]
    Overflow,
}

/// Rejected pricing or checkout configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be between 0 and 1, got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("Welcome amount {amount} exceeds welcome minimum price {min_price}")]
    WelcomeAmountTooLarge { amount: Decimal, min_price: Decimal },

    #[error("Accessory category must not be empty")]
    EmptyAccessoryCategory,

    #[error("Failed to read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

// Implement From for common external error types
impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::Serialization(err.to_string())
    }
}
