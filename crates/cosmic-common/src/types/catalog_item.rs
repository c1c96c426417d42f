//! Catalog items as seen by the pricing engine
//!
//! Only the list price and the category affect a price decision. The id and
//! name ride along so cart lines and listings can be keyed and displayed.

use crate::error::PricingError;
use crate::CENT_SCALE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated catalog record.
///
/// Construction rejects negative prices and fractions of a cent, so every
/// `CatalogItem` is inside the engine's domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogItemRecord", into = "CatalogItemRecord")]
pub struct CatalogItem {
    id: String,
    name: String,
    base_price: Decimal,
    category: String,
}

/// Unvalidated wire form of a [`CatalogItem`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub base_price: Decimal,
    pub category: String,
}

impl CatalogItem {
    /// Create a catalog item, rejecting negative or sub-cent list prices
    pub fn new(
        id: impl Into<String>,
        base_price: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, PricingError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PricingError::MissingItemId);
        }
        if base_price < Decimal::ZERO {
            return Err(PricingError::NegativeBasePrice { price: base_price });
        }
        // 19.990 is fine, 19.999 is not
        if base_price.normalize().scale() > CENT_SCALE {
            return Err(PricingError::SubCentPrice { price: base_price });
        }

        Ok(Self {
            id,
            name: String::new(),
            base_price,
            category: category.into(),
        })
    }

    /// Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical list price in whole cents, never negative
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl TryFrom<CatalogItemRecord> for CatalogItem {
    type Error = PricingError;

    fn try_from(record: CatalogItemRecord) -> Result<Self, Self::Error> {
        Ok(CatalogItem::new(record.id, record.base_price, record.category)?.with_name(record.name))
    }
}

impl From<CatalogItem> for CatalogItemRecord {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            base_price: item.base_price,
            category: item.category,
        }
    }
}
