//! Shopping cart
//!
//! Lines are kept in the order items were first added.

use cosmic_common::{CatalogItem, CheckoutError};
use serde::{Deserialize, Serialize};

/// One catalog item and how many of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCartLine")]
pub struct CartLine {
    pub item: CatalogItem,
    quantity: u32,
}

#[derive(Deserialize)]
struct RawCartLine {
    item: CatalogItem,
    quantity: u32,
}

impl TryFrom<RawCartLine> for CartLine {
    type Error = CheckoutError;

    fn try_from(raw: RawCartLine) -> Result<Self, Self::Error> {
        CartLine::new(raw.item, raw.quantity)
    }
}

impl CartLine {
    /// Create a line; a quantity of zero is rejected
    pub fn new(item: CatalogItem, quantity: u32) -> Result<Self, CheckoutError> {
        if quantity == 0 {
            return Err(CheckoutError::ZeroQuantity {
                item_id: item.id().to_string(),
            });
        }
        Ok(Self { item, quantity })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered collection of cart lines, at most one line per item id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCart")]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Deserialize)]
struct RawCart {
    lines: Vec<CartLine>,
}

impl From<RawCart> for Cart {
    fn from(raw: RawCart) -> Self {
        Cart::from_lines(raw.lines)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from lines, merging lines that share an item id
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            match cart.position(line.item.id()) {
                Some(idx) => {
                    let existing = &mut cart.lines[idx];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add one unit of an item; bumps the quantity if it is already present
    pub fn add_item(&mut self, item: CatalogItem) {
        match self.position(item.id()) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Replace the quantity of an item already in the cart
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), CheckoutError> {
        if quantity == 0 {
            return Err(CheckoutError::ZeroQuantity {
                item_id: item_id.to_string(),
            });
        }
        let idx = self
            .position(item_id)
            .ok_or_else(|| CheckoutError::UnknownItem {
                item_id: item_id.to_string(),
            })?;
        self.lines[idx].quantity = quantity;
        Ok(())
    }

    /// Remove an item's line, returning it if it was present
    pub fn remove_item(&mut self, item_id: &str) -> Option<CartLine> {
        self.position(item_id).map(|idx| self.lines.remove(idx))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.item.id() == item_id)
    }
}
