//! Actor - who a price is computed for
//!
//! Either an anonymous visitor or an identified customer. The loyalty point
//! balance is the only customer field that affects price.

use crate::error::PricingError;
use serde::{Deserialize, Serialize};

/// The party a price decision is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// No logged-in customer
    #[default]
    Anonymous,
    /// Authenticated customer with their accumulated loyalty balance
    Identified { loyalty_points: u64 },
}

impl Actor {
    /// Identified customer with the given balance
    pub fn identified(loyalty_points: u64) -> Self {
        Actor::Identified { loyalty_points }
    }

    /// Build an identified actor from a signed balance as stored upstream.
    ///
    /// Negative balances are rejected.
    pub fn from_points(loyalty_points: i64) -> Result<Self, PricingError> {
        u64::try_from(loyalty_points)
            .map(Actor::identified)
            .map_err(|_| PricingError::NegativeLoyaltyPoints {
                points: loyalty_points,
            })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }

    /// Loyalty balance, `None` for anonymous visitors
    pub fn loyalty_points(&self) -> Option<u64> {
        match self {
            Actor::Anonymous => None,
            Actor::Identified { loyalty_points } => Some(*loyalty_points),
        }
    }
}

impl From<Option<u64>> for Actor {
    fn from(points: Option<u64>) -> Self {
        points.map_or(Actor::Anonymous, Actor::identified)
    }
}

/// Loyalty tier of an identified customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    /// Zero points: a brand new member
    Welcome,
    /// Some points, not yet Gold
    Member,
    /// Balance above the gold threshold
    Gold,
}

impl LoyaltyTier {
    /// Classify a balance against a gold threshold.
    ///
    /// Gold is strictly above the threshold. Welcome is exactly zero points.
    pub fn classify(loyalty_points: u64, gold_threshold: u64) -> Self {
        if loyalty_points > gold_threshold {
            LoyaltyTier::Gold
        } else if loyalty_points == 0 {
            LoyaltyTier::Welcome
        } else {
            LoyaltyTier::Member
        }
    }

    /// Profile badge text
    pub fn badge(&self) -> &'static str {
        match self {
            LoyaltyTier::Gold => "VIP GOLD",
            LoyaltyTier::Welcome | LoyaltyTier::Member => "VIP MEMBER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GOLD_THRESHOLD_POINTS;

    #[test]
    fn test_from_points() {
        assert_eq!(Actor::from_points(0).unwrap(), Actor::identified(0));
        assert_eq!(Actor::from_points(1500).unwrap(), Actor::identified(1500));
        assert_eq!(
            Actor::from_points(-5).unwrap_err(),
            PricingError::NegativeLoyaltyPoints { points: -5 }
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Actor::from(None), Actor::Anonymous);
        assert_eq!(Actor::from(Some(12)).loyalty_points(), Some(12));
        assert!(Actor::default().is_anonymous());
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(LoyaltyTier::classify(0, GOLD_THRESHOLD_POINTS), LoyaltyTier::Welcome);
        assert_eq!(LoyaltyTier::classify(1, GOLD_THRESHOLD_POINTS), LoyaltyTier::Member);
        assert_eq!(LoyaltyTier::classify(1000, GOLD_THRESHOLD_POINTS), LoyaltyTier::Member);
        assert_eq!(LoyaltyTier::classify(1001, GOLD_THRESHOLD_POINTS), LoyaltyTier::Gold);
    }

    #[test]
    fn test_badge() {
        assert_eq!(LoyaltyTier::Gold.badge(), "VIP GOLD");
        assert_eq!(LoyaltyTier::Member.badge(), "VIP MEMBER");
        assert_eq!(LoyaltyTier::Welcome.badge(), "VIP MEMBER");
    }

    #[test]
    fn test_actor_serde_shape() {
        let json = serde_json::to_string(&Actor::identified(500)).unwrap();
        assert_eq!(json, r#"{"kind":"identified","loyalty_points":500}"#);

        let anon: Actor = serde_json::from_str(r#"{"kind":"anonymous"}"#).unwrap();
        assert!(anon.is_anonymous());
    }
}
