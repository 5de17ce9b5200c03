//! Loyalty tier computation
//!
//! Pure bucketing of a buyer's lifetime paid spend. Thresholds are EUR.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

const SILVER_AT: Decimal = Decimal::from_parts(250, 0, 0, false, 0);
const GOLD_AT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const PLATINUM_AT: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Tier snapshot returned to the caller
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoyaltyStatus {
    pub tier: Tier,
    #[schema(value_type = String)]
    pub total_spend: Decimal,
    /// Spend still missing to reach the next tier; absent at Platinum
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub to_next_tier: Option<Decimal>,
}

/// Bucket a lifetime spend into a tier
pub fn tier_for(total_spend: Decimal) -> LoyaltyStatus {
    let (tier, next_threshold) = if total_spend >= PLATINUM_AT {
        (Tier::Platinum, None)
    } else if total_spend >= GOLD_AT {
        (Tier::Gold, Some(PLATINUM_AT))
    } else if total_spend >= SILVER_AT {
        (Tier::Silver, Some(GOLD_AT))
    } else {
        (Tier::Bronze, Some(SILVER_AT))
    };

    LoyaltyStatus {
        tier,
        total_spend,
        to_next_tier: next_threshold.map(|t| t - total_spend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for(Decimal::ZERO).tier, Tier::Bronze);
        assert_eq!(tier_for(dec("249.99")).tier, Tier::Bronze);
        assert_eq!(tier_for(dec("250")).tier, Tier::Silver);
        assert_eq!(tier_for(dec("999.99")).tier, Tier::Silver);
        assert_eq!(tier_for(dec("1000")).tier, Tier::Gold);
        assert_eq!(tier_for(dec("4999.99")).tier, Tier::Gold);
        assert_eq!(tier_for(dec("5000")).tier, Tier::Platinum);
    }

    #[test]
    fn test_distance_to_next_tier() {
        let s = tier_for(dec("100"));
        assert_eq!(s.to_next_tier, Some(dec("150")));

        let s = tier_for(dec("999"));
        assert_eq!(s.to_next_tier, Some(dec("1")));

        // Platinum has nowhere further to go
        assert_eq!(tier_for(dec("9000")).to_next_tier, None);
    }
}
