use strum_macros::{Display, EnumIter};

/// Qualitative banding of a normalized price position.
///
/// Ordering is severity: `Favorable < Neutral < Unfavorable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PriceTier {
    Favorable,
    Neutral,
    Unfavorable,
}

impl PriceTier {
    /// Maps a normalized position in [0, 100] to its tier.
    ///
    /// Boundaries are inclusive on the lower bound: exactly 33 is still
    /// favorable, exactly 66 is already unfavorable.
    pub fn classify(position: f64) -> Self {
        if position <= 33.0 {
            PriceTier::Favorable
        } else if position < 66.0 {
            PriceTier::Neutral
        } else {
            PriceTier::Unfavorable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_stats::PriceStats;
    use strum::IntoEnumIterator;

    #[test]
    fn boundary_values() {
        assert_eq!(PriceTier::classify(0.0), PriceTier::Favorable);
        assert_eq!(PriceTier::classify(33.0), PriceTier::Favorable);
        assert_eq!(PriceTier::classify(33.001), PriceTier::Neutral);
        assert_eq!(PriceTier::classify(50.0), PriceTier::Neutral);
        assert_eq!(PriceTier::classify(65.999), PriceTier::Neutral);
        assert_eq!(PriceTier::classify(66.0), PriceTier::Unfavorable);
        assert_eq!(PriceTier::classify(100.0), PriceTier::Unfavorable);
    }

    #[test]
    fn severity_is_monotonic_in_price() {
        let prices = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
        let stats = PriceStats::from_prices(&prices).unwrap();

        let mut last = PriceTier::Favorable;
        for price in prices {
            let tier = PriceTier::classify(stats.position_of(price));
            assert!(tier >= last, "tier regressed at price {}", price);
            last = tier;
        }
        assert_eq!(last, PriceTier::Unfavorable);
    }

    #[test]
    fn flat_market_is_neutral() {
        let stats = PriceStats::from_prices(&[100.0, 100.0, 100.0]).unwrap();
        assert_eq!(
            PriceTier::classify(stats.position_of(100.0)),
            PriceTier::Neutral
        );
    }

    #[test]
    fn display_labels_are_lowercase() {
        let labels: Vec<String> = PriceTier::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, vec!["favorable", "neutral", "unfavorable"]);
    }
}
