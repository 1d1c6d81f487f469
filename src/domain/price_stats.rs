use itertools::Itertools;
use std::fmt;

use crate::domain::offer::Offer;

/// Error types for price statistics
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Statistics were requested over an empty price sequence
    InvalidInput(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for StatsError {}

/// Derived price statistics over a product's current offer set.
///
/// Recomputed from the offers on every render; never cached, never mutated
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl PriceStats {
    /// Computes min/max/average over a non-empty price sequence.
    pub fn from_prices(prices: &[f64]) -> Result<Self, StatsError> {
        let (min, max) = prices
            .iter()
            .copied()
            .minmax()
            .into_option()
            .ok_or_else(|| {
                StatsError::InvalidInput(
                    "price statistics require at least one offer".to_string(),
                )
            })?;

        let average = prices.iter().sum::<f64>() / prices.len() as f64;

        Ok(Self { min, max, average })
    }

    pub fn from_offers(offers: &[Offer]) -> Result<Self, StatsError> {
        let prices: Vec<f64> = offers.iter().map(|offer| offer.price).collect();
        Self::from_prices(&prices)
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Where `price` falls between min and max, as a value in [0, 100].
    ///
    /// A flat market (range == 0) is treated as centered: every price maps
    /// to 50. Otherwise the result is clamped, so prices just outside
    /// [min, max] from floating-point noise stay in range.
    pub fn position_of(&self, price: f64) -> f64 {
        let range = self.range();
        if range == 0.0 {
            return 50.0;
        }
        (((price - self.min) / range) * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn headphones_scenario() {
        // The mock dataset from the search page
        let prices = [299.99, 279.99, 289.99];
        let stats = PriceStats::from_prices(&prices).unwrap();

        assert_eq!(stats.min, 279.99);
        assert_eq!(stats.max, 299.99);
        assert!((stats.average - 289.99).abs() < EPS);
        assert!((stats.range() - 20.0).abs() < EPS);

        assert!((stats.position_of(279.99) - 0.0).abs() < EPS);
        assert!((stats.position_of(299.99) - 100.0).abs() < EPS);
        assert!((stats.position_of(289.99) - 50.0).abs() < 1e-6);
    }

    #[test]
    fn average_is_bounded_by_min_and_max() {
        let sequences: &[&[f64]] = &[
            &[1.0],
            &[5.0, 5.0, 5.0],
            &[299.99, 279.99, 289.99],
            &[0.0, 1000.0],
            &[12.49, 3.2, 88.0, 42.42, 7.77],
        ];

        for prices in sequences {
            let stats = PriceStats::from_prices(prices).unwrap();
            assert!(
                stats.min <= stats.average && stats.average <= stats.max,
                "min <= average <= max violated for {:?}",
                prices
            );
        }
    }

    #[test]
    fn endpoints_map_to_zero_and_hundred() {
        let stats = PriceStats::from_prices(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.position_of(stats.min), 0.0);
        assert_eq!(stats.position_of(stats.max), 100.0);
    }

    #[test]
    fn flat_market_is_centered() {
        let stats = PriceStats::from_prices(&[100.0, 100.0, 100.0]).unwrap();
        assert_eq!(stats.range(), 0.0);
        assert_eq!(stats.position_of(100.0), 50.0);
        // Every price maps to 50 when the range collapses
        assert_eq!(stats.position_of(99.0), 50.0);
        assert_eq!(stats.position_of(101.0), 50.0);
    }

    #[test]
    fn position_is_clamped() {
        let stats = PriceStats::from_prices(&[10.0, 20.0]).unwrap();
        assert_eq!(stats.position_of(5.0), 0.0);
        assert_eq!(stats.position_of(25.0), 100.0);
    }

    #[test]
    fn empty_sequence_fails_with_invalid_input() {
        let err = PriceStats::from_prices(&[]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn single_offer_has_zero_range() {
        let stats = PriceStats::from_prices(&[49.99]).unwrap();
        assert_eq!(stats.min, 49.99);
        assert_eq!(stats.max, 49.99);
        assert_eq!(stats.average, 49.99);
        assert_eq!(stats.position_of(49.99), 50.0);
    }
}
