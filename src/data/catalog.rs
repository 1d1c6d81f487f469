use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{HistoryPoint, Product};

/// Error types for search operations.
/// Surfaced to the user as an inline message; never retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The backend could not be reached
    Network(String),
    /// The query produced no products
    NoResults(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "Network error: {}", msg),
            SearchError::NoResults(query) => {
                write!(f, "No results found for \"{}\"", query)
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// The seam a production backend would implement.
pub trait SearchProvider {
    fn search(&self, query: &str) -> Result<Vec<Product>, SearchError>;

    /// Price history for a product identifier, ordered oldest-first.
    fn price_history(&self, product_id: &str) -> Vec<HistoryPoint>;
}

/// The full mock dataset: products plus one shared history series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub history: Vec<HistoryPoint>,
}

/// Prototype catalog backed by an embedded JSON document.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    catalog: Catalog,
}

impl MockCatalog {
    pub fn load() -> anyhow::Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(MOCK_CATALOG_JSON).context("parse embedded mock catalog")?;
        log::info!(
            "📦 Loaded mock catalog: {} products, {} history points",
            catalog.products.len(),
            catalog.history.len()
        );
        Ok(Self { catalog })
    }

    /// A catalog with no products. Searches against it yield `NoResults`.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl SearchProvider for MockCatalog {
    fn search(&self, query: &str) -> Result<Vec<Product>, SearchError> {
        log::info!("🔍 Search invoked for '{}'", query);

        if self.catalog.products.is_empty() {
            return Err(SearchError::NoResults(query.to_string()));
        }

        // The prototype ignores the query and returns the fixed dataset.
        Ok(self.catalog.products.clone())
    }

    fn price_history(&self, product_id: &str) -> Vec<HistoryPoint> {
        log::info!("📈 Price history requested for '{}'", product_id);

        // Mocked identically regardless of identifier.
        self.catalog.history.clone()
    }
}

const MOCK_CATALOG_JSON: &str = r##"{
  "products": [
    {
      "name": "Premium Wireless Headphones",
      "image_url": "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
      "offers": [
        { "seller_name": "TechStore", "price": 299.99, "rating_stars": 4, "store_url": "#" },
        { "seller_name": "AudioPro", "price": 279.99, "rating_stars": 5, "store_url": "#" },
        { "seller_name": "SoundGear", "price": 289.99, "rating_stars": 4, "store_url": "#" }
      ]
    },
    {
      "name": "Mechanical Keyboard TKL",
      "image_url": "https://images.unsplash.com/photo-1587829741301-dc798b83add3",
      "offers": [
        { "seller_name": "KeyCult", "price": 129.0, "rating_stars": 5, "store_url": "#" },
        { "seller_name": "TechStore", "price": 119.5, "rating_stars": 4, "store_url": "#" },
        { "seller_name": "ClickWorks", "price": 139.99, "rating_stars": 3, "store_url": "#" },
        { "seller_name": "BoardRoom", "price": 124.95, "rating_stars": 4, "store_url": "#" }
      ]
    },
    {
      "name": "4K Action Camera",
      "image_url": "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f",
      "offers": [
        { "seller_name": "LensLand", "price": 249.0, "rating_stars": 4, "store_url": "#" },
        { "seller_name": "CamDepot", "price": 249.0, "rating_stars": 5, "store_url": "#" }
      ]
    }
  ],
  "history": [
    { "period_label": "2024-01", "price": 299.0 },
    { "period_label": "2024-02", "price": 289.0 },
    { "period_label": "2024-03", "price": 279.0 },
    { "period_label": "2024-04", "price": 299.0 },
    { "period_label": "2024-05", "price": 259.0 }
  ]
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = MockCatalog::load().expect("embedded JSON is valid");
        assert!(!catalog.catalog.products.is_empty());
        for product in &catalog.catalog.products {
            assert!(
                !product.offers.is_empty(),
                "every mock product lists at least one offer"
            );
            for offer in &product.offers {
                assert!(offer.price >= 0.0);
                assert!((1..=5).contains(&offer.rating_stars));
            }
        }
    }

    #[test]
    fn search_ignores_the_query() {
        let catalog = MockCatalog::load().unwrap();
        let a = catalog.search("headphones").unwrap();
        let b = catalog.search("completely unrelated").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].name, "Premium Wireless Headphones");
    }

    #[test]
    fn empty_catalog_yields_no_results() {
        let catalog = MockCatalog::empty();
        let err = catalog.search("anything").unwrap_err();
        assert_eq!(err, SearchError::NoResults("anything".to_string()));
    }

    #[test]
    fn history_is_fixed_and_ordered() {
        let catalog = MockCatalog::load().unwrap();
        let a = catalog.price_history("Premium Wireless Headphones");
        let b = catalog.price_history("some-other-id");
        assert_eq!(a, b, "history is mocked identically for any identifier");
        assert_eq!(a.len(), 5);
        assert_eq!(a.first().unwrap().period_label, "2024-01");
        assert_eq!(a.last().unwrap().period_label, "2024-05");
    }
}
