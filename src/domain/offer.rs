use serde::{Deserialize, Serialize};

/// Upper bound of the star-rating scale. Ratings are whole stars in 1..=5.
pub const MAX_RATING_STARS: u8 = 5;

/// One seller's listed price and rating for a product.
/// Immutable once constructed; owned by the `Product` that lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique within a product's offer set
    pub seller_name: String,
    /// Non-negative decimal price in USD
    pub price: f64,
    /// Whole stars, 1..=5
    pub rating_stars: u8,
    pub store_url: String,
}

/// A product and its ordered offer set. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub image_url: String,
    pub offers: Vec<Offer>,
}

impl Product {
    /// The lowest-priced offer, used for the "Best Price" badge.
    /// `None` only when the offer set is empty.
    pub fn best_offer(&self) -> Option<&Offer> {
        self.offers
            .iter()
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(seller: &str, price: f64) -> Offer {
        Offer {
            seller_name: seller.to_string(),
            price,
            rating_stars: 4,
            store_url: "#".to_string(),
        }
    }

    #[test]
    fn best_offer_is_cheapest() {
        let product = Product {
            name: "Headphones".to_string(),
            image_url: String::new(),
            offers: vec![
                offer("TechStore", 299.99),
                offer("AudioPro", 279.99),
                offer("SoundGear", 289.99),
            ],
        };

        let best = product.best_offer().expect("offers are non-empty");
        assert_eq!(best.seller_name, "AudioPro");
        assert_eq!(best.price, 279.99);
    }

    #[test]
    fn best_offer_empty_set_is_none() {
        let product = Product {
            name: "Ghost".to_string(),
            image_url: String::new(),
            offers: Vec::new(),
        };
        assert!(product.best_offer().is_none());
    }
}
