// Domain types and value objects
// These modules contain pure business logic independent of UI/visualization

pub mod history;
pub mod offer;
pub mod price_band;
pub mod price_stats;

// Re-export commonly used types
pub use history::HistoryPoint;
pub use offer::{MAX_RATING_STARS, Offer, Product};
pub use price_band::PriceTier;
pub use price_stats::{PriceStats, StatsError};
