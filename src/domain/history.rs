use serde::{Deserialize, Serialize};

/// One point of a product's price-history series, e.g. ("2024-03", 279.0).
/// The series is ordered oldest-first and is independent of the offer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub period_label: String,
    pub price: f64,
}
