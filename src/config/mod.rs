//! Configuration module for the price-scout application.

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use persistence::{APP_STATE_PATH, SETTINGS_KEY};
pub use plot::{HISTORY_PLOT, HistoryPlotConfig, POSITION_GRADIENT_COLORS};
