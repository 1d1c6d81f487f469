// User interface components
pub mod app;
pub mod history_view;
pub mod price_card;
pub mod render;
pub mod search_panel;
pub mod styles;
pub mod theme;
pub mod utils;

// Re-export main app
pub use app::PriceScoutApp;
pub use search_panel::Panel;
pub use theme::Theme;
