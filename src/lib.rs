// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;

// Re-export commonly used types
pub use data::{MockCatalog, SearchError, SearchProvider, Settings};
pub use domain::{HistoryPoint, Offer, PriceStats, PriceTier, Product, StatsError};
pub use ui::PriceScoutApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run a search with this query as soon as the app opens
    #[arg(long)]
    pub query: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    provider: Box<dyn SearchProvider>,
    args: &Cli,
) -> Box<dyn eframe::App> {
    let app = ui::PriceScoutApp::new(cc, provider, args.query.clone());
    Box::new(app)
}
