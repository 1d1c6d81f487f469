#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;

use price_scout::config::APP_STATE_PATH;
use price_scout::{Cli, MockCatalog, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load the mock catalog. A parse failure is not fatal: the app starts
    // with an empty catalog and the first search surfaces NoResults inline.
    let catalog = match MockCatalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("⚠️  Failed to load mock catalog: {:#}", e);
            MockCatalog::empty()
        }
    };

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Price Scout - Find the Best Price",
        options,
        Box::new(move |cc| Ok(run_app(cc, Box::new(catalog), &args))),
    )
}
