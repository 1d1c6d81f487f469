//! App state persistence configuration

/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = "price_scout_state.json";

/// Fixed storage key for the persisted display-mode flag
pub const SETTINGS_KEY: &str = "dark_mode_enabled";
