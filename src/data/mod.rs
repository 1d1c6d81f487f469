// Data loading and persistence
pub mod catalog;
pub mod settings;

// Re-export commonly used types
pub use catalog::{Catalog, MockCatalog, SearchError, SearchProvider};
pub use settings::Settings;
