use serde::{Deserialize, Serialize};

use crate::config::SETTINGS_KEY;

/// The one piece of persisted state: the display-mode flag.
///
/// Read once at startup, written on explicit user toggle. Load and store take
/// the storage handle instead of reaching for an ambient global, so tests run
/// against an in-memory `eframe::Storage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
}

impl Settings {
    /// Loads persisted settings, falling back to the default (light mode)
    /// when nothing was stored yet.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default()
    }

    pub fn store(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStorage(HashMap<String, String>);

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn defaults_to_light_mode() {
        assert!(!Settings::default().dark_mode);
        assert_eq!(Settings::load(None), Settings::default());

        let storage = MemStorage::default();
        assert_eq!(Settings::load(Some(&storage)), Settings::default());
    }

    #[test]
    fn round_trips_through_storage() {
        let mut storage = MemStorage::default();

        let settings = Settings { dark_mode: true };
        settings.store(&mut storage);

        let loaded = Settings::load(Some(&storage));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn toggle_overwrites_previous_value() {
        let mut storage = MemStorage::default();

        Settings { dark_mode: true }.store(&mut storage);
        Settings { dark_mode: false }.store(&mut storage);

        assert!(!Settings::load(Some(&storage)).dark_mode);
    }
}
