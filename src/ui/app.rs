use eframe::{Frame, egui};

use crate::data::{SearchError, SearchProvider, Settings};
use crate::domain::{HistoryPoint, Product};
use crate::ui::theme::Theme;

/// The two logical views of the navigation surface.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum View {
    Search,
    History {
        product_name: String,
        history: Vec<HistoryPoint>,
    },
}

/// Search results and the provider they came from. `last_error` is what the
/// status bar shows inline; it is cleared by the next successful search.
pub struct DataState {
    pub provider: Box<dyn SearchProvider>,
    pub results: Vec<Product>,
    pub last_error: Option<SearchError>,
}

impl DataState {
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            results: Vec::new(),
            last_error: None,
        }
    }

    pub fn run_search(&mut self, query: &str) {
        match self.provider.search(query) {
            Ok(products) => {
                log::info!("✅ Search returned {} products", products.len());
                self.results = products;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("⚠️  Search failed: {}", e);
                self.results.clear();
                self.last_error = Some(e);
            }
        }
    }
}

pub struct PriceScoutApp {
    pub(super) settings: Settings,
    pub(super) theme: Theme,
    pub(super) query: String,
    pub(super) view: View,
    pub(super) data_state: DataState,
}

impl PriceScoutApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        provider: Box<dyn SearchProvider>,
        initial_query: Option<String>,
    ) -> Self {
        // The display-mode flag is the only persisted state.
        let settings = Settings::load(cc.storage);
        let theme = Theme::from_settings(&settings);

        let mut app = Self {
            settings,
            theme,
            query: String::new(),
            view: View::Search,
            data_state: DataState::new(provider),
        };

        if let Some(query) = initial_query {
            app.query = query;
            app.run_search();
        }

        app
    }

    pub(super) fn run_search(&mut self) {
        self.data_state.run_search(&self.query);
    }

    pub(super) fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.theme = Theme::from_settings(&self.settings);
        log::info!(
            "🎨 Display mode toggled to {}",
            if self.settings.dark_mode { "dark" } else { "light" }
        );
    }

    pub(super) fn open_history(&mut self, product_name: &str) {
        let history = self.data_state.provider.price_history(product_name);
        self.view = View::History {
            product_name: product_name.to_string(),
            history,
        };
    }

    pub(super) fn go_back(&mut self) {
        self.view = View::Search;
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing in the search box must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        let (toggle_dark, go_back) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if toggle_dark {
            self.toggle_dark_mode();
        }
        if go_back && self.view != View::Search {
            self.go_back();
        }
    }
}

impl eframe::App for PriceScoutApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.store(storage);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.theme.apply(ctx);
        self.handle_global_shortcuts(ctx);

        self.render_header(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockCatalog;

    struct FailingProvider;

    impl SearchProvider for FailingProvider {
        fn search(&self, _query: &str) -> Result<Vec<Product>, SearchError> {
            Err(SearchError::Network("connection refused".to_string()))
        }

        fn price_history(&self, _product_id: &str) -> Vec<HistoryPoint> {
            Vec::new()
        }
    }

    #[test]
    fn search_failure_is_surfaced_inline() {
        let mut state = DataState::new(Box::new(FailingProvider));
        state.run_search("headphones");

        assert!(state.results.is_empty());
        assert_eq!(
            state.last_error,
            Some(SearchError::Network("connection refused".to_string()))
        );
    }

    #[test]
    fn successful_search_clears_previous_error() {
        let mut state = DataState::new(Box::new(MockCatalog::load().unwrap()));
        state.last_error = Some(SearchError::Network("stale".to_string()));

        state.run_search("anything");

        assert!(!state.results.is_empty());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn empty_catalog_reports_no_results() {
        let mut state = DataState::new(Box::new(MockCatalog::empty()));
        state.run_search("headphones");

        assert!(state.results.is_empty());
        assert_eq!(
            state.last_error,
            Some(SearchError::NoResults("headphones".to_string()))
        );
    }
}
