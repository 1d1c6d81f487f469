use eframe::egui::{Key, TextEdit, Ui};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The user submitted the current query
    Submitted(String),
}

/// The free-text search bar. Submits on Enter or the search button.
pub struct SearchBar<'a> {
    query: &'a mut String,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a mut String) -> Self {
        Self { query }
    }
}

impl Panel for SearchBar<'_> {
    type Event = SearchEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<SearchEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(self.query)
                    .hint_text("Search for a product...")
                    .desired_width(360.0),
            );

            let submitted_via_enter =
                response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if ui.button("🔍 Search").clicked() || submitted_via_enter {
                events.push(SearchEvent::Submitted(self.query.clone()));
            }
        });

        events
    }
}
