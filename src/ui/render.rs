use eframe::egui::{
    Align, CentralPanel, Context, Frame, Layout, Margin, RichText, ScrollArea, TopBottomPanel,
};

use crate::ui::app::{PriceScoutApp, View};
use crate::ui::history_view::{HistoryEvent, HistoryView};
use crate::ui::price_card::{CardEvent, PriceCard};
use crate::ui::search_panel::{Panel, SearchBar, SearchEvent};
use crate::ui::styles::UiStyleExt;

impl PriceScoutApp {
    pub(super) fn render_header(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(self.theme.panel_fill)
            .inner_margin(Margin::symmetric(12, 8));
        TopBottomPanel::top("header")
            .frame(header_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Price Scout")
                            .color(self.theme.heading)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let label = if self.settings.dark_mode {
                            "☀ Light"
                        } else {
                            "🌙 Dark"
                        };
                        if ui.button(label).clicked() {
                            self.toggle_dark_mode();
                        }
                    });
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let mut search_events: Vec<SearchEvent> = Vec::new();
        let mut card_events: Vec<CardEvent> = Vec::new();
        let mut history_events: Vec<HistoryEvent> = Vec::new();

        let central_frame = Frame::new()
            .fill(self.theme.window_fill)
            .inner_margin(Margin::same(16));
        CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| match &self.view {
                View::Search => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.heading(
                            RichText::new("Find the Best Price")
                                .color(self.theme.heading)
                                .strong(),
                        );
                        ui.label(
                            RichText::new(
                                "Compare prices across multiple sellers and find the best deals",
                            )
                            .color(self.theme.subdued),
                        );
                        ui.add_space(12.0);

                        let mut search_bar = SearchBar::new(&mut self.query);
                        search_events = search_bar.render(ui);
                    });

                    if let Some(error) = &self.data_state.last_error {
                        ui.add_space(12.0);
                        ui.vertical_centered(|ui| ui.label_error(error.to_string()));
                    }

                    ui.add_space(16.0);
                    ScrollArea::vertical().show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for product in &self.data_state.results {
                                let mut card = PriceCard::new(product, &self.theme);
                                card_events.extend(card.render(ui));
                            }
                        });
                    });
                }
                View::History {
                    product_name,
                    history,
                } => {
                    let mut view = HistoryView::new(product_name, history, &self.theme);
                    history_events = view.render(ui);
                }
            });

        for event in search_events {
            match event {
                SearchEvent::Submitted(_) => self.run_search(),
            }
        }
        for event in card_events {
            match event {
                CardEvent::OpenHistory(product_name) => self.open_history(&product_name),
            }
        }
        for event in history_events {
            match event {
                HistoryEvent::Back => self.go_back(),
            }
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(self.theme.panel_fill)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mode = if self.settings.dark_mode { "DARK" } else { "LIGHT" };
                    ui.metric("🖥", mode, self.theme.accent);
                    ui.separator();
                    ui.metric(
                        "🛒",
                        &format!("{} products", self.data_state.results.len()),
                        self.theme.text,
                    );

                    if let Some(error) = &self.data_state.last_error {
                        ui.separator();
                        ui.label_error(error.to_string());
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued("D toggles theme | Esc goes back");
                    });
                });
            });
    }
}
