use eframe::egui::Ui;
use egui_plot::{AxisHints, Corner, Legend, Line, Plot, PlotPoints, Points};

use crate::config::HISTORY_PLOT;
use crate::domain::HistoryPoint;
use crate::ui::search_panel::Panel;
use crate::ui::styles::UiStyleExt;
use crate::ui::theme::Theme;
use crate::ui::utils::{section_heading, spaced_separator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEvent {
    /// Return to the search view
    Back,
}

/// Line chart over a product's price-history series.
pub struct HistoryView<'a> {
    product_name: &'a str,
    history: &'a [HistoryPoint],
    theme: &'a Theme,
}

impl<'a> HistoryView<'a> {
    pub fn new(product_name: &'a str, history: &'a [HistoryPoint], theme: &'a Theme) -> Self {
        Self {
            product_name,
            history,
            theme,
        }
    }

    fn render_chart(&self, ui: &mut Ui) {
        let labels: Vec<String> = self
            .history
            .iter()
            .map(|point| point.period_label.clone())
            .collect();

        let coords: Vec<[f64; 2]> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, point)| [i as f64, point.price])
            .collect();

        // Period labels sit at whole-number marks; suppress everything else.
        let x_axis = AxisHints::new_x().label("Period").formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 0.05 || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        });

        let y_axis = AxisHints::new_y().label("Price (USD)");

        Plot::new("price_history")
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .view_aspect(HISTORY_PLOT.plot_aspect_ratio)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(self.product_name, PlotPoints::new(coords.clone()))
                        .color(HISTORY_PLOT.line_color)
                        .width(HISTORY_PLOT.line_width),
                );
                plot_ui.points(
                    Points::new("", PlotPoints::new(coords))
                        .radius(HISTORY_PLOT.marker_radius)
                        .color(HISTORY_PLOT.line_color),
                );
            });
    }
}

impl Panel for HistoryView<'_> {
    type Event = HistoryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<HistoryEvent> {
        let mut events = Vec::new();

        if ui.button("⬅ Back").clicked() {
            events.push(HistoryEvent::Back);
        }

        section_heading(
            ui,
            format!("Price History: {}", self.product_name),
            self.theme.heading,
        );

        spaced_separator(ui);

        if self.history.is_empty() {
            ui.label_warning("No price history recorded for this product.");
        } else {
            self.render_chart(ui);
        }

        events
    }
}
