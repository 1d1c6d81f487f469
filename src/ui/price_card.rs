use eframe::egui::{
    Align2, CornerRadius, FontId, Frame, Margin, Rect, RichText, Sense, Ui, vec2,
};

use crate::domain::{PriceStats, PriceTier, Product};
use crate::ui::search_panel::Panel;
use crate::ui::styles::UiStyleExt;
use crate::ui::theme::Theme;
use crate::ui::utils::{format_price, position_color};

const CARD_WIDTH: f32 = 320.0;
const BANNER_HEIGHT: f32 = 56.0;
const BAR_SIZE: (f32, f32) = (130.0, 8.0);

#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    /// Open the price-history view for this product
    OpenHistory(String),
}

/// One product card: best-price badge, then a row per seller offer with its
/// rating, price, and position within the observed price range.
pub struct PriceCard<'a> {
    product: &'a Product,
    theme: &'a Theme,
}

impl<'a> PriceCard<'a> {
    pub fn new(product: &'a Product, theme: &'a Theme) -> Self {
        Self { product, theme }
    }

    fn render_banner(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(vec2(CARD_WIDTH, BANNER_HEIGHT), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(4), self.theme.bar_track);

        // Stand-in for the product image; the mock image URLs are not fetched.
        let initial = self.product.name.chars().next().unwrap_or('?');
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            initial,
            FontId::proportional(28.0),
            self.theme.subdued,
        );

        if let Some(best) = self.product.best_offer() {
            painter.text(
                rect.left_center() + vec2(10.0, 0.0),
                Align2::LEFT_CENTER,
                format!("Best Price: {}", format_price(best.price)),
                FontId::proportional(13.0),
                self.theme.accent,
            );
        }
    }

    fn render_position_bar(&self, ui: &mut Ui, position: f64) {
        let (rect, response) =
            ui.allocate_exact_size(vec2(BAR_SIZE.0, BAR_SIZE.1), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(3), self.theme.bar_track);

        // Fill up to the offer's normalized position; keep a sliver visible
        // even at position 0 so the cheapest offer still shows its color.
        let fill_width = (rect.width() * (position / 100.0) as f32).max(4.0);
        let fill = Rect::from_min_size(rect.min, vec2(fill_width, rect.height()));
        painter.rect_filled(fill, CornerRadius::same(3), position_color(position));

        response.on_hover_text(format!("{:.0}% of the observed price range", position));
    }

    fn render_offers(&self, ui: &mut Ui) {
        // Stats are derived from the current offer set on every render.
        let stats = match PriceStats::from_offers(&self.product.offers) {
            Ok(stats) => stats,
            Err(e) => {
                ui.label_error(format!("No offers listed ({})", e));
                return;
            }
        };

        for offer in &self.product.offers {
            let position = stats.position_of(offer.price);
            let tier = PriceTier::classify(position);
            let tier_color = self.theme.tier_color(tier);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&offer.seller_name).color(self.theme.text));
                    ui.rating_stars(offer.rating_stars, self.theme.star);
                });

                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format_price(offer.price))
                                        .strong()
                                        .color(tier_color),
                                );
                                ui.label(
                                    RichText::new(tier.to_string()).small().color(tier_color),
                                );
                            });
                            ui.horizontal(|ui| {
                                self.render_position_bar(ui, position);
                                ui.hyperlink_to(
                                    RichText::new("Visit Store").small(),
                                    &offer.store_url,
                                );
                            });
                        });
                    },
                );
            });
        }

        ui.add_space(6.0);
        ui.metric(
            "Average",
            &format_price(stats.average),
            self.theme.subdued,
        );
    }
}

impl Panel for PriceCard<'_> {
    type Event = CardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<CardEvent> {
        let mut events = Vec::new();

        Frame::group(ui.style())
            .fill(self.theme.card_fill)
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);

                self.render_banner(ui);
                ui.add_space(8.0);
                ui.heading(RichText::new(&self.product.name).color(self.theme.heading));

                self.render_offers(ui);

                ui.add_space(8.0);
                if ui.button("📈 Price History").clicked() {
                    events.push(CardEvent::OpenHistory(self.product.name.clone()));
                }
            });

        events
    }
}
