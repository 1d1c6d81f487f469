use colorgrad::Gradient;
use eframe::egui::{Color32, RichText, Ui};

use crate::config::POSITION_GRADIENT_COLORS;

/// Formats a retail price: two decimals with a dollar sign.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>, color: Color32) {
    ui.add_space(10.0);
    ui.heading(RichText::new(text.into()).color(color).strong());
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Samples the position gradient at a normalized position in [0, 100].
pub fn position_color(position: f64) -> Color32 {
    let grad = colorgrad::GradientBuilder::new()
        .html_colors(POSITION_GRADIENT_COLORS)
        .build::<colorgrad::CatmullRomGradient>()
        .expect("Failed to create color gradient");

    to_egui_color(grad.at((position / 100.0) as f32))
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}
