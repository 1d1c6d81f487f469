//! History chart and position-bar visualization configuration

use eframe::egui::Color32;

pub struct HistoryPlotConfig {
    pub line_color: Color32,
    /// Width of the history line
    pub line_width: f32,
    /// Radius of the per-period markers
    pub marker_radius: f32,
    /// Plot aspect ratio (width:height)
    pub plot_aspect_ratio: f32,
}

pub const HISTORY_PLOT: HistoryPlotConfig = HistoryPlotConfig {
    line_color: Color32::from_rgb(92, 176, 255), // Accent blue
    line_width: 2.0,
    marker_radius: 3.5,
    plot_aspect_ratio: 2.0,
};

/// Gradient used to fill the per-offer position bar.
/// From cheapest (green) through mid-market (amber) to priciest (red).
pub const POSITION_GRADIENT_COLORS: &[&str] = &[
    "#3fb68b", // Green
    "#f7c843", // Amber
    "#f0635c", // Red
];
