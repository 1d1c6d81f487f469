use eframe::egui::{Color32, Context, Visuals};

use crate::data::Settings;
use crate::domain::PriceTier;

/// Swappable visual palette. Exactly one of these is active at a time; the
/// classifier and normalizer never know which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub window_fill: Color32,
    pub panel_fill: Color32,
    pub card_fill: Color32,
    pub heading: Color32,
    pub text: Color32,
    pub subdued: Color32,
    pub accent: Color32,
    pub star: Color32,
    pub bar_track: Color32,
    pub favorable: Color32,
    pub neutral: Color32,
    pub unfavorable: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            dark: true,
            window_fill: Color32::from_rgb(11, 17, 26),
            panel_fill: Color32::from_rgb(13, 21, 32),
            card_fill: Color32::from_rgb(17, 26, 38),
            heading: Color32::from_rgb(230, 237, 247),
            text: Color32::from_rgb(183, 198, 217),
            subdued: Color32::from_rgb(127, 139, 160),
            accent: Color32::from_rgb(92, 176, 255),
            star: Color32::from_rgb(250, 204, 21),
            bar_track: Color32::from_rgb(32, 44, 60),
            favorable: Color32::from_rgb(63, 182, 139),
            neutral: Color32::from_rgb(247, 200, 67),
            unfavorable: Color32::from_rgb(240, 99, 92),
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            window_fill: Color32::from_rgb(248, 251, 255),
            panel_fill: Color32::from_rgb(237, 241, 247),
            card_fill: Color32::WHITE,
            heading: Color32::from_rgb(12, 22, 37),
            text: Color32::from_rgb(44, 58, 79),
            subdued: Color32::from_rgb(91, 102, 120),
            accent: Color32::from_rgb(37, 99, 235),
            star: Color32::from_rgb(217, 119, 6),
            bar_track: Color32::from_rgb(222, 228, 237),
            favorable: Color32::from_rgb(14, 166, 108),
            neutral: Color32::from_rgb(217, 119, 6),
            unfavorable: Color32::from_rgb(225, 29, 72),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        if settings.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn tier_color(&self, tier: PriceTier) -> Color32 {
        match tier {
            PriceTier::Favorable => self.favorable,
            PriceTier::Neutral => self.neutral,
            PriceTier::Unfavorable => self.unfavorable,
        }
    }

    /// Sets up custom visuals for the entire application
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.window_fill = self.window_fill;
        visuals.panel_fill = self.panel_fill;

        // Make the widgets stand out a bit more
        visuals.widgets.noninteractive.fg_stroke.color = self.text;
        visuals.widgets.inactive.fg_stroke.color = self.text;
        visuals.widgets.hovered.fg_stroke.color = self.heading;
        visuals.widgets.active.fg_stroke.color = self.heading;
        visuals.hyperlink_color = self.accent;

        ctx.set_visuals(visuals);
    }
}
