//! Theme and seat palette for the egui shell.

use courtside_core::SeatStyle;
use eframe::egui;

/// Apply dark theme and style configuration.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style
            .text_styles
            .insert(egui::TextStyle::Body, egui::FontId::proportional(13.0));
        style
            .text_styles
            .insert(egui::TextStyle::Monospace, egui::FontId::monospace(12.0));
        style
            .text_styles
            .insert(egui::TextStyle::Heading, egui::FontId::proportional(15.0));

        // High-contrast text over the dark canvas.
        let fg = egui::Color32::from_gray(235);
        style.visuals.widgets.noninteractive.fg_stroke.color = fg;
        style.visuals.widgets.inactive.fg_stroke.color = fg;
        style.visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        style.visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;

        style.visuals.selection.bg_fill = egui::Color32::from_rgb(80, 130, 180);
        style.visuals.selection.stroke.color = egui::Color32::from_rgb(100, 150, 200);
        style.visuals.selection.stroke.width = 1.0;
    });
}

/// Fill color per seat style. Precedence is decided upstream in the render
/// pipeline; this is a plain lookup.
pub fn seat_fill(style: SeatStyle) -> egui::Color32 {
    match style {
        SeatStyle::Selected => egui::Color32::from_rgb(90, 190, 120),
        SeatStyle::Occupied => egui::Color32::from_gray(70),
        SeatStyle::Hovered => egui::Color32::from_rgb(110, 160, 220),
        SeatStyle::Available => egui::Color32::from_rgb(60, 90, 130),
    }
}

/// Outline stroke; only selected seats carry one.
pub fn seat_stroke(style: SeatStyle) -> Option<egui::Stroke> {
    match style {
        SeatStyle::Selected => Some(egui::Stroke::new(
            1.5,
            egui::Color32::from_rgb(160, 235, 180),
        )),
        _ => None,
    }
}

pub fn label_color() -> egui::Color32 {
    egui::Color32::from_gray(180)
}

pub fn court_color() -> egui::Color32 {
    egui::Color32::from_rgb(200, 160, 80)
}
