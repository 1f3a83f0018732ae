//! Seat map canvas: executes the core render commands with the egui
//! painter and feeds pointer events into the picker state machine.

use courtside_core::{DrawCmd, Point};
use eframe::egui;

use crate::gui::app::PickerApp;
use crate::gui::theme;

const SEAT_ROUNDING: f32 = 3.0;

/// Draw the interactive seat canvas into the remaining panel space.
pub fn draw_seat_canvas(ui: &mut egui::Ui, app: &mut PickerApp) {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let painter = painter.with_clip_rect(response.rect);

    let origin = response.rect.min;
    let to_local = |p: egui::Pos2| Point::new(p.x - origin.x, p.y - origin.y);

    app.set_surface_size(Point::new(response.rect.width(), response.rect.height()));

    // Pointer events, in state-machine order: down, move, up, click.
    if response.drag_started() {
        if let Some(p) = response.interact_pointer_pos() {
            app.pointer_down(to_local(p));
        }
    }
    if response.dragged() {
        if let Some(p) = response.interact_pointer_pos() {
            app.pointer_move(to_local(p));
        }
    }
    if response.drag_stopped() {
        app.pointer_up();
    }
    if response.clicked() {
        if let Some(p) = response.interact_pointer_pos() {
            app.click(to_local(p));
        }
    }

    // Hover tracking while idle. egui keeps a drag alive when the button is
    // held outside the rect, so only a non-drag exit counts as a leave.
    if !response.dragged() {
        match response.hover_pos() {
            Some(p) if response.rect.contains(p) => app.pointer_move(to_local(p)),
            _ => app.pointer_leave(),
        }
    }

    painter.rect_filled(response.rect, 0.0, egui::Color32::from_gray(24));

    for cmd in app.draw() {
        match cmd {
            DrawCmd::Seat { rect, style } => {
                let r = egui::Rect::from_min_size(
                    egui::pos2(origin.x + rect.x, origin.y + rect.y),
                    egui::vec2(rect.w, rect.h),
                );
                painter.rect_filled(r, SEAT_ROUNDING, theme::seat_fill(style));
                if let Some(stroke) = theme::seat_stroke(style) {
                    painter.rect_stroke(r, SEAT_ROUNDING, stroke);
                }
            }
            DrawCmd::RowLabel { text, at } => {
                painter.text(
                    egui::pos2(origin.x + at.x, origin.y + at.y),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::monospace(11.0),
                    theme::label_color(),
                );
            }
            DrawCmd::CourtLabel { text, at } => {
                painter.text(
                    egui::pos2(origin.x + at.x, origin.y + at.y),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(14.0),
                    theme::court_color(),
                );
            }
        }
    }
}
