//! Courtside GUI - egui-based seat picker.
//!
//! Modules:
//! - app.rs: picker state machine and business logic
//! - actions.rs: action types and dispatch
//! - input.rs: keyboard input handling
//! - canvas.rs: seat map painting and pointer wiring
//! - theme.rs: theme and seat palette

pub mod actions;
pub mod app;
pub mod canvas;
pub mod input;
pub mod theme;

use courtside_core::{Geometry, SectionId};
use eframe::egui;
use tracing::debug;

use self::actions::{Action, apply_action};
use self::app::{PickerApp, PickerEvent};
use self::input::handle_keyboard_input;

/// Main GUI application wrapper implementing the eframe::App trait.
pub struct CourtsideApp {
    picker: PickerApp,
    /// DragValue binding; pushed into the picker when it changes.
    quantity: usize,
    /// Mirrors the latest QuantitySatisfied event; gates the confirm button.
    satisfied: bool,
}

impl CourtsideApp {
    pub fn new(section: &str, quantity: usize, geometry: Geometry) -> Self {
        let quantity = quantity.max(1);
        CourtsideApp {
            picker: PickerApp::new(section, quantity, geometry),
            quantity,
            satisfied: false,
        }
    }

    fn draw_booking_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Courtside Tickets");
        ui.separator();

        ui.label("Section");
        for id in SectionId::ALL {
            let active = self.picker.section() == id.as_str();
            let label = format!("{}  {}", id.display_name(), id.price_tier());
            if ui.selectable_label(active, label).clicked() && !active {
                apply_action(
                    &mut self.picker,
                    Action::SelectSection(id.as_str().to_string()),
                );
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Tickets");
            let mut quantity = self.quantity;
            ui.add(egui::DragValue::new(&mut quantity).range(1..=8));
            if quantity != self.quantity {
                self.quantity = quantity;
                apply_action(&mut self.picker, Action::SetQuantity(quantity));
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("\u{2212}").clicked() {
                apply_action(&mut self.picker, Action::ZoomOut);
            }
            ui.monospace(self.picker.transform.zoom_percent());
            if ui.button("+").clicked() {
                apply_action(&mut self.picker, Action::ZoomIn);
            }
            if ui.button("Reset view").clicked() {
                apply_action(&mut self.picker, Action::ResetView);
            }
        });

        ui.separator();
        ui.label("Your seats");
        if self.picker.selection().is_empty() {
            ui.weak(format!(
                "Click {} available seat(s) on the map",
                self.picker.selection().quantity()
            ));
        } else {
            ui.monospace(self.picker.selection().ids().join(", "));
            if ui.button("Clear").clicked() {
                apply_action(&mut self.picker, Action::ClearSelection);
            }
        }

        ui.add_space(8.0);
        let confirm = ui.add_enabled(self.satisfied, egui::Button::new("Confirm seats"));
        if confirm.clicked() {
            apply_action(&mut self.picker, Action::Confirm);
        }
    }
}

fn draw_status_bar(ui: &mut egui::Ui, picker: &PickerApp) {
    let status = if picker.status.is_empty() {
        "Drag to pan  |  +/- Zoom  |  0 Reset view  |  Del Clear  |  \u{21B5} Confirm".to_string()
    } else {
        picker.status.clone()
    };
    ui.label(
        egui::RichText::new(status)
            .monospace()
            .size(11.0)
            .color(egui::Color32::from_rgb(150, 150, 150)),
    );
}

impl eframe::App for CourtsideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_theme(ctx);

        // Ctrl+W to close.
        let ctrl_w = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::W));
        if ctrl_w {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if let Some(action) = handle_keyboard_input(ctx) {
            apply_action(&mut self.picker, action);
        }

        egui::SidePanel::left("booking_panel")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                self.draw_booking_panel(ui);
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            draw_status_bar(ui, &self.picker);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::draw_seat_canvas(ui, &mut self.picker);
        });

        // Outbound events for the surrounding booking UI. In this demo the
        // only consumer is the confirm gate (and the log).
        for event in self.picker.poll_events() {
            match event {
                PickerEvent::SelectionChanged(ids) => {
                    debug!(?ids, "selection changed");
                }
                PickerEvent::QuantitySatisfied(satisfied) => {
                    self.satisfied = satisfied;
                }
            }
        }
    }
}
