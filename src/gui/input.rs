//! Keyboard input handling and event translation to actions.

use eframe::egui;
use egui::{Key, Modifiers};

use crate::gui::actions::Action;

/// Translate keyboard events to actions. Pointer interaction goes straight
/// to the canvas and never through here.
pub fn handle_keyboard_input(ctx: &egui::Context) -> Option<Action> {
    // Zoom: +/- (the = key doubles as + on most layouts).
    let zoom_in = ctx.input_mut(|i| {
        i.consume_key(Modifiers::NONE, Key::Plus) || i.consume_key(Modifiers::NONE, Key::Equals)
    });
    if zoom_in {
        return Some(Action::ZoomIn);
    }
    if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Minus)) {
        return Some(Action::ZoomOut);
    }

    // 0 recenters the view.
    if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Num0)) {
        return Some(Action::ResetView);
    }

    // Delete/Backspace drop the current picks.
    if ctx.input_mut(|i| {
        i.consume_key(Modifiers::NONE, Key::Delete) || i.consume_key(Modifiers::NONE, Key::Backspace)
    }) {
        return Some(Action::ClearSelection);
    }

    // Enter confirms once the quantity is satisfied.
    if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter)) {
        return Some(Action::Confirm);
    }

    None
}
