//! Action types and dispatch logic.
//!
//! Actions represent the user operations reachable from the booking panel
//! and keyboard; `apply_action` dispatches them onto the picker state.

use tracing::debug;

use crate::gui::app::PickerApp;

/// All possible user actions in the GUI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the active venue section.
    SelectSection(String),

    /// Change the ticket quantity (number of seats to pick).
    SetQuantity(usize),

    /// Step the zoom in.
    ZoomIn,

    /// Step the zoom out.
    ZoomOut,

    /// Restore the default pan/zoom.
    ResetView,

    /// Drop all picked seats.
    ClearSelection,

    /// Freeze the picked seats (demo stand-in for checkout).
    Confirm,
}

/// Apply an action to the picker state.
pub fn apply_action(app: &mut PickerApp, action: Action) {
    debug!(?action, "applying action");
    match action {
        Action::SelectSection(section) => app.set_section(&section),
        Action::SetQuantity(quantity) => app.set_quantity(quantity),
        Action::ZoomIn => app.zoom_in(),
        Action::ZoomOut => app.zoom_out(),
        Action::ResetView => app.reset_view(),
        Action::ClearSelection => app.clear_selection(),
        Action::Confirm => app.confirm(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::{Geometry, ViewTransform, ZOOM_DEFAULT, ZOOM_STEP};

    #[test]
    fn zoom_actions_step_and_reset() {
        let mut app = PickerApp::new("club", 2, Geometry::default());
        apply_action(&mut app, Action::ZoomIn);
        assert!((app.transform.zoom - (ZOOM_DEFAULT + ZOOM_STEP)).abs() < 1e-5);
        apply_action(&mut app, Action::ResetView);
        assert_eq!(app.transform, ViewTransform::default());
    }

    #[test]
    fn select_section_action_switches_maps() {
        let mut app = PickerApp::new("club", 2, Geometry::default());
        apply_action(&mut app, Action::SelectSection("upper".to_string()));
        assert_eq!(app.section(), "upper");
        assert_eq!(app.seat_map().rows.len(), 8);
    }
}
