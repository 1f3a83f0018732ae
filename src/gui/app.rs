//! Core picker state and pointer interaction (UI-agnostic).

use courtside_core::{
    DrawCmd, Geometry, OccupancyProvider, Point, SeatLayout, SeatMap, Selection, StaticOccupancy,
    Toggle, ViewTransform, compute_geometry, draw_commands, generate_seat_map,
};

/// Pointer gesture state. Hover is only recomputed while idle; a drag pans
/// the view and never toggles seats.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Idle,
    Dragging {
        /// Pointer position minus the pan at drag start.
        anchor: Point,
    },
}

/// Outbound notifications for the surrounding booking UI, drained with
/// [`PickerApp::poll_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// Fired whenever the selected set changes, with ids in pick order.
    SelectionChanged(Vec<String>),
    /// True iff exactly the requested quantity of seats is selected.
    QuantitySatisfied(bool),
}

/// Seat picker state machine - owns the seat map, view transform, and
/// selection. Independent of the UI framework and tested in isolation.
pub struct PickerApp {
    section: String,
    map: SeatMap,
    layout: SeatLayout,
    geometry: Geometry,
    occupancy: Box<dyn OccupancyProvider>,
    pub transform: ViewTransform,
    selection: Selection,
    hover: Option<String>,
    pointer: Pointer,
    surface_size: Point,
    events: Vec<PickerEvent>,
    pub status: String,
}

impl PickerApp {
    pub fn new(section: &str, quantity: usize, geometry: Geometry) -> Self {
        Self::with_occupancy(section, quantity, geometry, Box::new(StaticOccupancy))
    }

    /// Construct with an injected occupancy source (e.g. a future
    /// backend-fed one).
    pub fn with_occupancy(
        section: &str,
        quantity: usize,
        geometry: Geometry,
        occupancy: Box<dyn OccupancyProvider>,
    ) -> Self {
        let map = generate_seat_map(section, occupancy.as_ref());
        let layout = compute_geometry(&map, &geometry);
        PickerApp {
            section: section.to_string(),
            map,
            layout,
            geometry,
            occupancy,
            transform: ViewTransform::default(),
            selection: Selection::new(quantity),
            hover: None,
            pointer: Pointer::Idle,
            surface_size: Point::new(800.0, 600.0),
            events: Vec::new(),
            status: String::new(),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.map
    }

    pub fn layout(&self) -> &SeatLayout {
        &self.layout
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hover(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    pub fn surface_size(&self) -> Point {
        self.surface_size
    }

    /// Called by the canvas each frame; pan/zoom are content-local, so a
    /// resize just changes where the center lands.
    pub fn set_surface_size(&mut self, size: Point) {
        if size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0 {
            self.surface_size = size;
        }
    }

    /// Switch the active section. Discards the previous map and resets the
    /// view transform, selection, and hover to defaults.
    pub fn set_section(&mut self, section: &str) {
        if section == self.section {
            return;
        }
        self.section = section.to_string();
        self.map = generate_seat_map(&self.section, self.occupancy.as_ref());
        self.layout = compute_geometry(&self.map, &self.geometry);
        self.reset_interaction();
        self.status = format!(
            "{} - pick {} seat(s)",
            self.section,
            self.selection.quantity()
        );
    }

    /// Change the ticket quantity. Resets the transform and clears the
    /// selection, same as a section change.
    pub fn set_quantity(&mut self, quantity: usize) {
        if quantity.max(1) == self.selection.quantity() {
            return;
        }
        self.selection.set_quantity(quantity);
        self.transform.reset();
        self.hover = None;
        self.pointer = Pointer::Idle;
        self.emit_selection_events();
    }

    fn reset_interaction(&mut self) {
        self.transform.reset();
        self.selection.clear();
        self.hover = None;
        self.pointer = Pointer::Idle;
        self.emit_selection_events();
    }

    pub fn zoom_in(&mut self) {
        self.transform.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.transform.zoom_out();
    }

    /// Restore the default view without touching the selection.
    pub fn reset_view(&mut self) {
        self.transform.reset();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.emit_selection_events();
        self.status = "Selection cleared".to_string();
    }

    /// Freeze the current picks into the status line. The real checkout
    /// hand-off lives outside this demo.
    pub fn confirm(&mut self) {
        if self.selection.satisfied() {
            self.status = format!("✓ Confirmed {}", self.selection.ids().join(", "));
        } else {
            self.status = format!(
                "Pick {} more seat(s) to confirm",
                self.selection.quantity() - self.selection.len()
            );
        }
    }

    // ===== Pointer state machine =====

    pub fn pointer_down(&mut self, pos: Point) {
        if !is_finite(pos) {
            return;
        }
        self.pointer = Pointer::Dragging {
            anchor: pos - self.transform.pan,
        };
        // No hover highlight while dragging.
        self.hover = None;
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if !is_finite(pos) {
            return;
        }
        match self.pointer {
            Pointer::Dragging { anchor } => {
                self.transform.pan = pos - anchor;
            }
            Pointer::Idle => {
                self.hover = self.seat_hit(pos);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.pointer = Pointer::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = Pointer::Idle;
        self.hover = None;
    }

    /// A click toggles the seat under the pointer, subject to the occupancy
    /// and quantity rules. Rejections are silent no-ops.
    pub fn click(&mut self, pos: Point) {
        if !is_finite(pos) || self.pointer != Pointer::Idle {
            return;
        }
        let Some(seat_id) = self.seat_hit(pos) else {
            return;
        };
        let Some(seat) = self.map.seat(&seat_id) else {
            return;
        };
        let seat = seat.clone();
        let outcome = self.selection.toggle(&seat);
        if outcome.changed() {
            let verb = if outcome == Toggle::Added {
                "Selected"
            } else {
                "Removed"
            };
            self.status = format!(
                "{verb} {} ({} of {})",
                seat.id,
                self.selection.len(),
                self.selection.quantity()
            );
            self.emit_selection_events();
        }
    }

    /// Inverse-transform hit test shared by the hover and click paths.
    pub fn seat_hit(&self, surface_pos: Point) -> Option<String> {
        let content = self
            .transform
            .to_content(surface_pos, self.surface_size * 0.5);
        self.layout.seat_at(content).map(str::to_string)
    }

    /// Surface-space draw commands for the current frame.
    pub fn draw(&self) -> Vec<DrawCmd> {
        draw_commands(
            &self.map,
            &self.layout,
            &self.selection,
            self.hover.as_deref(),
            &self.transform,
            self.surface_size,
        )
    }

    /// Drain pending outbound events.
    pub fn poll_events(&mut self) -> Vec<PickerEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit_selection_events(&mut self) {
        self.events
            .push(PickerEvent::SelectionChanged(self.selection.ids().to_vec()));
        self.events
            .push(PickerEvent::QuantitySatisfied(self.selection.satisfied()));
    }
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::ViewTransform;

    fn app(section: &str, quantity: usize) -> PickerApp {
        PickerApp::new(section, quantity, Geometry::default())
    }

    /// Surface position of a seat's center under the app's current view.
    fn seat_pos(app: &PickerApp, id: &str) -> Point {
        let rect = app.layout().rect(id).expect("seat exists");
        app.transform
            .to_surface(rect.center(), app.surface_size() * 0.5)
    }

    #[test]
    fn club_selection_flow_with_quantity_two() {
        let mut app = app("club", 2);

        // A8 is pre-occupied; clicking it is a no-op.
        let a8 = seat_pos(&app, "A8");
        app.click(a8);
        assert!(app.selection().is_empty());
        assert!(app.poll_events().is_empty());

        app.click(seat_pos(&app, "A1"));
        app.click(seat_pos(&app, "B1"));
        assert_eq!(app.selection().ids(), ["A1", "B1"]);

        let events = app.poll_events();
        assert_eq!(
            events,
            vec![
                PickerEvent::SelectionChanged(vec!["A1".into()]),
                PickerEvent::QuantitySatisfied(false),
                PickerEvent::SelectionChanged(vec!["A1".into(), "B1".into()]),
                PickerEvent::QuantitySatisfied(true),
            ]
        );

        // A third pick is rejected silently and the set is unchanged.
        app.click(seat_pos(&app, "C1"));
        assert_eq!(app.selection().ids(), ["A1", "B1"]);
        assert!(app.poll_events().is_empty());
    }

    #[test]
    fn drag_pans_without_toggling_seats() {
        let mut app = app("club", 2);
        let before = app.transform.pan;

        app.pointer_down(Point::new(100.0, 100.0));
        // Drag across a seat on the way; it must not select or hover.
        app.pointer_move(seat_pos(&app, "B7"));
        assert!(app.selection().is_empty());
        assert_eq!(app.hover(), None);

        app.pointer_move(Point::new(150.0, 130.0));
        app.pointer_up();

        assert!((app.transform.pan.x - (before.x + 50.0)).abs() < 1e-3);
        assert!((app.transform.pan.y - (before.y + 30.0)).abs() < 1e-3);
        assert!(app.selection().is_empty());
    }

    #[test]
    fn hover_tracks_seats_while_idle() {
        let mut app = app("club", 2);
        app.pointer_move(seat_pos(&app, "B7"));
        assert_eq!(app.hover(), Some("B7"));

        // Between sections of empty space there is no hover.
        app.pointer_move(Point::new(-10_000.0, -10_000.0));
        assert_eq!(app.hover(), None);

        app.pointer_move(seat_pos(&app, "A8"));
        // Occupied seats still report hover; the renderer draws them
        // occupied regardless.
        assert_eq!(app.hover(), Some("A8"));
        app.pointer_leave();
        assert_eq!(app.hover(), None);
    }

    #[test]
    fn section_switch_resets_view_and_selection() {
        let mut app = app("lower", 2);
        app.click(seat_pos(&app, "A1"));
        app.zoom_in();
        app.transform.pan = Point::new(40.0, -25.0);
        let _ = app.poll_events();

        app.set_section("upper");

        assert_eq!(app.section(), "upper");
        assert_eq!(app.transform, ViewTransform::default());
        assert!(app.selection().is_empty());
        assert_eq!(app.hover(), None);
        // The reset is announced so the summary panel cannot go stale.
        assert_eq!(
            app.poll_events(),
            vec![
                PickerEvent::SelectionChanged(vec![]),
                PickerEvent::QuantitySatisfied(false),
            ]
        );
    }

    #[test]
    fn setting_the_same_section_does_not_reset() {
        let mut app = app("club", 2);
        app.click(seat_pos(&app, "A1"));
        app.set_section("club");
        assert_eq!(app.selection().ids(), ["A1"]);
    }

    #[test]
    fn quantity_change_clears_selection_and_resets_view() {
        let mut app = app("club", 2);
        app.click(seat_pos(&app, "A1"));
        app.zoom_in();

        app.set_quantity(4);

        assert!(app.selection().is_empty());
        assert_eq!(app.selection().quantity(), 4);
        assert_eq!(app.transform, ViewTransform::default());
    }

    #[test]
    fn click_hits_respect_pan_and_zoom() {
        let mut app = app("club", 2);
        app.zoom_in();
        app.transform.pan = Point::new(-60.0, 35.0);
        // seat_pos projects through the live transform, so this exercises
        // the inverse mapping round trip.
        app.click(seat_pos(&app, "C10"));
        assert_eq!(app.selection().ids(), ["C10"]);
    }

    #[test]
    fn confirm_reports_only_when_satisfied() {
        let mut app = app("club", 2);
        app.confirm();
        assert_eq!(app.status, "Pick 2 more seat(s) to confirm");

        app.click(seat_pos(&app, "A1"));
        app.click(seat_pos(&app, "B1"));
        app.confirm();
        assert_eq!(app.status, "✓ Confirmed A1, B1");
    }

    #[test]
    fn malformed_pointer_positions_are_ignored() {
        let mut app = app("club", 2);
        app.pointer_down(Point::new(f32::NAN, 10.0));
        assert_eq!(app.hover(), None);
        app.pointer_move(Point::new(10.0, f32::INFINITY));
        app.click(Point::new(f32::NAN, f32::NAN));
        assert!(app.selection().is_empty());
    }

    #[test]
    fn clear_selection_emits_events_once() {
        let mut app = app("club", 3);
        app.click(seat_pos(&app, "A1"));
        let _ = app.poll_events();

        app.clear_selection();
        assert_eq!(
            app.poll_events(),
            vec![
                PickerEvent::SelectionChanged(vec![]),
                PickerEvent::QuantitySatisfied(false),
            ]
        );

        // Clearing an empty selection is a no-op.
        app.clear_selection();
        assert!(app.poll_events().is_empty());
    }
}
