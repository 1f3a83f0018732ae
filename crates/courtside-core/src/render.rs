//! Pure render pipeline: picker state in, surface-space draw commands out.
//!
//! Keeping this a pure function of the state tuple (map, layout, selection,
//! hover, transform, surface size) keeps the pipeline testable independent
//! of the hosting UI framework; the GUI painter is a dumb executor.

use crate::geometry::{Point, Rect, SeatLayout};
use crate::seatmap::{Seat, SeatMap};
use crate::selection::Selection;
use crate::transform::ViewTransform;

/// Horizontal clearance between the content edge and a row label, in
/// content-local units.
const ROW_LABEL_MARGIN: f32 = 16.0;
/// Vertical clearance between the content bottom and the court marker.
const COURT_MARGIN: f32 = 30.0;

/// Visual style for a seat, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStyle {
    Selected,
    Occupied,
    Hovered,
    Available,
}

/// One drawing primitive, already in surface space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Seat { rect: Rect, style: SeatStyle },
    RowLabel { text: String, at: Point },
    /// Decorative court marker below the seats. Not interactive.
    CourtLabel { text: String, at: Point },
}

/// Pick the style for one seat. A seat can be both occupied and under the
/// cursor; occupied wins visually and is never selectable.
pub fn seat_style(seat: &Seat, selection: &Selection, hover: Option<&str>) -> SeatStyle {
    if selection.contains(&seat.id) {
        SeatStyle::Selected
    } else if seat.occupied {
        SeatStyle::Occupied
    } else if hover == Some(seat.id.as_str()) {
        SeatStyle::Hovered
    } else {
        SeatStyle::Available
    }
}

/// Build the full command list for one frame.
pub fn draw_commands(
    map: &SeatMap,
    layout: &SeatLayout,
    selection: &Selection,
    hover: Option<&str>,
    transform: &ViewTransform,
    surface_size: Point,
) -> Vec<DrawCmd> {
    let center = surface_size * 0.5;
    let project = |p: Point| transform.to_surface(p, center);

    let mut cmds = Vec::with_capacity(map.seat_count() + map.rows.len() * 2 + 1);

    for seat in map.iter_seats() {
        let Some(rect) = layout.rect(&seat.id) else {
            continue;
        };
        let min = project(Point::new(rect.x, rect.y));
        cmds.push(DrawCmd::Seat {
            rect: Rect::new(min.x, min.y, rect.w * transform.zoom, rect.h * transform.zoom),
            style: seat_style(seat, selection, hover),
        });
    }

    let bounds = layout.content_bounds;
    for (label, y) in layout.row_centers() {
        let text = label.to_string();
        cmds.push(DrawCmd::RowLabel {
            text: text.clone(),
            at: project(Point::new(bounds.x - ROW_LABEL_MARGIN, *y)),
        });
        cmds.push(DrawCmd::RowLabel {
            text,
            at: project(Point::new(bounds.right() + ROW_LABEL_MARGIN, *y)),
        });
    }

    cmds.push(DrawCmd::CourtLabel {
        text: "COURT".to_string(),
        at: project(Point::new(0.0, bounds.bottom() + COURT_MARGIN)),
    });

    cmds
}
