//! Pixel geometry: seat rectangles and content bounds for a seat map.
//!
//! All output coordinates are layout-local, centered on the content's own
//! origin; placing the content on screen is the view transform's job.

use std::collections::HashMap;
use std::ops::{Add, Mul, Sub};

use serde::Deserialize;

use crate::seatmap::SeatMap;

/// 2D point/vector in either content-local or surface space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle (min corner + size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Layout constants. Overridable from the user config file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Side length of a square seat.
    pub seat_size: f32,
    /// Gap between adjacent seats in a row.
    pub seat_gap: f32,
    /// Extra gap inserted once per row at the row midpoint.
    pub aisle_gap: f32,
    /// Vertical gap between rows.
    pub row_gap: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            seat_size: 18.0,
            seat_gap: 4.0,
            aisle_gap: 26.0,
            row_gap: 10.0,
        }
    }
}

/// Computed pixel layout for one seat map.
#[derive(Debug, Clone)]
pub struct SeatLayout {
    seat_rects: HashMap<String, Rect>,
    /// Bounding box of all seats, centered on the content origin.
    pub content_bounds: Rect,
    row_centers: Vec<(char, f32)>,
}

impl SeatLayout {
    pub fn rect(&self, seat_id: &str) -> Option<Rect> {
        self.seat_rects.get(seat_id).copied()
    }

    /// Row labels with their vertical centers, top to bottom.
    pub fn row_centers(&self) -> &[(char, f32)] {
        &self.row_centers
    }

    /// Hit test a content-local point against the seat rectangles.
    ///
    /// Linear scan; rects never overlap by construction, so the first match
    /// is the only match.
    pub fn seat_at(&self, p: Point) -> Option<&str> {
        self.seat_rects
            .iter()
            .find(|(_, rect)| rect.contains(p))
            .map(|(id, _)| id.as_str())
    }
}

/// Lay out every seat of `map` in content-local pixels.
///
/// Seats before the row midpoint run left to right from a shared left
/// origin; seats at or after it carry the aisle offset. Rows of different
/// lengths share the same horizontal span (set by the widest row), so
/// columns are not strictly aligned across rows, as in a real stadium.
pub fn compute_geometry(map: &SeatMap, g: &Geometry) -> SeatLayout {
    let pitch = g.seat_size + g.seat_gap;
    let row_pitch = g.seat_size + g.row_gap;

    let max_seats = map.max_seats_in_row();
    let total_w = if max_seats == 0 {
        0.0
    } else {
        max_seats as f32 * pitch - g.seat_gap + g.aisle_gap
    };
    let total_h = if map.rows.is_empty() {
        0.0
    } else {
        map.rows.len() as f32 * row_pitch - g.row_gap
    };

    // Shift so the content is centered on its own origin.
    let origin = Point::new(-total_w / 2.0, -total_h / 2.0);

    let mut seat_rects = HashMap::with_capacity(map.seat_count());
    let mut row_centers = Vec::with_capacity(map.rows.len());

    for (ri, row) in map.rows.iter().enumerate() {
        let y = origin.y + ri as f32 * row_pitch;
        row_centers.push((row.label, y + g.seat_size / 2.0));

        let midpoint = row.seats.len() / 2;
        for (si, seat) in row.seats.iter().enumerate() {
            let mut x = origin.x + si as f32 * pitch;
            if si >= midpoint {
                x += g.aisle_gap;
            }
            seat_rects.insert(seat.id.clone(), Rect::new(x, y, g.seat_size, g.seat_size));
        }
    }

    SeatLayout {
        seat_rects,
        content_bounds: Rect::new(origin.x, origin.y, total_w, total_h),
        row_centers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seatmap::generate_seat_map;
    use crate::section::StaticOccupancy;

    fn club_layout() -> (crate::seatmap::SeatMap, SeatLayout) {
        let map = generate_seat_map("club", &StaticOccupancy);
        let layout = compute_geometry(&map, &Geometry::default());
        (map, layout)
    }

    #[test]
    fn content_bounds_are_centered_on_origin() {
        let (_, layout) = club_layout();
        let c = layout.content_bounds.center();
        assert!(c.x.abs() < 1e-3 && c.y.abs() < 1e-3, "center was {c:?}");
    }

    #[test]
    fn aisle_gap_splits_each_row_at_its_midpoint() {
        let g = Geometry::default();
        let (_, layout) = club_layout();
        // Club rows have 24 seats; the aisle sits between seat 12 and 13.
        let left = layout.rect("A12").unwrap();
        let right = layout.rect("A13").unwrap();
        let gap = right.x - left.right();
        assert!((gap - (g.seat_gap + g.aisle_gap)).abs() < 1e-3);

        // Regular neighbors only get the seat gap.
        let a1 = layout.rect("A1").unwrap();
        let a2 = layout.rect("A2").unwrap();
        assert!(((a2.x - a1.right()) - g.seat_gap).abs() < 1e-3);
    }

    #[test]
    fn seat_rects_never_overlap() {
        let (map, layout) = club_layout();
        let rects: Vec<Rect> = map
            .iter_seats()
            .map(|s| layout.rect(&s.id).unwrap())
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b), "overlapping rects {a:?} and {b:?}");
            }
        }
    }

    #[test]
    fn all_rows_share_the_horizontal_span_of_the_widest() {
        let map = generate_seat_map("upper", &StaticOccupancy);
        let layout = compute_geometry(&map, &Geometry::default());
        let first = layout.rect("A1").unwrap();
        let last = layout.rect("A28").unwrap();
        assert!((first.x - layout.content_bounds.x).abs() < 1e-3);
        assert!((last.right() - layout.content_bounds.right()).abs() < 1e-3);
    }

    #[test]
    fn hit_test_finds_the_seat_under_a_point_and_misses_gaps() {
        let (_, layout) = club_layout();
        let target = layout.rect("B7").unwrap();
        assert_eq!(layout.seat_at(target.center()), Some("B7"));

        // A point far outside the bounds hits nothing.
        let outside = Point::new(
            layout.content_bounds.right() + 50.0,
            layout.content_bounds.bottom() + 50.0,
        );
        assert_eq!(layout.seat_at(outside), None);
    }

    #[test]
    fn row_centers_match_row_order() {
        let (map, layout) = club_layout();
        let labels: Vec<char> = layout.row_centers().iter().map(|(l, _)| *l).collect();
        let expected: Vec<char> = map.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, expected);
        // Centers increase downward.
        let ys: Vec<f32> = layout.row_centers().iter().map(|(_, y)| *y).collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_map_still_lays_out() {
        let map = generate_seat_map("nope", &StaticOccupancy);
        let layout = compute_geometry(&map, &Geometry::default());
        assert!(layout.rect("A1").is_some());
        assert!(layout.content_bounds.w > 0.0);
    }
}
