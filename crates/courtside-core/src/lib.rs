//! courtside-core - UI-agnostic seat map model.
//!
//! Sections, seat map generation, pixel geometry, view transform,
//! selection, and the pure render command pipeline. No UI framework
//! dependencies; everything here is testable headless.

pub mod geometry;
pub mod render;
pub mod seatmap;
pub mod section;
pub mod selection;
pub mod transform;

pub use geometry::{Geometry, Point, Rect, SeatLayout, compute_geometry};
pub use render::{DrawCmd, SeatStyle, draw_commands, seat_style};
pub use seatmap::{Row, Seat, SeatMap, generate_seat_map};
pub use section::{OccupancyProvider, SectionId, StaticOccupancy};
pub use selection::{Selection, Toggle};
pub use transform::{ViewTransform, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
