//! View transform: pan/zoom mapping between content-local and surface space.
//!
//! The forward map and its inverse are the single source of truth shared by
//! drawing and hit-testing; they must never drift apart.

use crate::geometry::Point;

/// Minimum zoom level.
pub const ZOOM_MIN: f32 = 0.5;
/// Maximum zoom level.
pub const ZOOM_MAX: f32 = 2.5;
/// Zoom change per step.
pub const ZOOM_STEP: f32 = 0.2;
/// Starting zoom; slightly out so a whole section fits comfortably.
pub const ZOOM_DEFAULT: f32 = 0.8;

/// Pan/zoom state. Mutated only by user gestures; reset when the section
/// or ticket quantity changes. Expressed in content-local units, so it is
/// resolution independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Always within `[ZOOM_MIN, ZOOM_MAX]`.
    pub zoom: f32,
    /// Surface-space offset added after centering.
    pub pan: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform {
            zoom: ZOOM_DEFAULT,
            pan: Point::ZERO,
        }
    }
}

impl ViewTransform {
    /// Forward map: translate to the surface center, add pan, scale by zoom.
    pub fn to_surface(&self, content: Point, surface_center: Point) -> Point {
        surface_center + self.pan + content * self.zoom
    }

    /// Exact inverse of [`ViewTransform::to_surface`].
    pub fn to_content(&self, surface: Point, surface_center: Point) -> Point {
        (surface - surface_center - self.pan) * (1.0 / self.zoom)
    }

    /// Step the zoom in, clamped. Pan is deliberately untouched: zoom is
    /// anchored on the fixed visual center, not the cursor.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Step the zoom out, clamped.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn reset(&mut self) {
        *self = ViewTransform::default();
    }

    /// Zoom level as a percentage string for the status chrome.
    pub fn zoom_percent(&self) -> String {
        format!("{:.0}%", self.zoom * 100.0)
    }
}
