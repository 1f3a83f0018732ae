//! Bounded, ordered seat selection.

use crate::seatmap::Seat;

/// Outcome of a toggle attempt. Rejections are normal user interaction,
/// not errors, and leave the selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Selection already holds `quantity` seats.
    RejectedFull,
    /// Occupied seats can never enter the selection.
    RejectedOccupied,
}

impl Toggle {
    /// Whether the selection changed.
    pub fn changed(&self) -> bool {
        matches!(self, Toggle::Added | Toggle::Removed)
    }
}

/// Seat ids in selection order, bounded by the ticket quantity.
///
/// Invariant: `len() <= quantity()` at all times.
#[derive(Debug, Clone)]
pub struct Selection {
    ids: Vec<String>,
    quantity: usize,
}

impl Selection {
    /// `quantity` is clamped to at least 1.
    pub fn new(quantity: usize) -> Self {
        Selection {
            ids: Vec::new(),
            quantity: quantity.max(1),
        }
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Change the ticket quantity. Clears the selection, matching the reset
    /// semantics of the booking flow.
    pub fn set_quantity(&mut self, quantity: usize) {
        self.quantity = quantity.max(1);
        self.ids.clear();
    }

    /// Selected ids in the order they were picked.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.ids.iter().any(|id| id == seat_id)
    }

    /// True iff exactly `quantity` seats are selected.
    pub fn satisfied(&self) -> bool {
        self.ids.len() == self.quantity
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Toggle a seat's membership, subject to the occupancy and quantity
    /// rules.
    pub fn toggle(&mut self, seat: &Seat) -> Toggle {
        if seat.occupied {
            return Toggle::RejectedOccupied;
        }
        if let Some(pos) = self.ids.iter().position(|id| *id == seat.id) {
            self.ids.remove(pos);
            return Toggle::Removed;
        }
        if self.ids.len() >= self.quantity {
            return Toggle::RejectedFull;
        }
        self.ids.push(seat.id.clone());
        Toggle::Added
    }
}
