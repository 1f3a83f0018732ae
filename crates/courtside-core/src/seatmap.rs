//! Seat map generation: rows of seats for one venue section.

use crate::section::{OccupancyProvider, SectionId};

/// One seat in a section. Immutable once generated; user interaction never
/// mutates occupancy, only the selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Stable identity derived from row label and seat number, e.g. `"A5"`.
    pub id: String,
    /// Row label.
    pub row: char,
    /// 1-based position within the row.
    pub number: u32,
    /// Fixed at generation time from the occupancy source.
    pub occupied: bool,
}

/// Ordered sequence of seats sharing one row label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: char,
    pub seats: Vec<Seat>,
}

/// Ordered rows (top to bottom as drawn) for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    pub rows: Vec<Row>,
}

impl SeatMap {
    fn for_section(section: SectionId, occupancy: &dyn OccupancyProvider) -> Self {
        let per_row = section.seats_per_row();
        let rows = (0..section.row_count())
            .map(|ri| {
                let label = (b'A' + ri as u8) as char;
                let seats = (1..=per_row as u32)
                    .map(|number| {
                        let id = format!("{label}{number}");
                        let occupied = occupancy.is_occupied(section, &id);
                        Seat {
                            id,
                            row: label,
                            number,
                            occupied,
                        }
                    })
                    .collect();
                Row { label, seats }
            })
            .collect();
        SeatMap { rows }
    }

    /// Defensive default for unknown section ids: a single free seat, so the
    /// renderer always has something displayable.
    fn fallback() -> Self {
        SeatMap {
            rows: vec![Row {
                label: 'A',
                seats: vec![Seat {
                    id: "A1".to_string(),
                    row: 'A',
                    number: 1,
                    occupied: false,
                }],
            }],
        }
    }

    /// Widest row in the map; determines the shared horizontal span.
    pub fn max_seats_in_row(&self) -> usize {
        self.rows.iter().map(|r| r.seats.len()).max().unwrap_or(0)
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.iter_seats().find(|s| s.id == id)
    }

    pub fn iter_seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|r| r.seats.iter())
    }

    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.seats.len()).sum()
    }
}

/// Generate the seat map for a section identifier string.
///
/// Total over all inputs: known ids produce the full section, anything else
/// degrades to a degenerate single-seat map rather than an error.
/// Deterministic for a given occupancy source.
pub fn generate_seat_map(section: &str, occupancy: &dyn OccupancyProvider) -> SeatMap {
    match SectionId::parse(section) {
        Some(id) => SeatMap::for_section(id, occupancy),
        None => SeatMap::fallback(),
    }
}
