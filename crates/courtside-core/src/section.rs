//! Venue section catalog and seat occupancy sources.

use std::fmt;

/// The fixed set of section categories the demo venue knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Lower,
    Club,
    Upper,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Lower, SectionId::Club, SectionId::Upper];

    /// Parse a section identifier string. Unknown strings yield `None`;
    /// callers that need a total function use [`crate::generate_seat_map`],
    /// which degrades unknown ids to a single-seat map.
    pub fn parse(s: &str) -> Option<SectionId> {
        match s.to_ascii_lowercase().as_str() {
            "lower" => Some(SectionId::Lower),
            "club" => Some(SectionId::Club),
            "upper" => Some(SectionId::Upper),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Lower => "lower",
            SectionId::Club => "club",
            SectionId::Upper => "upper",
        }
    }

    /// Human-facing name for the section picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionId::Lower => "Lower Bowl",
            SectionId::Club => "Club Level",
            SectionId::Upper => "Upper Deck",
        }
    }

    /// Price tier shown next to the section name. Display only.
    pub fn price_tier(&self) -> &'static str {
        match self {
            SectionId::Lower => "$$$",
            SectionId::Club => "$$$$",
            SectionId::Upper => "$$",
        }
    }

    /// Number of rows; rows are labeled 'A', 'B', ... top to bottom.
    pub(crate) fn row_count(&self) -> usize {
        match self {
            SectionId::Lower => 6,
            SectionId::Club => 3,
            SectionId::Upper => 8,
        }
    }

    pub(crate) fn seats_per_row(&self) -> usize {
        match self {
            SectionId::Lower => 20,
            SectionId::Club => 24,
            SectionId::Upper => 28,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of seat occupancy for a section.
///
/// The demo ships a hard-coded [`StaticOccupancy`]; a real deployment would
/// implement this against a booking backend and hand it to the picker.
pub trait OccupancyProvider {
    /// Whether the seat with this id is already taken in the given section.
    fn is_occupied(&self, section: SectionId, seat_id: &str) -> bool;
}

/// Deterministic occupancy: a fixed list of taken seats per section.
/// The same section always yields the same pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticOccupancy;

impl StaticOccupancy {
    fn taken(section: SectionId) -> &'static [&'static str] {
        match section {
            SectionId::Lower => &[
                "A4", "A5", "B11", "B12", "B13", "C7", "D1", "D2", "D19", "E9", "E10", "F14",
                "F15", "F16",
            ],
            SectionId::Club => &["A8", "B12", "B13", "C3"],
            SectionId::Upper => &[
                "A3", "B20", "B21", "C5", "C6", "D14", "E27", "E28", "F9", "G17", "G18", "H1",
                "H2", "H22",
            ],
        }
    }
}

impl OccupancyProvider for StaticOccupancy {
    fn is_occupied(&self, section: SectionId, seat_id: &str) -> bool {
        Self::taken(section).contains(&seat_id)
    }
}
