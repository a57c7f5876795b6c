//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Aircraft type. Governs movement rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneKind {
    /// Moves every other tick. Named with an uppercase letter.
    #[default]
    Prop,
    /// Moves every tick. Named with a lowercase letter.
    Jet,
}

/// Display and bookkeeping status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneStatus {
    #[default]
    Marked,
    Unmarked,
    Ignored,
    /// Reached its destination; removed at the end of the tick.
    Gone,
}

/// Which partition of the fleet an aircraft belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flight {
    #[default]
    Airborne,
    /// Holding at its origin airport, waiting for a takeoff clearance.
    Grounded,
}

/// Category of a numbered map feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    Beacon,
    Exit,
    Airport,
}

impl PlaceKind {
    /// Lowercase noun, as used in player-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            PlaceKind::Beacon => "beacon",
            PlaceKind::Exit => "exit",
            PlaceKind::Airport => "airport",
        }
    }

    /// Single-letter prefix for compact labels (`B0`, `E3`, `A1`).
    pub fn letter(self) -> char {
        match self {
            PlaceKind::Beacon => 'B',
            PlaceKind::Exit => 'E',
            PlaceKind::Airport => 'A',
        }
    }
}
