//! Level geometry: arena bounds, timing parameters, and map features.
//!
//! Created once when a level is loaded and never mutated afterwards.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::PlaceKind;
use crate::octant;
use crate::types::Endpoint;

/// Navigation waypoint. Only used as a trigger for delayed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beacon {
    pub pos: IVec2,
}

/// Boundary crossing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub pos: IVec2,
    /// Outward heading for leaving the arena here.
    pub dir: u8,
}

impl Exit {
    /// Heading of an aircraft entering the arena through this exit.
    pub fn entry_heading(&self) -> u8 {
        octant::rotate(self.dir, 4)
    }
}

/// Interior runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub pos: IVec2,
    /// Heading for both landing and takeoff.
    pub dir: u8,
}

/// Cosmetic reference segment. Horizontal, vertical, or exactly diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub from: IVec2,
    pub to: IVec2,
}

/// A fully validated level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: i32,
    pub height: i32,
    /// Seconds between ticks. Pacing is left to the driver.
    pub update_secs: u32,
    /// Average number of ticks between new aircraft.
    pub new_plane_time: u32,
    pub beacons: Vec<Beacon>,
    pub exits: Vec<Exit>,
    pub airports: Vec<Airport>,
    pub lines: Vec<Line>,
}

impl Geometry {
    /// Whether `pos` lies strictly inside the arena boundary.
    pub fn is_interior(&self, pos: IVec2) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    /// Whether `pos` lies anywhere on the arena grid, boundary included.
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Whether `pos` lies exactly on the arena boundary.
    pub fn is_on_boundary(&self, pos: IVec2) -> bool {
        pos.x == 0 || pos.x == self.width - 1 || pos.y == 0 || pos.y == self.height - 1
    }

    /// Index of the exit at `pos`, if any.
    pub fn exit_at(&self, pos: IVec2) -> Option<usize> {
        self.exits.iter().position(|e| e.pos == pos)
    }

    /// Index of the airport at `pos`, if any.
    pub fn airport_at(&self, pos: IVec2) -> Option<usize> {
        self.airports.iter().position(|a| a.pos == pos)
    }

    /// Number of features of one kind.
    pub fn count(&self, kind: PlaceKind) -> usize {
        match kind {
            PlaceKind::Beacon => self.beacons.len(),
            PlaceKind::Exit => self.exits.len(),
            PlaceKind::Airport => self.airports.len(),
        }
    }

    /// Position of the `index`th feature of `kind`.
    pub fn place(&self, kind: PlaceKind, index: usize) -> Option<IVec2> {
        match kind {
            PlaceKind::Beacon => self.beacons.get(index).map(|b| b.pos),
            PlaceKind::Exit => self.exits.get(index).map(|e| e.pos),
            PlaceKind::Airport => self.airports.get(index).map(|a| a.pos),
        }
    }

    /// Number of exits and airports combined.
    pub fn endpoint_count(&self) -> usize {
        self.exits.len() + self.airports.len()
    }

    /// Endpoint for a combined index: exits first, then airports.
    pub fn endpoint(&self, index: usize) -> Option<Endpoint> {
        if index < self.exits.len() {
            Some(Endpoint::Exit(index))
        } else if index < self.endpoint_count() {
            Some(Endpoint::Airport(index - self.exits.len()))
        } else {
            None
        }
    }

    /// Fuel a new aircraft starts with.
    pub fn initial_fuel(&self) -> i32 {
        self.width.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Geometry {
        Geometry {
            width: 10,
            height: 8,
            update_secs: 5,
            new_plane_time: 5,
            beacons: vec![Beacon { pos: IVec2::new(3, 3) }],
            exits: vec![Exit { pos: IVec2::new(9, 4), dir: 2 }],
            airports: vec![Airport { pos: IVec2::new(5, 5), dir: 0 }],
            lines: vec![],
        }
    }

    #[test]
    fn test_interior_excludes_boundary() {
        let g = sample();
        assert!(g.is_interior(IVec2::new(1, 1)));
        assert!(g.is_interior(IVec2::new(8, 6)));
        assert!(!g.is_interior(IVec2::new(9, 4)));
        assert!(!g.is_interior(IVec2::new(4, 0)));
        assert!(g.is_on_boundary(IVec2::new(9, 4)));
        assert!(g.contains(IVec2::new(9, 7)));
        assert!(!g.contains(IVec2::new(10, 7)));
    }

    #[test]
    fn test_endpoint_indexing_puts_exits_first() {
        let g = sample();
        assert_eq!(g.endpoint_count(), 2);
        assert_eq!(g.endpoint(0), Some(Endpoint::Exit(0)));
        assert_eq!(g.endpoint(1), Some(Endpoint::Airport(0)));
        assert_eq!(g.endpoint(2), None);
    }

    #[test]
    fn test_initial_fuel_saturates() {
        let mut g = sample();
        assert_eq!(g.initial_fuel(), 18);
        g.width = i32::MAX;
        assert_eq!(g.initial_fuel(), i32::MAX);
    }

    #[test]
    fn test_exit_entry_heading_is_reversed() {
        let g = sample();
        assert_eq!(g.exits[0].entry_heading(), 6);
        assert_eq!(g.exit_at(IVec2::new(9, 4)), Some(0));
        assert_eq!(g.airport_at(IVec2::new(9, 4)), None);
    }
}
