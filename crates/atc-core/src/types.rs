//! Fundamental identity and navigation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_PLANES;
use crate::enums::{PlaceKind, PlaneKind};
use crate::octant;

/// Aircraft identity: a letter slot in `0..26`.
///
/// Unique among live aircraft; reused once its aircraft is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaneId(u8);

impl PlaneId {
    /// Identity for a slot, if it is in range.
    pub fn new(slot: u8) -> Option<Self> {
        (slot < MAX_PLANES).then_some(Self(slot))
    }

    /// Identity selected by a letter key, case-insensitively.
    pub fn from_letter(letter: char) -> Option<Self> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        Self::new(letter.to_ascii_lowercase() as u8 - b'a')
    }

    pub fn slot(self) -> u8 {
        self.0
    }

    /// Presentation name: uppercase for props, lowercase for jets.
    pub fn name(self, kind: PlaneKind) -> char {
        let base = match kind {
            PlaneKind::Prop => b'A',
            PlaneKind::Jet => b'a',
        };
        char::from(base + self.0)
    }
}

/// Target heading an aircraft is turning toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Course {
    /// Converge on this octant by the shortest way round.
    Heading(u8),
    /// Keep turning clockwise without settling.
    Circling,
}

impl Course {
    pub fn heading(self) -> Option<u8> {
        match self {
            Course::Heading(dir) => Some(dir),
            Course::Circling => None,
        }
    }

    /// Human-readable form: `90°` or `circling`.
    pub fn describe(self) -> String {
        match self {
            Course::Heading(dir) => format!("{}°", octant::degrees(dir)),
            Course::Circling => "circling".to_string(),
        }
    }
}

/// An exit or airport by index: where an aircraft came from or is bound for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Exit(usize),
    Airport(usize),
}

impl Endpoint {
    pub fn kind(self) -> PlaceKind {
        match self {
            Endpoint::Exit(_) => PlaceKind::Exit,
            Endpoint::Airport(_) => PlaceKind::Airport,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Endpoint::Exit(n) | Endpoint::Airport(n) => n,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind().letter(), self.index())
    }
}
