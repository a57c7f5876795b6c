//! The aircraft record.
//!
//! Plain data. Motion and rule checks live in the simulation systems;
//! command validation lives in the command interpreter.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Flight, PlaneKind, PlaneStatus};
use crate::types::{Course, Endpoint, PlaneId};

/// One live aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    pub id: PlaneId,
    pub kind: PlaneKind,
    pub status: PlaneStatus,
    pub flight: Flight,
    pub origin: Endpoint,
    pub destination: Endpoint,
    /// Thousands of feet.
    pub altitude: i32,
    /// Altitude being converged on, one unit per movement step.
    pub target_altitude: i32,
    /// Current heading octant.
    pub dir: u8,
    /// Heading being converged on, at most two octants per movement step.
    pub course: Course,
    /// Decremented once per movement step. Negative means out of fuel.
    pub fuel: i32,
    pub pos: IVec2,
    /// Beacon the aircraft must reach before turning toward `course`.
    pub delay: Option<usize>,
}

impl Plane {
    /// Presentation letter.
    pub fn name(&self) -> char {
        self.id.name(self.kind)
    }

    pub fn is_grounded(&self) -> bool {
        self.flight == Flight::Grounded
    }
}
