//! The fleet: every live aircraft in one arena keyed by identity.
//!
//! Arena order is significant. The simulation updates airborne aircraft
//! and checks collisions in this order, and a takeoff moves the aircraft
//! to the back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::enums::Flight;
use crate::plane::Plane;
use crate::types::PlaneId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    planes: IndexMap<PlaneId, Plane>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn contains(&self, id: PlaneId) -> bool {
        self.planes.contains_key(&id)
    }

    pub fn get(&self, id: PlaneId) -> Option<&Plane> {
        self.planes.get(&id)
    }

    pub fn get_mut(&mut self, id: PlaneId) -> Option<&mut Plane> {
        self.planes.get_mut(&id)
    }

    /// Add an aircraft at the back of the arena, replacing any aircraft
    /// with the same identity.
    pub fn insert(&mut self, plane: Plane) {
        self.planes.shift_remove(&plane.id);
        self.planes.insert(plane.id, plane);
    }

    /// Remove an aircraft, keeping the order of the rest.
    pub fn remove(&mut self, id: PlaneId) -> Option<Plane> {
        self.planes.shift_remove(&id)
    }

    /// Keep only the aircraft matching `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Plane) -> bool) {
        self.planes.retain(|_, plane| keep(plane));
    }

    /// All aircraft in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &Plane> {
        self.planes.values()
    }

    pub fn airborne(&self) -> impl Iterator<Item = &Plane> {
        self.iter().filter(|p| p.flight == Flight::Airborne)
    }

    pub fn grounded(&self) -> impl Iterator<Item = &Plane> {
        self.iter().filter(|p| p.flight == Flight::Grounded)
    }

    /// Identities of airborne aircraft, in arena order.
    pub fn airborne_ids(&self) -> Vec<PlaneId> {
        self.airborne().map(|p| p.id).collect()
    }

    /// Move a grounded aircraft into the air, at the back of the arena.
    pub fn take_off(&mut self, id: PlaneId) {
        if let Some(mut plane) = self.planes.shift_remove(&id) {
            plane.flight = Flight::Airborne;
            self.planes.insert(id, plane);
        }
    }

    /// Write a command's edited copy back into the live aircraft.
    ///
    /// Exactly one kind of change is taken, in priority order: course
    /// (with its delay), target altitude, then status. Returns `false` if
    /// the aircraft is no longer live.
    pub fn merge_command(&mut self, edited: &Plane) -> bool {
        let Some(live) = self.planes.get_mut(&edited.id) else {
            return false;
        };
        if edited.course != live.course || edited.delay != live.delay {
            live.course = edited.course;
            live.delay = edited.delay;
        } else if edited.target_altitude != live.target_altitude {
            live.target_altitude = edited.target_altitude;
        } else if edited.status != live.status {
            live.status = edited.status;
        }
        true
    }
}
