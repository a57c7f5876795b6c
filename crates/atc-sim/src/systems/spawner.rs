//! Spawner system: introduces new aircraft at random exits and airports.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use atc_core::constants::{ENTRY_ALTITUDE, MAX_PLANES, SPAWN_CLEARANCE};
use atc_core::enums::{Flight, PlaneKind, PlaneStatus};
use atc_core::fleet::Fleet;
use atc_core::geometry::Geometry;
use atc_core::plane::Plane;
use atc_core::types::{Course, Endpoint, PlaneId};

use super::collision::near;

/// Identity allocation state carried between ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    last_plane: Option<PlaneId>,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently assigned identity.
    pub fn last_plane(&self) -> Option<PlaneId> {
        self.last_plane
    }

    /// Claim the first free identity after the last one assigned, wrapping
    /// around the alphabet. `None` when all slots are live.
    pub fn next_plane(&mut self, fleet: &Fleet) -> Option<PlaneId> {
        let start = self.last_plane.map_or(0, |id| id.slot() + 1);
        let id = (0..MAX_PLANES)
            .filter_map(|step| PlaneId::new((start + step) % MAX_PLANES))
            .find(|id| !fleet.contains(*id))?;
        self.last_plane = Some(id);
        Some(id)
    }

    /// Try to introduce one aircraft.
    ///
    /// The destination is drawn first, then up to one origin per endpoint is
    /// tried; an exit origin with airborne traffic nearby is passed over.
    /// Returns the new identity, or `None` if no origin was clear or no
    /// identity was free.
    pub fn add_plane(
        &mut self,
        geometry: &Geometry,
        fleet: &mut Fleet,
        rng: &mut impl Rng,
    ) -> Option<PlaneId> {
        let starts = geometry.endpoint_count();
        if starts < 2 {
            return None;
        }

        let kind = if rng.gen_range(0..2) == 0 {
            PlaneKind::Prop
        } else {
            PlaneKind::Jet
        };
        let target = rng.gen_range(0..starts);
        let destination = geometry.endpoint(target)?;

        let mut origin = None;
        for _ in 0..starts {
            let index = loop {
                let index = rng.gen_range(0..starts);
                if index != target {
                    break index;
                }
            };
            let Some(candidate) = geometry.endpoint(index) else {
                continue;
            };
            if let Endpoint::Exit(n) = candidate {
                let pos = geometry.exits[n].pos;
                let crowded = fleet
                    .airborne()
                    .any(|p| near(p.pos, p.altitude, pos, ENTRY_ALTITUDE, SPAWN_CLEARANCE));
                if crowded {
                    continue;
                }
            }
            origin = Some(candidate);
            break;
        }
        let origin = origin?;

        let id = self.next_plane(fleet)?;
        let plane = launch(geometry, id, kind, origin, destination)?;
        debug!(
            plane = %plane.name(),
            origin = %origin,
            destination = %destination,
            "new plane"
        );
        fleet.insert(plane);
        Some(id)
    }
}

/// Roll for a new aircraft: on average one attempt every `new_plane_time`
/// ticks.
pub fn run(geometry: &Geometry, fleet: &mut Fleet, spawner: &mut Spawner, rng: &mut impl Rng) {
    if rng.gen_range(0..geometry.new_plane_time.max(1)) == 0 {
        spawner.add_plane(geometry, fleet, rng);
    }
}

/// A fresh aircraft standing at `origin`.
///
/// Exit arrivals are airborne at the entry altitude, heading into the
/// arena. Airport departures wait on the ground facing the runway heading.
fn launch(
    geometry: &Geometry,
    id: PlaneId,
    kind: PlaneKind,
    origin: Endpoint,
    destination: Endpoint,
) -> Option<Plane> {
    let (pos, dir, altitude, flight) = match origin {
        Endpoint::Exit(n) => {
            let exit = geometry.exits.get(n)?;
            (exit.pos, exit.entry_heading(), ENTRY_ALTITUDE, Flight::Airborne)
        }
        Endpoint::Airport(n) => {
            let airport = geometry.airports.get(n)?;
            (airport.pos, airport.dir, 0, Flight::Grounded)
        }
    };

    Some(Plane {
        id,
        kind,
        status: PlaneStatus::Marked,
        flight,
        origin,
        destination,
        altitude,
        target_altitude: altitude,
        dir,
        course: Course::Heading(dir),
        fuel: geometry.initial_fuel(),
        pos,
        delay: None,
    })
}
