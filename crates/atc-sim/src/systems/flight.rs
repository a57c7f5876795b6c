//! Flight system: one movement step per airborne aircraft, followed by the
//! destination and rule checks that can end the round.

use atc_core::constants::{CEILING, MAX_TURN_PER_TICK, OCTANTS};
use atc_core::enums::{PlaneKind, PlaneStatus};
use atc_core::events::{Loss, LossReason};
use atc_core::fleet::Fleet;
use atc_core::geometry::Geometry;
use atc_core::octant;
use atc_core::plane::Plane;
use atc_core::types::{Course, Endpoint};

/// Step every airborne aircraft in arena order.
///
/// Props sit out ticks with an odd `clock`. The first violation ends the
/// pass; aircraft after it in the arena are not moved.
pub fn run(geometry: &Geometry, fleet: &mut Fleet, clock: u64) -> Result<(), Loss> {
    for id in fleet.airborne_ids() {
        let Some(plane) = fleet.get_mut(id) else {
            continue;
        };
        if plane.kind == PlaneKind::Prop && !clock.is_multiple_of(2) {
            continue;
        }
        if let Err(reason) = step(geometry, plane) {
            return Err(Loss {
                plane: id,
                name: plane.name(),
                reason,
                clock,
            });
        }
    }
    Ok(())
}

/// Advance one aircraft by one grid cell and check where it ended up.
///
/// An aircraft that reaches its destination correctly is marked
/// [`PlaneStatus::Gone`] and skips the remaining checks.
pub fn step(geometry: &Geometry, plane: &mut Plane) -> Result<(), LossReason> {
    plane.fuel -= 1;
    if plane.fuel < 0 {
        return Err(LossReason::OutOfFuel);
    }

    plane.altitude += (plane.target_altitude - plane.altitude).signum();

    if plane.delay.is_none() {
        plane.dir = turn_step(plane.dir, plane.course);
    }

    plane.pos += octant::displacement(plane.dir);

    if let Some(beacon) = plane.delay {
        if geometry.beacons.get(beacon).is_some_and(|b| b.pos == plane.pos) {
            plane.delay = None;
            if plane.status == PlaneStatus::Unmarked {
                plane.status = PlaneStatus::Marked;
            }
        }
    }

    if arrived(geometry, plane)? {
        plane.status = PlaneStatus::Gone;
        return Ok(());
    }

    if plane.altitude > CEILING {
        return Err(LossReason::ExceededCeiling);
    }

    if plane.altitude <= 0 {
        return Err(match (geometry.airport_at(plane.pos), plane.destination) {
            (None, _) => LossReason::CrashedOnGround,
            (Some(_), Endpoint::Airport(_)) => LossReason::LandedWrongAirport,
            (Some(_), Endpoint::Exit(_)) => LossReason::LandedInsteadOfExiting,
        });
    }

    if !geometry.is_interior(plane.pos) {
        return Err(match (geometry.exit_at(plane.pos), plane.destination) {
            (None, _) => LossReason::LeftArena,
            (Some(_), Endpoint::Exit(_)) => LossReason::ExitedWrongExit,
            (Some(_), Endpoint::Airport(_)) => LossReason::ExitedInsteadOfLanding,
        });
    }

    Ok(())
}

/// Whether the aircraft has just reached its own destination correctly.
fn arrived(geometry: &Geometry, plane: &Plane) -> Result<bool, LossReason> {
    match plane.destination {
        Endpoint::Airport(n) => match geometry.airports.get(n) {
            Some(airport) if airport.pos == plane.pos && plane.altitude == 0 => {
                if plane.dir != airport.dir {
                    return Err(LossReason::LandedWrongDirection);
                }
                Ok(true)
            }
            _ => Ok(false),
        },
        Endpoint::Exit(n) => match geometry.exits.get(n) {
            Some(exit) if exit.pos == plane.pos => {
                if plane.altitude != CEILING {
                    return Err(LossReason::ExitedWrongAltitude);
                }
                Ok(true)
            }
            _ => Ok(false),
        },
    }
}

/// Heading after one turn step toward `course`.
///
/// A concrete heading is approached the short way round. Circling feeds the
/// raw difference to octant 8 into the clamp, so it keeps turning clockwise.
pub fn turn_step(dir: u8, course: Course) -> u8 {
    let delta = match course {
        Course::Heading(target) => {
            let delta = i32::from(target) - i32::from(dir);
            if delta > OCTANTS / 2 {
                delta - OCTANTS
            } else if delta < -OCTANTS / 2 {
                delta + OCTANTS
            } else {
                delta
            }
        }
        Course::Circling => OCTANTS - i32::from(dir),
    };
    octant::rotate(dir, delta.clamp(-MAX_TURN_PER_TICK, MAX_TURN_PER_TICK))
}
