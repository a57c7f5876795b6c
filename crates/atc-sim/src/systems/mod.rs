//! Systems that advance the round by one tick.
//!
//! Systems are plain functions over the fleet. They do not own state; the
//! identity cursor lives in [`spawner::Spawner`] and everything else in the
//! fleet or the caller.

pub mod cleanup;
pub mod collision;
pub mod flight;
pub mod snapshot;
pub mod spawner;
pub mod takeoff;

use rand::Rng;

use atc_core::events::TickOutcome;
use atc_core::fleet::Fleet;
use atc_core::geometry::Geometry;

use spawner::Spawner;

/// Advance one tick.
///
/// `clock` and `safe_planes` are the values after the previous tick. On
/// success the returned outcome carries their new values; on a loss the
/// fleet is left as it was at the moment of the violation.
pub fn tick(
    geometry: &Geometry,
    fleet: &mut Fleet,
    spawner: &mut Spawner,
    rng: &mut impl Rng,
    clock: u64,
    safe_planes: u32,
) -> TickOutcome {
    let clock = clock + 1;

    // 1. Cleared aircraft leave the ground
    takeoff::run(fleet);
    // 2. Movement and rule checks
    if let Err(loss) = flight::run(geometry, fleet, clock) {
        return TickOutcome::Loss(loss);
    }
    // 3. Arrivals
    let safe_planes = safe_planes + cleanup::run(fleet);
    // 4. Separation
    if let Err(loss) = collision::run(fleet, clock) {
        return TickOutcome::Loss(loss);
    }
    // 5. New traffic
    spawner::run(geometry, fleet, spawner, rng);

    TickOutcome::Success { clock, safe_planes }
}
