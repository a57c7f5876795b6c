//! Cleanup system: removes aircraft that reached their destination.

use tracing::debug;

use atc_core::enums::PlaneStatus;
use atc_core::fleet::Fleet;

/// Remove every [`PlaneStatus::Gone`] aircraft and return how many left.
pub fn run(fleet: &mut Fleet) -> u32 {
    let mut removed = 0;
    for plane in fleet.iter().filter(|p| p.status == PlaneStatus::Gone) {
        debug!(plane = %plane.name(), destination = %plane.destination, "arrived");
        removed += 1;
    }
    if removed > 0 {
        fleet.retain(|p| p.status != PlaneStatus::Gone);
    }
    removed
}
