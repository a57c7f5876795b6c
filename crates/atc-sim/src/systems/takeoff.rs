//! Takeoff system: grounded aircraft with a climb order become airborne.

use tracing::debug;

use atc_core::fleet::Fleet;
use atc_core::types::PlaneId;

/// Move every grounded aircraft whose target altitude is above the ground
/// into the air. Each one joins the back of the arena.
pub fn run(fleet: &mut Fleet) {
    let cleared: Vec<(PlaneId, char)> = fleet
        .grounded()
        .filter(|p| p.target_altitude > 0)
        .map(|p| (p.id, p.name()))
        .collect();

    for (id, name) in cleared {
        debug!(plane = %name, "takeoff");
        fleet.take_off(id);
    }
}
