//! Separation check over all airborne aircraft.

use glam::IVec2;

use atc_core::constants::COLLISION_DISTANCE;
use atc_core::events::{Loss, LossReason};
use atc_core::fleet::Fleet;
use atc_core::plane::Plane;

/// Check every airborne pair in arena order. The earlier aircraft of the
/// first offending pair is blamed.
pub fn run(fleet: &Fleet, clock: u64) -> Result<(), Loss> {
    let airborne: Vec<&Plane> = fleet.airborne().collect();
    for (i, first) in airborne.iter().enumerate() {
        for second in &airborne[i + 1..] {
            if too_close(first, second, COLLISION_DISTANCE) {
                return Err(Loss {
                    plane: first.id,
                    name: first.name(),
                    reason: LossReason::Collision {
                        other: second.name(),
                    },
                    clock,
                });
            }
        }
    }
    Ok(())
}

/// Within `distance` on both grid axes and in altitude.
pub fn too_close(a: &Plane, b: &Plane, distance: i32) -> bool {
    near(a.pos, a.altitude, b.pos, b.altitude, distance)
}

pub fn near(a_pos: IVec2, a_alt: i32, b_pos: IVec2, b_alt: i32, distance: i32) -> bool {
    (a_pos - b_pos).abs().max_element() <= distance && (a_alt - b_alt).abs() <= distance
}
