//! Snapshot system: builds a `RoundSnapshot` from the fleet.
//!
//! Read-only; never modifies the fleet.

use atc_core::events::Loss;
use atc_core::fleet::Fleet;
use atc_core::state::{PlaneSummary, RoundSnapshot};

pub fn build_snapshot(
    fleet: &Fleet,
    clock: u64,
    safe_planes: u32,
    loss: Option<&Loss>,
) -> RoundSnapshot {
    RoundSnapshot {
        clock,
        safe_planes,
        airborne: fleet.airborne().map(PlaneSummary::from).collect(),
        grounded: fleet.grounded().map(PlaneSummary::from).collect(),
        loss: loss.cloned(),
    }
}
