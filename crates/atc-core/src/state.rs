//! Round snapshot: the visible state a driver shows after each tick.

use serde::{Deserialize, Serialize};

use crate::constants::LOW_FUEL;
use crate::enums::PlaneStatus;
use crate::events::Loss;
use crate::octant;
use crate::plane::Plane;
use crate::types::{Course, Endpoint};

/// Complete round state for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub clock: u64,
    pub safe_planes: u32,
    pub airborne: Vec<PlaneSummary>,
    /// Aircraft waiting for takeoff.
    pub grounded: Vec<PlaneSummary>,
    pub loss: Option<Loss>,
}

/// One row of the aircraft list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneSummary {
    pub name: char,
    pub marked: bool,
    pub altitude: i32,
    pub fuel: i32,
    pub low_fuel: bool,
    /// Compact destination label, e.g. `E3` or `A0`.
    pub destination: String,
    /// Pending orders, e.g. `90° @ B1`, `Circle`, or `Holding @ A0`.
    pub orders: String,
}

impl From<&Plane> for PlaneSummary {
    fn from(plane: &Plane) -> Self {
        Self {
            name: plane.name(),
            marked: plane.status == PlaneStatus::Marked,
            altitude: plane.altitude,
            fuel: plane.fuel,
            low_fuel: plane.fuel <= LOW_FUEL,
            destination: plane.destination.to_string(),
            orders: orders(plane),
        }
    }
}

/// Pending-orders column of the aircraft list.
pub fn orders(plane: &Plane) -> String {
    let mut parts: Vec<String> = Vec::new();
    if plane.altitude == 0 {
        parts.push(format!("Holding @ A{}", plane.origin.index()));
    } else {
        match plane.course {
            Course::Circling => parts.push("Circle".to_string()),
            Course::Heading(dir) if dir != plane.dir => {
                parts.push(format!("{}°", octant::degrees(dir)));
            }
            Course::Heading(_) => {}
        }
    }

    if let Some(beacon) = plane.delay {
        parts.push(format!(" @ B{beacon}"));
    }

    if parts.is_empty() && matches!(plane.status, PlaneStatus::Unmarked | PlaneStatus::Ignored) {
        parts.push("---------".to_string());
    }
    parts.concat()
}

/// Multi-line description of an aircraft, for a detail popover.
pub fn describe(plane: &Plane) -> Vec<String> {
    let destination = match plane.destination {
        Endpoint::Exit(n) => format!("Destination: exit #{n}"),
        Endpoint::Airport(n) => format!("Destination: airport #{n}"),
    };

    let mut altitude = format!("Altitude: {},000 feet", plane.altitude);
    if plane.target_altitude != plane.altitude {
        if plane.altitude == 0 {
            altitude.push_str(", taking off");
        } else {
            let verb = if plane.target_altitude > plane.altitude {
                "climbing"
            } else {
                "descending"
            };
            altitude.push_str(&format!(", {verb} to {},000 feet", plane.target_altitude));
        }
    }

    let mut heading = format!("Heading: {}°", octant::degrees(plane.dir));
    match plane.course {
        Course::Heading(dir) if dir != plane.dir => {
            heading.push_str(&format!(", turning to {}°", octant::degrees(dir)));
        }
        Course::Heading(_) => {}
        Course::Circling => heading.push_str(", circling"),
    }
    if let Some(beacon) = plane.delay {
        heading.push_str(&format!(", at beacon #{beacon}"));
    }

    vec![format!("Plane {}", plane.name()), destination, altitude, heading]
}
