//! Command rejection reasons.

use std::fmt;

use atc_core::enums::{PlaceKind, PlaneStatus};

/// Why a completed command was discarded. The `Display` text is shown to
/// the player as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    UnknownPlane,
    TurnOnGround,
    CircleOnGround,
    /// No beacon, exit, or airport with that number.
    UnknownPlace(PlaceKind),
    BeaconNotInPath,
    /// The towards target sits on the delay beacon.
    AlreadyThere,
    AlreadyHeading,
    AlreadyAtAltitude,
    AltitudeUnchanged,
    AltitudeTooLow,
    AltitudeTooHigh,
    /// Mark, unmark, or ignore aimed at an aircraft on the ground.
    StatusOnGround(PlaneStatus),
    AlreadyStatus(PlaneStatus),
}

fn verb(status: PlaneStatus) -> &'static str {
    match status {
        PlaneStatus::Marked => "mark",
        PlaneStatus::Unmarked => "unmark",
        PlaneStatus::Ignored => "ignore",
        PlaneStatus::Gone => "remove",
    }
}

fn participle(status: PlaneStatus) -> &'static str {
    match status {
        PlaneStatus::Marked => "marked",
        PlaneStatus::Unmarked => "unmarked",
        PlaneStatus::Ignored => "ignored",
        PlaneStatus::Gone => "gone",
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlane => write!(f, "Unknown Plane"),
            Self::TurnOnGround => write!(f, "Planes at airports may not change direction"),
            Self::CircleOnGround => write!(f, "Planes cannot circle on the ground"),
            Self::UnknownPlace(kind) => write!(f, "Unknown {}", kind.noun()),
            Self::BeaconNotInPath => write!(f, "Beacon is not in flight path"),
            Self::AlreadyThere => write!(f, "Would already be there"),
            Self::AlreadyHeading => write!(f, "Already going in that direction"),
            Self::AlreadyAtAltitude => write!(f, "Already at that altitude"),
            Self::AltitudeUnchanged => write!(f, "altitude not changed"),
            Self::AltitudeTooLow => write!(f, "Altitude would be too low"),
            Self::AltitudeTooHigh => write!(f, "Altitude would be too high"),
            Self::StatusOnGround(status) => {
                write!(f, "Cannot {} planes on the ground", verb(*status))
            }
            Self::AlreadyStatus(status) => write!(f, "Already {}", participle(*status)),
        }
    }
}

impl std::error::Error for CommandError {}
