//! Tick outcomes reported to the driver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PlaneId;

/// Why a round ended. The `Display` text is player-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LossReason {
    OutOfFuel,
    LandedWrongDirection,
    ExitedWrongAltitude,
    ExceededCeiling,
    CrashedOnGround,
    LandedWrongAirport,
    LandedInsteadOfExiting,
    LeftArena,
    ExitedWrongExit,
    ExitedInsteadOfLanding,
    /// Collided with the named aircraft.
    Collision { other: char },
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfFuel => write!(f, "ran out of fuel."),
            Self::LandedWrongDirection => write!(f, "landed in the wrong direction."),
            Self::ExitedWrongAltitude => write!(f, "exited at the wrong altitude"),
            Self::ExceededCeiling => write!(f, "exceeded flight ceiling."),
            Self::CrashedOnGround => write!(f, "crashed on the ground."),
            Self::LandedWrongAirport => write!(f, "landed at the wrong airport."),
            Self::LandedInsteadOfExiting => write!(f, "landed instead of exiting."),
            Self::LeftArena => write!(f, "illegally left the flight arena."),
            Self::ExitedWrongExit => write!(f, "exited via the wrong exit."),
            Self::ExitedInsteadOfLanding => write!(f, "exited instead of landing."),
            Self::Collision { other } => write!(f, "collided with plane '{other}'"),
        }
    }
}

/// The end of a round, attributed to one aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loss {
    pub plane: PlaneId,
    /// Presentation letter of the offending aircraft.
    pub name: char,
    pub reason: LossReason,
    /// Tick on which the round ended.
    pub clock: u64,
}

impl Loss {
    pub fn message(&self) -> String {
        self.reason.to_string()
    }

    /// One-line explanation for the player.
    pub fn summary(&self) -> String {
        format!("You lost because plane '{}' {}", self.name, self.reason)
    }
}

/// Result of advancing the simulation by one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TickOutcome {
    Success { clock: u64, safe_planes: u32 },
    Loss(Loss),
}

impl TickOutcome {
    pub fn is_loss(&self) -> bool {
        matches!(self, TickOutcome::Loss(_))
    }

    pub fn loss(&self) -> Option<&Loss> {
        match self {
            TickOutcome::Loss(loss) => Some(loss),
            TickOutcome::Success { .. } => None,
        }
    }
}
