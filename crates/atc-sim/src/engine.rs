//! Simulation engine: the owner of one round.
//!
//! `SimulationEngine` holds the level geometry, the fleet, the clock and
//! score, and a seeded random source. It runs the tick pipeline, merges
//! completed commands, and produces `RoundSnapshot`s. Completely headless,
//! enabling deterministic testing and replay.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use atc_core::events::{Loss, TickOutcome};
use atc_core::fleet::Fleet;
use atc_core::geometry::Geometry;
use atc_core::plane::Plane;
use atc_core::state::RoundSnapshot;

use crate::systems;
use crate::systems::spawner::Spawner;

/// Configuration for starting a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same commands = same round.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Whether the round is still being played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Active,
    /// Ended by a rule violation. Terminal.
    Lost(Loss),
}

/// The simulation engine. Owns the fleet and all round state.
pub struct SimulationEngine {
    geometry: Geometry,
    fleet: Fleet,
    clock: u64,
    safe_planes: u32,
    rng: ChaCha8Rng,
    spawner: Spawner,
    phase: RoundPhase,
}

impl SimulationEngine {
    /// Start a new round on `geometry` with an empty sky.
    pub fn new(geometry: Geometry, config: SimConfig) -> Self {
        Self {
            geometry,
            fleet: Fleet::new(),
            clock: 0,
            safe_planes: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawner: Spawner::new(),
            phase: RoundPhase::default(),
        }
    }

    /// Advance the round by one tick.
    ///
    /// Once the round is lost this does nothing and returns the stored loss.
    pub fn tick(&mut self) -> TickOutcome {
        if let RoundPhase::Lost(loss) = &self.phase {
            return TickOutcome::Loss(loss.clone());
        }

        let outcome = systems::tick(
            &self.geometry,
            &mut self.fleet,
            &mut self.spawner,
            &mut self.rng,
            self.clock,
            self.safe_planes,
        );

        match &outcome {
            TickOutcome::Success { clock, safe_planes } => {
                self.clock = *clock;
                self.safe_planes = *safe_planes;
            }
            TickOutcome::Loss(loss) => {
                info!(
                    plane = %loss.name,
                    reason = %loss.reason,
                    clock = loss.clock,
                    safe_planes = self.safe_planes,
                    "round lost"
                );
                self.clock = loss.clock;
                self.phase = RoundPhase::Lost(loss.clone());
            }
        }
        outcome
    }

    /// Merge the edited copy produced by a completed command into the live
    /// aircraft. Returns `false` if the round is over or the aircraft has
    /// since left.
    pub fn apply_update(&mut self, plane: &Plane) -> bool {
        if self.is_lost() {
            return false;
        }
        self.fleet.merge_command(plane)
    }

    /// Build the display snapshot for the current state.
    pub fn snapshot(&self) -> RoundSnapshot {
        systems::snapshot::build_snapshot(
            &self.fleet,
            self.clock,
            self.safe_planes,
            self.loss(),
        )
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Ticks played so far.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Aircraft that reached their destination.
    pub fn safe_planes(&self) -> u32 {
        self.safe_planes
    }

    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.phase, RoundPhase::Lost(_))
    }

    pub fn loss(&self) -> Option<&Loss> {
        match &self.phase {
            RoundPhase::Lost(loss) => Some(loss),
            RoundPhase::Active => None,
        }
    }

    /// Place an aircraft directly (for tests).
    #[cfg(test)]
    pub fn insert_test_plane(&mut self, plane: Plane) {
        self.fleet.insert(plane);
    }
}
