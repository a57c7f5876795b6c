//! Simulation engine for the air-traffic-control game.
//!
//! Owns the fleet, runs the tick pipeline as ordered systems, and produces
//! `RoundSnapshot`s for a driver. Headless and seeded, so every round can
//! be replayed exactly.

pub mod engine;
pub mod systems;

pub use atc_core as core;
pub use engine::{RoundPhase, SimConfig, SimulationEngine};
