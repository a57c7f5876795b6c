//! Core types and definitions for the air-traffic-control game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! octant arithmetic, level geometry, the aircraft record and fleet arena,
//! tick outcomes, display summaries, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod constants;
pub mod enums;
pub mod events;
pub mod fleet;
pub mod geometry;
pub mod octant;
pub mod plane;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
