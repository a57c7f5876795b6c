//! Level loading for the air-traffic-control game.
//!
//! Parses the textual level format into a validated, immutable
//! [`Geometry`](atc_core::geometry::Geometry), and ships a small library
//! of built-in levels.

pub mod builtin;
pub mod error;
pub mod parser;

pub use atc_core as core;
pub use error::LevelError;
pub use parser::{parse, parse_named};

#[cfg(test)]
mod tests;
