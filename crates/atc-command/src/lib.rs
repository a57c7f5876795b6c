//! Keystroke command entry for the air-traffic-control game.
//!
//! Commands are typed one key at a time and walk a fixed transition table.
//! A completed command is replayed against a copy of the selected aircraft;
//! the live fleet is only touched when the caller merges the result.

pub mod actions;
pub mod error;
pub mod interpreter;
pub mod table;

pub use atc_core as core;
pub use error::CommandError;
pub use interpreter::{CommandInterpreter, CommandOutcome};
pub use table::{State, Token};
