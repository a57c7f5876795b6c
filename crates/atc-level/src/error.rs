//! Error types for level loading.

use std::fmt;

/// Why a level description was rejected.
///
/// Any error discards the whole level; no partial geometry is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A scalar declaration appeared twice.
    Redefinition { field: &'static str },
    /// A scalar is below its minimum.
    TooSmall { field: &'static str, min: u32 },
    /// An arena dimension is above its maximum.
    TooLarge { field: &'static str, max: u32 },
    /// A numeric literal that does not fit a coordinate or scalar.
    NumberTooLarge { digits: String },
    /// An entity declaration, or the end of the level, was reached before
    /// all four scalars were declared.
    MissingScalars,
    /// A statement matches neither statement family.
    Syntax { level: String, statement: String },
    /// A direction token outside `wedcxzaq`.
    BadDirection { key: char },
    /// A beacon, airport, or line endpoint outside its permitted area.
    PointOutOfRange {
        kind: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// An exit that is not on the arena boundary.
    NotOnEdge { x: i32, y: i32 },
    /// An exit whose heading does not point out of the arena.
    BadExitDirection { x: i32, y: i32, dir: u8 },
    /// A line that is neither horizontal, vertical, nor diagonal.
    BadLine { from: (i32, i32), to: (i32, i32) },
    /// Fewer than two exits and airports combined.
    InsufficientDestinations { found: usize },
    /// No built-in level by this name.
    UnknownLevel { name: String },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redefinition { field } => write!(f, "Redefinition of '{field}'."),
            Self::TooSmall { field, min } => {
                write!(f, "'{field}' is too small (minimum {min}).")
            }
            Self::TooLarge { field, max } => {
                write!(f, "'{field}' is too large (maximum {max}).")
            }
            Self::NumberTooLarge { digits } => write!(f, "Number {digits} is out of range."),
            Self::MissingScalars => {
                write!(f, "width, height, update, and newplane must be defined")
            }
            Self::Syntax { level, statement } => {
                write!(f, "Unexpected line in {level}: {statement}")
            }
            Self::BadDirection { key } => write!(f, "'{key}' is not a valid direction"),
            Self::PointOutOfRange {
                kind,
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "{kind} at ({x} {y}) is out of range for a {width}x{height} arena."
            ),
            Self::NotOnEdge { x, y } => write!(f, "exit at ({x} {y}) is not on an edge."),
            Self::BadExitDirection { x, y, dir } => {
                write!(f, "Bad direction {dir} for exit at ({x} {y}).")
            }
            Self::BadLine { from, to } => write!(
                f,
                "Bad line endpoints ({} {}) ({} {}).",
                from.0, from.1, to.0, to.1
            ),
            Self::InsufficientDestinations { found } => {
                write!(f, "Need at least 2 airports and/or exits, found {found}.")
            }
            Self::UnknownLevel { name } => write!(f, "No level named '{name}'."),
        }
    }
}

impl std::error::Error for LevelError {}
