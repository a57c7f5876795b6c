//! The command interpreter: a stack of accepted edges.

use tracing::debug;

use atc_core::enums::PlaceKind;
use atc_core::fleet::Fleet;
use atc_core::geometry::Geometry;
use atc_core::plane::Plane;

use crate::actions::Context;
use crate::error::CommandError;
use crate::table::{self, Edge, State, Token};

/// Result of applying a completed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Edited copy of the selected aircraft, to be merged into the fleet.
    Update(Plane),
    /// Empty command: advance the clock now.
    Skip,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    edge: &'static Edge,
    key: char,
}

/// Keystroke-driven command entry.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    stack: Vec<Entry>,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state: the target of the last accepted edge.
    pub fn state(&self) -> State {
        self.stack.last().map_or(State::Plane, |entry| entry.edge.to)
    }

    pub fn is_complete(&self) -> bool {
        self.state().is_complete()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Feed one token. Keys with no edge out of the current state are
    /// ignored. Returns whether the command is now complete.
    pub fn process_token(&mut self, token: Token) -> bool {
        match token {
            Token::Erase => {
                self.stack.pop();
            }
            Token::Kill => self.stack.clear(),
            Token::Key(_) | Token::Enter => {
                if let Some(edge) = table::transition(self.state(), token) {
                    let key = match token {
                        Token::Key(key) => key,
                        _ => '\n',
                    };
                    self.stack.push(Entry { edge, key });
                }
            }
        }
        self.is_complete()
    }

    /// The command as typed so far, in words.
    pub fn display(&self) -> String {
        self.stack
            .iter()
            .map(|entry| entry.edge.render(entry.key))
            .collect()
    }

    /// Every edge out of the current state, in priority order.
    pub fn options(&self) -> &'static [Edge] {
        table::edges(self.state())
    }

    /// Kind of place the next digit will select, if one is expected.
    pub fn target_kind(&self) -> Option<PlaceKind> {
        match self.state() {
            State::DelayBeacon => Some(PlaceKind::Beacon),
            State::TargetNumber => match self.stack.last().map(|entry| entry.key) {
                Some('e') => Some(PlaceKind::Exit),
                Some('a') => Some(PlaceKind::Airport),
                _ => Some(PlaceKind::Beacon),
            },
            _ => None,
        }
    }

    /// Replay a completed command against a copy of the selected aircraft.
    ///
    /// `None` while the command is incomplete. Otherwise the input is
    /// cleared whether or not the command succeeds.
    pub fn apply_command(
        &mut self,
        geometry: &Geometry,
        fleet: &Fleet,
    ) -> Option<Result<CommandOutcome, CommandError>> {
        if !self.is_complete() {
            return None;
        }
        let command = self.display();
        let stack = std::mem::take(&mut self.stack);

        let mut ctx = Context::new(geometry, fleet);
        for entry in &stack {
            if let Some(action) = entry.edge.action {
                if let Err(err) = action(&mut ctx, entry.key) {
                    debug!(command = %command, error = %err, "command rejected");
                    return Some(Err(err));
                }
            }
        }

        Some(Ok(match ctx.plane {
            Some(plane) => {
                debug!(command = %command, "command accepted");
                CommandOutcome::Update(plane)
            }
            None => CommandOutcome::Skip,
        }))
    }
}
