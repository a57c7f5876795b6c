//! The command grammar as a transition table.
//!
//! Each state lists its edges in priority order; the first edge that
//! accepts a key wins. An edge may carry an action that is replayed when
//! the finished command is applied.

use serde::{Deserialize, Serialize};

use crate::actions::{self, Action};

/// One unit of keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Key(char),
    /// Completes the command.
    Enter,
    /// Drops the most recently accepted key.
    Erase,
    /// Drops the whole command.
    Kill,
}

/// Interpreter position in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Plane,
    Action,
    Turn,
    Altitude,
    Delay,
    DelayBeacon,
    TurnAmount,
    Done,
    TargetNumber,
    BeaconKey,
    RelativeAltitude,
    Towards,
    Help,
    /// Terminal: the command is ready to apply.
    Complete,
}

impl State {
    /// Numeric state index, `-1` for [`State::Complete`].
    pub fn index(self) -> i8 {
        match self {
            State::Plane => 0,
            State::Action => 1,
            State::Turn => 2,
            State::Altitude => 3,
            State::Delay => 4,
            State::DelayBeacon => 5,
            State::TurnAmount => 6,
            State::Done => 7,
            State::TargetNumber => 8,
            State::BeaconKey => 9,
            State::RelativeAltitude => 10,
            State::Towards => 11,
            State::Help => 12,
            State::Complete => -1,
        }
    }

    pub fn is_complete(self) -> bool {
        self == State::Complete
    }
}

/// What an edge accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accept {
    /// Exactly this key, case-sensitive.
    Key(char),
    /// Any letter.
    Alpha,
    /// Any digit.
    Number,
    Enter,
}

impl Accept {
    pub fn matches(self, token: Token) -> bool {
        match (self, token) {
            (Accept::Key(want), Token::Key(got)) => want == got,
            (Accept::Alpha, Token::Key(got)) => got.is_ascii_alphabetic(),
            (Accept::Number, Token::Key(got)) => got.is_ascii_digit(),
            (Accept::Enter, Token::Enter) => true,
            _ => false,
        }
    }

    /// Short form for completion hints.
    pub fn describe(self) -> String {
        match self {
            Accept::Key(key) => key.to_string(),
            Accept::Alpha => "[a-z]".to_string(),
            Accept::Number => "[0-9]".to_string(),
            Accept::Enter => "<ret>".to_string(),
        }
    }
}

/// Semantic tag of an edge, for completion UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Aircraft selector.
    Plane,
    /// Beacon, exit, or airport number.
    Number,
    /// Absolute heading.
    Direction,
    /// Heading relative to the current one.
    RelativeDirection,
    Altitude,
    /// Generic command word or terminator.
    Action,
    Help,
}

/// One transition.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub accept: Accept,
    pub to: State,
    /// Display fragment; `%c` stands for the accepted key.
    pub label: &'static str,
    pub action: Option<Action>,
    pub category: Category,
}

impl Edge {
    /// Display fragment with the accepted key substituted.
    pub fn render(&self, key: char) -> String {
        self.label.replace("%c", &key.to_string())
    }
}

const fn edge(
    accept: Accept,
    to: State,
    label: &'static str,
    action: Option<Action>,
    category: Category,
) -> Edge {
    Edge {
        accept,
        to,
        label,
        action,
        category,
    }
}

use Accept::{Alpha, Enter, Key, Number};
use Category as C;

const PLANE: &[Edge] = &[
    edge(Alpha, State::Action, "%c:", Some(actions::set_plane), C::Plane),
    edge(Enter, State::Complete, "", None, C::Action),
    edge(Key('?'), State::Help, " [a-z]<ret>", None, C::Help),
];

const ACTION: &[Edge] = &[
    edge(Key('t'), State::Turn, " turn", Some(actions::turn), C::Action),
    edge(Key('a'), State::Altitude, " altitude", None, C::Action),
    edge(Key('c'), State::Delay, " circle", Some(actions::circle), C::Action),
    edge(Key('m'), State::Done, " mark", Some(actions::mark), C::Action),
    edge(Key('u'), State::Done, " unmark", Some(actions::unmark), C::Action),
    edge(Key('i'), State::Done, " ignore", Some(actions::ignore), C::Action),
    edge(Key('?'), State::Help, " tacmui", None, C::Help),
];

const TURN: &[Edge] = &[
    edge(Key('l'), State::TurnAmount, " left", Some(actions::left), C::Action),
    edge(Key('r'), State::TurnAmount, " right", Some(actions::right), C::Action),
    edge(Key('L'), State::Delay, " left 90", Some(actions::hard_left), C::Action),
    edge(Key('R'), State::Delay, " right 90", Some(actions::hard_right), C::Action),
    edge(Key('t'), State::Towards, " towards", None, C::Action),
    edge(Key('w'), State::Delay, " to 0", Some(actions::to_dir), C::Direction),
    edge(Key('e'), State::Delay, " to 45", Some(actions::to_dir), C::Direction),
    edge(Key('d'), State::Delay, " to 90", Some(actions::to_dir), C::Direction),
    edge(Key('c'), State::Delay, " to 135", Some(actions::to_dir), C::Direction),
    edge(Key('x'), State::Delay, " to 180", Some(actions::to_dir), C::Direction),
    edge(Key('z'), State::Delay, " to 225", Some(actions::to_dir), C::Direction),
    edge(Key('a'), State::Delay, " to 270", Some(actions::to_dir), C::Direction),
    edge(Key('q'), State::Delay, " to 315", Some(actions::to_dir), C::Direction),
    edge(Key('?'), State::Help, " lrLRt<dir>", None, C::Help),
];

const ALTITUDE: &[Edge] = &[
    edge(Key('+'), State::RelativeAltitude, " climb", Some(actions::climb), C::Action),
    edge(Key('c'), State::RelativeAltitude, " climb", Some(actions::climb), C::Action),
    edge(Key('-'), State::RelativeAltitude, " descend", Some(actions::descend), C::Action),
    edge(Key('d'), State::RelativeAltitude, " descend", Some(actions::descend), C::Action),
    edge(Number, State::Done, " %c000 feet", Some(actions::set_altitude), C::Altitude),
    edge(Key('?'), State::Help, " +-cd[0-9]", None, C::Help),
];

const DELAY: &[Edge] = &[
    edge(Key('@'), State::BeaconKey, " at", None, C::Action),
    edge(Key('a'), State::BeaconKey, " at", None, C::Action),
    edge(Enter, State::Complete, "", None, C::Action),
    edge(Key('?'), State::Help, " @a<ret>", None, C::Help),
];

const DELAY_BEACON: &[Edge] = &[
    edge(Number, State::Done, "%c", Some(actions::delay_beacon), C::Number),
    edge(Key('?'), State::Help, " [0-9]", None, C::Help),
];

// `a` is claimed by "at" before the 270 edge.
const TURN_AMOUNT: &[Edge] = &[
    edge(Key('@'), State::BeaconKey, " at", None, C::Action),
    edge(Key('a'), State::BeaconKey, " at", None, C::Action),
    edge(Key('w'), State::Delay, " 0", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('e'), State::Delay, " 45", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('d'), State::Delay, " 90", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('c'), State::Delay, " 135", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('x'), State::Delay, " 180", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('z'), State::Delay, " 225", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('a'), State::Delay, " 270", Some(actions::rel_dir), C::RelativeDirection),
    edge(Key('q'), State::Delay, " 315", Some(actions::rel_dir), C::RelativeDirection),
    edge(Enter, State::Complete, "", None, C::Action),
    edge(Key('?'), State::Help, " @a<dir><ret>", None, C::Help),
];

const DONE: &[Edge] = &[
    edge(Enter, State::Complete, "", None, C::Action),
    edge(Key('?'), State::Help, " <ret>", None, C::Help),
];

const TARGET_NUMBER: &[Edge] = &[
    edge(Number, State::Delay, "%c", Some(actions::target_number), C::Number),
    edge(Key('?'), State::Help, " [0-9]", None, C::Help),
];

const BEACON_KEY: &[Edge] = &[
    edge(Key('b'), State::DelayBeacon, " beacon #", None, C::Action),
    edge(Key('*'), State::DelayBeacon, " beacon #", None, C::Action),
    edge(Key('?'), State::Help, " b*", None, C::Help),
];

const RELATIVE_ALTITUDE: &[Edge] = &[
    edge(Number, State::Done, " %c000 feet", Some(actions::set_relative_altitude), C::Altitude),
    edge(Key('?'), State::Help, " [0-9]", None, C::Help),
];

const TOWARDS: &[Edge] = &[
    edge(Key('b'), State::TargetNumber, " beacon #", Some(actions::toward_beacon), C::Action),
    edge(Key('*'), State::TargetNumber, " beacon #", Some(actions::toward_beacon), C::Action),
    edge(Key('e'), State::TargetNumber, " exit #", Some(actions::toward_exit), C::Action),
    edge(Key('a'), State::TargetNumber, " airport #", Some(actions::toward_airport), C::Action),
    edge(Key('?'), State::Help, " b*ea", None, C::Help),
];

/// Edges leaving `state`, in priority order. Empty for the help and
/// terminal states.
pub fn edges(state: State) -> &'static [Edge] {
    match state {
        State::Plane => PLANE,
        State::Action => ACTION,
        State::Turn => TURN,
        State::Altitude => ALTITUDE,
        State::Delay => DELAY,
        State::DelayBeacon => DELAY_BEACON,
        State::TurnAmount => TURN_AMOUNT,
        State::Done => DONE,
        State::TargetNumber => TARGET_NUMBER,
        State::BeaconKey => BEACON_KEY,
        State::RelativeAltitude => RELATIVE_ALTITUDE,
        State::Towards => TOWARDS,
        State::Help | State::Complete => &[],
    }
}

/// First edge out of `state` that accepts `token`.
pub fn transition(state: State, token: Token) -> Option<&'static Edge> {
    edges(state).iter().find(|e| e.accept.matches(token))
}
