//! The six jug operations and the labels derived from state pairs.
//!
//! A [`Move`] is what the search actually applies. An [`Action`] is the
//! human-readable label assigned afterwards by comparing two consecutive
//! states with a fixed precedence. The two usually agree, but not always:
//! a pour that happens to fill jug Y is labeled [`Action::FillY`].

use super::state::{Capacities, JugState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six legal operations on the two jugs.
///
/// [`Move::ALL`] lists them in generation order. Successor generation
/// follows that order so search output is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    FillX,
    FillY,
    EmptyX,
    EmptyY,
    PourXIntoY,
    PourYIntoX,
}

impl Move {
    /// All moves in generation order.
    pub const ALL: [Move; 6] = [
        Move::FillX,
        Move::FillY,
        Move::EmptyX,
        Move::EmptyY,
        Move::PourXIntoY,
        Move::PourYIntoX,
    ];

    /// Apply this move to `state`.
    ///
    /// Returns `None` for a pour that would transfer nothing. Fill and empty
    /// moves always return a state, possibly equal to `state`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jugpath::core::{Capacities, JugState, Move};
    ///
    /// let caps = Capacities::new(5, 3).unwrap();
    /// let full_x = Move::FillX.apply(JugState::EMPTY, caps).unwrap();
    /// assert_eq!(full_x, JugState::new(5, 0));
    ///
    /// let poured = Move::PourXIntoY.apply(full_x, caps).unwrap();
    /// assert_eq!(poured, JugState::new(2, 3));
    ///
    /// assert_eq!(Move::PourYIntoX.apply(full_x, caps), None);
    /// ```
    pub fn apply(self, state: JugState, caps: Capacities) -> Option<JugState> {
        let JugState { x, y } = state;
        match self {
            Move::FillX => Some(JugState::new(caps.x(), y)),
            Move::FillY => Some(JugState::new(x, caps.y())),
            Move::EmptyX => Some(JugState::new(0, y)),
            Move::EmptyY => Some(JugState::new(x, 0)),
            Move::PourXIntoY => {
                let amount = x.min(caps.y().saturating_sub(y));
                (amount > 0).then(|| JugState::new(x - amount, y + amount))
            }
            Move::PourYIntoX => {
                let amount = y.min(caps.x().saturating_sub(x));
                (amount > 0).then(|| JugState::new(x + amount, y - amount))
            }
        }
    }

    /// The moves that turn `from` into `to`, in generation order.
    ///
    /// For two distinct states inside the capacity rectangle this yields at
    /// most one move.
    pub fn connecting(
        from: JugState,
        to: JugState,
        caps: Capacities,
    ) -> impl Iterator<Item = Move> {
        Move::ALL
            .into_iter()
            .filter(move |m| m.apply(from, caps) == Some(to))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::FillX => "fill X",
            Move::FillY => "fill Y",
            Move::EmptyX => "empty X",
            Move::EmptyY => "empty Y",
            Move::PourXIntoY => "pour X into Y",
            Move::PourYIntoX => "pour Y into X",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successors of `state` in generation order, with the move producing each.
///
/// Zero-volume pours are skipped. Fill or empty moves that leave the state
/// unchanged are still yielded; the search discards them as already visited.
pub fn successors(state: JugState, caps: Capacities) -> impl Iterator<Item = (Move, JugState)> {
    Move::ALL
        .into_iter()
        .filter_map(move |m| m.apply(state, caps).map(|next| (m, next)))
}

/// Human-readable label for one step of a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "fill X")]
    FillX,
    #[serde(rename = "fill Y")]
    FillY,
    #[serde(rename = "empty X")]
    EmptyX,
    #[serde(rename = "empty Y")]
    EmptyY,
    #[serde(rename = "transfer Y→X")]
    TransferYToX,
    #[serde(rename = "transfer X→Y")]
    TransferXToY,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Action {
    /// Label the transition `prev -> next`.
    ///
    /// Rules are checked in order and the first match wins: fill X, fill Y,
    /// empty X, empty Y, then a rise in X (transfer Y→X) and a rise in Y
    /// (transfer X→Y). Anything else is [`Action::Unknown`], which never
    /// happens for an edge the search produced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jugpath::core::{Action, Capacities, JugState};
    ///
    /// let caps = Capacities::new(4, 3).unwrap();
    ///
    /// // A pour that empties Y is labeled by the empty rule.
    /// let action = Action::classify(JugState::new(0, 3), JugState::new(3, 0), caps);
    /// assert_eq!(action, Action::EmptyY);
    ///
    /// let action = Action::classify(JugState::new(1, 3), JugState::new(3, 1), caps);
    /// assert_eq!(action, Action::TransferYToX);
    /// ```
    pub fn classify(prev: JugState, next: JugState, caps: Capacities) -> Self {
        if next.x == caps.x() && prev.x != caps.x() {
            Action::FillX
        } else if next.y == caps.y() && prev.y != caps.y() {
            Action::FillY
        } else if next.x == 0 && prev.x != 0 {
            Action::EmptyX
        } else if next.y == 0 && prev.y != 0 {
            Action::EmptyY
        } else if next.x > prev.x {
            Action::TransferYToX
        } else if next.y > prev.y {
            Action::TransferXToY
        } else {
            Action::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::FillX => "fill X",
            Action::FillY => "fill Y",
            Action::EmptyX => "empty X",
            Action::EmptyY => "empty Y",
            Action::TransferYToX => "transfer Y→X",
            Action::TransferXToY => "transfer X→Y",
            Action::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
