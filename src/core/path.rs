//! Ordered paths through jug-state space.
//!
//! A path is the reconstructed route from the empty state to a goal,
//! stored as the transitions between consecutive states.

use super::moves::Move;
use super::state::JugState;
use serde::{Deserialize, Serialize};

/// One edge of a path.
///
/// `generated_by` is the move the search applied, when known. Paths built
/// from bare state sequences leave it empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JugTransition {
    /// The state being transitioned from
    pub from: JugState,
    /// The state being transitioned to
    pub to: JugState,
    /// The move that produced `to` from `from`
    pub generated_by: Option<Move>,
}

/// Ordered sequence of transitions from a start state.
///
/// # Example
///
/// ```rust
/// use jugpath::core::{JugState, StatePath};
///
/// let path = StatePath::from_states(&[
///     JugState::EMPTY,
///     JugState::new(0, 3),
///     JugState::new(3, 0),
/// ]);
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.states().len(), 3);
/// assert_eq!(path.final_state(), Some(JugState::new(3, 0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePath {
    transitions: Vec<JugTransition>,
}

impl StatePath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Build a path from transitions already in start-to-goal order.
    pub fn from_transitions(transitions: Vec<JugTransition>) -> Self {
        Self { transitions }
    }

    /// Build a path from consecutive states, without move information.
    pub fn from_states(states: &[JugState]) -> Self {
        let transitions = states
            .windows(2)
            .map(|pair| JugTransition {
                from: pair[0],
                to: pair[1],
                generated_by: None,
            })
            .collect();
        Self { transitions }
    }

    /// States traversed: the start state, then the `to` state of each
    /// transition. Empty for an empty path.
    pub fn states(&self) -> Vec<JugState> {
        let mut states = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            states.push(first.from);
        }
        states.extend(self.transitions.iter().map(|t| t.to));
        states
    }

    pub fn transitions(&self) -> &[JugTransition] {
        &self.transitions
    }

    /// Number of transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn final_state(&self) -> Option<JugState> {
        self.transitions.last().map(|t| t.to)
    }
}
