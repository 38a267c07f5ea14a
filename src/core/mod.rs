//! Core value types for the two-jug problem.
//!
//! Everything here is a plain value with no side effects:
//! - [`Capacities`] and [`JugState`] describe the problem and its states
//! - [`Move`] applies one of the six operations; [`Action`] labels a step
//! - [`StatePath`] holds a reconstructed route
//! - [`Step`] and [`Outcome`] are the query result

mod moves;
mod outcome;
mod path;
mod state;

pub use moves::{successors, Action, Move};
pub use outcome::{InfeasibleReason, Outcome, Step};
pub use path::{JugTransition, StatePath};
pub use state::{Capacities, JugState};
