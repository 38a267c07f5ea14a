//! Errors raised by the solver core.
//!
//! An infeasible target is not an error; it is reported through
//! [`Outcome::Infeasible`](crate::core::Outcome::Infeasible).

use crate::core::Capacities;
use thiserror::Error;

/// Errors that can occur while solving a query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// A capacity or the target was zero
    #[error("Invalid input: {field} must be a positive integer")]
    InvalidInput { field: &'static str },

    /// The frontier emptied before reaching a pre-verified target.
    /// Points at a bug in the feasibility check or successor generation.
    #[error(
        "Search exhausted after exploring {explored} states without reaching {target} ({capacities})"
    )]
    SearchExhausted {
        capacities: Capacities,
        target: u32,
        explored: usize,
    },

    /// The configured state limit was hit before reaching the target
    #[error("State limit of {limit} exceeded ({discovered} states discovered)")]
    StateLimitExceeded { limit: usize, discovered: usize },
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;
