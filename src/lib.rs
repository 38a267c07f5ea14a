//! Jugpath: shortest solutions to the two-jug measuring problem
//!
//! Given two jugs with integer capacities and a target volume, jugpath
//! finds the fewest fill, empty and pour operations that leave the target
//! volume in one of the jugs, or reports why no sequence exists.
//!
//! The computation is a pure core wrapped by a thin shell:
//!
//! - **Feasibility**: a gcd test rejects unreachable targets up front
//! - **Search**: breadth-first search over `(x, y)` states, path
//!   reconstruction, and step labeling
//! - **Validation**: raw request checks that report every bad field
//! - **Solver**: configuration, orchestration, and per-query reports
//!
//! # Example
//!
//! ```rust
//! use jugpath::core::{Action, JugState};
//!
//! let outcome = jugpath::solve(4, 3, 2).unwrap();
//! let steps = outcome.steps().unwrap();
//!
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps[0].action, Action::FillY);
//! assert_eq!(outcome.final_state(), Some(JugState::new(4, 2)));
//!
//! let outcome = jugpath::solve(6, 10, 100).unwrap();
//! assert!(!outcome.is_feasible());
//! ```

pub mod core;
pub mod error;
pub mod feasibility;
pub mod search;
pub mod solver;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Capacities, JugState, Outcome, Step};
pub use error::SolveError;
pub use solver::{solve, Solver, SolverBuilder, SolverConfig};
