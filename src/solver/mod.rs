//! Query orchestration: feasibility check, search, labeling.
//!
//! A [`Solver`] is immutable once built and holds only its
//! [`SolverConfig`]. Each call to [`Solver::solve`] allocates its own search
//! state, so one solver can serve concurrent callers.

mod builder;
mod config;
pub mod error;
mod report;

pub use builder::SolverBuilder;
pub use config::SolverConfig;
pub use error::{BuildError, ConfigError};
pub use report::SolveReport;

use crate::core::{Capacities, Outcome};
use crate::error::SolveError;
use crate::feasibility::{self, Feasibility};
use crate::search::{label_path, BreadthFirstSearch, SearchStats};
use crate::validation::SolveRequest;
use std::num::NonZeroU32;
use tracing::debug;

/// Solves two-jug queries under a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve one query.
    ///
    /// Infeasible targets come back as `Ok(Outcome::Infeasible { .. })`.
    /// Errors are reserved for invalid input and failed searches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jugpath::core::{Capacities, JugState};
    /// use jugpath::solver::Solver;
    /// use jugpath::validation::SolveRequest;
    /// use std::num::NonZeroU32;
    ///
    /// let request = SolveRequest::new(
    ///     Capacities::new(5, 3).unwrap(),
    ///     NonZeroU32::new(4).unwrap(),
    /// );
    /// let outcome = Solver::new().solve(&request).unwrap();
    ///
    /// assert_eq!(outcome.steps().unwrap().len(), 6);
    /// assert_eq!(outcome.final_state(), Some(JugState::new(4, 3)));
    /// ```
    pub fn solve(&self, request: &SolveRequest) -> Result<Outcome, SolveError> {
        self.run(request).map(|(outcome, _)| outcome)
    }

    /// Solve one query and wrap the outcome in a [`SolveReport`].
    pub fn report(&self, request: &SolveRequest) -> Result<SolveReport, SolveError> {
        let (outcome, stats) = self.run(request)?;
        Ok(SolveReport::new(*request, outcome, stats))
    }

    fn run(&self, request: &SolveRequest) -> Result<(Outcome, Option<SearchStats>), SolveError> {
        let SolveRequest { capacities, target } = *request;
        if target == 0 {
            return Err(SolveError::InvalidInput { field: "target" });
        }

        if let Feasibility::Infeasible(reason) = feasibility::check(capacities, target) {
            debug!(%capacities, target, %reason, "rejected by feasibility check");
            return Ok((Outcome::Infeasible { reason }, None));
        }

        let discovery = BreadthFirstSearch::new(capacities, target)
            .with_state_limit(self.config.max_states)
            .run()?;
        let steps = label_path(
            &discovery.path(),
            capacities,
            target,
            self.config.terminal_marker,
        );

        Ok((Outcome::Feasible { steps }, Some(discovery.stats)))
    }
}

/// Solve a query with the default configuration.
///
/// # Example
///
/// ```rust
/// use jugpath::solve;
///
/// let outcome = jugpath::solve(2, 6, 5).unwrap();
/// assert!(!outcome.is_feasible());
///
/// assert!(solve(0, 6, 5).is_err());
/// ```
pub fn solve(x: u32, y: u32, target: u32) -> Result<Outcome, SolveError> {
    let capacities = Capacities::new(x, y)?;
    let target = NonZeroU32::new(target).ok_or(SolveError::InvalidInput { field: "target" })?;
    Solver::new().solve(&SolveRequest::new(capacities, target))
}
