//! Builder for configuring solvers.

use crate::search::TerminalMarker;
use crate::solver::config::SolverConfig;
use crate::solver::error::BuildError;
use crate::solver::Solver;

/// Builder for constructing a [`Solver`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use jugpath::search::TerminalMarker;
/// use jugpath::solver::SolverBuilder;
///
/// let solver = SolverBuilder::new()
///     .max_states(10_000)
///     .terminal_marker(TerminalMarker::TargetReached)
///     .build()
///     .unwrap();
///
/// assert_eq!(solver.config().max_states, Some(10_000));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SolverBuilder {
    config: SolverConfig,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the number of states discovered per query.
    pub fn max_states(mut self, limit: usize) -> Self {
        self.config.max_states = Some(limit);
        self
    }

    /// Set which steps carry the terminal marker.
    pub fn terminal_marker(mut self, marker: TerminalMarker) -> Self {
        self.config.terminal_marker = marker;
        self
    }

    /// Build the solver.
    /// Returns an error if the configuration is unusable.
    pub fn build(self) -> Result<Solver, BuildError> {
        if self.config.max_states == Some(0) {
            return Err(BuildError::ZeroStateLimit);
        }
        Ok(Solver {
            config: self.config,
        })
    }
}
