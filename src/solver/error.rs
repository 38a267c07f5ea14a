//! Solver construction and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building a solver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State limit must be at least 1. Omit .max_states() to search without a limit")]
    ZeroStateLimit,
}

/// Errors that can occur when loading a solver configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for `SolverConfig`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
