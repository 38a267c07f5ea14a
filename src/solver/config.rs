//! Serializable solver settings.

use crate::search::TerminalMarker;
use crate::solver::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by every query a [`Solver`](super::Solver) runs.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Example
///
/// ```rust
/// use jugpath::search::TerminalMarker;
/// use jugpath::solver::SolverConfig;
///
/// let config = SolverConfig::from_json(r#"{"max_states": 50000}"#).unwrap();
/// assert_eq!(config.max_states, Some(50_000));
/// assert_eq!(config.terminal_marker, TerminalMarker::ReturnToEmpty);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Upper bound on states discovered per query; `None` searches the
    /// whole reachable space
    pub max_states: Option<usize>,

    /// Which steps carry the terminal marker
    pub terminal_marker: TerminalMarker,
}

impl SolverConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}
