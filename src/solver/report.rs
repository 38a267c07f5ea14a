//! Per-query report wrapping an outcome with identifying metadata.

use crate::core::Outcome;
use crate::search::SearchStats;
use crate::validation::SolveRequest;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Record of one solved query.
/// `stats` is absent when the feasibility check rejected the query.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// Unique query identifier
    pub id: Uuid,

    /// When the query finished
    pub solved_at: DateTime<Utc>,

    /// The validated request
    pub request: SolveRequest,

    /// Feasible steps or the infeasibility reason
    pub outcome: Outcome,

    /// Search counters, when a search ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl SolveReport {
    pub(crate) fn new(
        request: SolveRequest,
        outcome: Outcome,
        stats: Option<SearchStats>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            solved_at: Utc::now(),
            request,
            outcome,
            stats,
        }
    }

    /// Number of steps in the solution, 0 when infeasible.
    pub fn step_count(&self) -> usize {
        self.outcome.steps().map_or(0, <[_]>::len)
    }
}
