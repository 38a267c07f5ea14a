//! Query results: labeled steps and the feasible/infeasible outcome.

use super::moves::{Action, Move};
use super::state::JugState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One labeled step of a solution.
///
/// Serializes as `{"step", "jugA", "jugB", "action", "move"?, "terminal"?}`.
/// `terminal` is only emitted when set. `move` extends the plain
/// `{step, jugA, jugB, action}` shape, so readers of that shape should
/// ignore keys they do not know. Unknown keys are ignored on input too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-indexed position in the solution
    pub step: usize,
    /// Volume in jug X after this step
    pub jug_a: u32,
    /// Volume in jug Y after this step
    pub jug_b: u32,
    /// Label derived from the state change
    pub action: Action,
    /// Move the search applied, when known
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub generated_by: Option<Move>,
    /// Terminal marker
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
}

impl Step {
    /// State reached after this step.
    pub fn state(&self) -> JugState {
        JugState::new(self.jug_a, self.jug_b)
    }
}

/// Why a target cannot be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// The target is larger than either jug.
    ExceedsCapacity { target: u32, max: u32 },
    /// The target is not a multiple of gcd(X, Y).
    NotDivisible { target: u32, gcd: u32 },
    /// Reason restored from serialized form.
    Other(String),
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExceedsCapacity { target, max } => write!(
                f,
                "Target amount {target} is greater than the maximum jug capacity {max}. No solution possible."
            ),
            Self::NotDivisible { target, gcd } => write!(
                f,
                "Target amount {target} is not a multiple of gcd(X, Y) = {gcd}. No solution possible."
            ),
            Self::Other(message) => f.write_str(message),
        }
    }
}

/// Result of one query.
///
/// Serializes as `{"feasible": false, "reason": ...}` or
/// `{"feasible": true, "steps": [...]}`.
///
/// # Example
///
/// ```rust
/// use jugpath::core::{InfeasibleReason, Outcome};
///
/// let outcome = Outcome::Infeasible {
///     reason: InfeasibleReason::NotDivisible { target: 5, gcd: 2 },
/// };
/// let json = serde_json::to_value(&outcome).unwrap();
/// assert_eq!(json["feasible"], false);
/// assert!(json["reason"].as_str().unwrap().contains("gcd"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "OutcomeRepr", try_from = "OutcomeRepr")]
pub enum Outcome {
    Infeasible { reason: InfeasibleReason },
    Feasible { steps: Vec<Step> },
}

impl Outcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    pub fn steps(&self) -> Option<&[Step]> {
        match self {
            Self::Feasible { steps } => Some(steps),
            Self::Infeasible { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&InfeasibleReason> {
        match self {
            Self::Infeasible { reason } => Some(reason),
            Self::Feasible { .. } => None,
        }
    }

    /// State after the last step, if there is one.
    pub fn final_state(&self) -> Option<JugState> {
        self.steps()
            .and_then(|steps| steps.last())
            .map(Step::state)
    }
}

#[derive(Serialize, Deserialize)]
struct OutcomeRepr {
    feasible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
}

impl From<Outcome> for OutcomeRepr {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Infeasible { reason } => Self {
                feasible: false,
                reason: Some(reason.to_string()),
                steps: None,
            },
            Outcome::Feasible { steps } => Self {
                feasible: true,
                reason: None,
                steps: Some(steps),
            },
        }
    }
}

impl TryFrom<OutcomeRepr> for Outcome {
    type Error = String;

    fn try_from(repr: OutcomeRepr) -> Result<Self, Self::Error> {
        match (repr.feasible, repr.reason, repr.steps) {
            (true, _, Some(steps)) => Ok(Outcome::Feasible { steps }),
            (true, _, None) => Err("feasible outcome is missing `steps`".to_string()),
            (false, Some(reason), _) => Ok(Outcome::Infeasible {
                reason: InfeasibleReason::Other(reason),
            }),
            (false, None, _) => Err("infeasible outcome is missing `reason`".to_string()),
        }
    }
}
