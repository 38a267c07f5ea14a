//! Validation of raw solve requests.
//!
//! Raw requests carry signed integers straight from the caller. Every field
//! is checked and ALL violations are reported together using Stillwater's
//! `Validation`, so a caller sending three bad numbers learns about all
//! three at once.
//!
//! # Example
//!
//! ```rust
//! use jugpath::validation::RawRequest;
//! use stillwater::validation::Validation;
//!
//! let raw = RawRequest { x_capacity: 0, y_capacity: -3, target: 2 };
//!
//! match raw.validate() {
//!     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

mod violations;

pub use violations::InputViolation;

use crate::core::Capacities;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Display names used in violation messages.
pub const X_CAPACITY: &str = "X capacity";
pub const Y_CAPACITY: &str = "Y capacity";
pub const TARGET: &str = "Target amount";

/// Unvalidated request as received from a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    pub x_capacity: i64,
    pub y_capacity: i64,
    pub target: i64,
}

/// A request whose fields are known to be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SolveRequest {
    pub capacities: Capacities,
    pub target: u32,
}

impl SolveRequest {
    pub fn new(capacities: Capacities, target: NonZeroU32) -> Self {
        Self {
            capacities,
            target: target.get(),
        }
    }
}

impl RawRequest {
    /// Check every field, accumulating all violations.
    pub fn validate(&self) -> Validation<SolveRequest, NonEmptyVec<InputViolation>> {
        let checks = vec![
            positive(X_CAPACITY, self.x_capacity),
            positive(Y_CAPACITY, self.y_capacity),
            positive(TARGET, self.target),
        ];

        Validation::all_vec(checks).map(|values| {
            SolveRequest::new(Capacities::from_nonzero(values[0], values[1]), values[2])
        })
    }

    /// Same as [`validate`](Self::validate), flattened into a `Result`.
    pub fn into_request(self) -> Result<SolveRequest, Vec<InputViolation>> {
        match self.validate() {
            Validation::Success(request) => Ok(request),
            Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
        }
    }
}

fn positive(
    field: &'static str,
    value: i64,
) -> Validation<NonZeroU32, NonEmptyVec<InputViolation>> {
    if value < 1 {
        return Validation::fail(InputViolation::NotPositive { field, value });
    }
    match u32::try_from(value).ok().and_then(NonZeroU32::new) {
        Some(valid) => Validation::success(valid),
        None => Validation::fail(InputViolation::TooLarge {
            field,
            value,
            max: u32::MAX,
        }),
    }
}
