//! Jug capacities and fill-level states.
//!
//! Both types are small `Copy` values. A [`JugState`] is only meaningful
//! relative to the [`Capacities`] of the query that produced it.

use crate::error::SolveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Capacities of the two jugs, fixed for the duration of one query.
///
/// Both capacities are always positive.
///
/// # Example
///
/// ```rust
/// use jugpath::core::Capacities;
///
/// let caps = Capacities::new(4, 3).unwrap();
/// assert_eq!(caps.max(), 4);
/// assert_eq!(caps.state_count(), 20);
///
/// assert!(Capacities::new(0, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Capacities {
    x: u32,
    y: u32,
}

impl Capacities {
    /// Create capacities, rejecting a zero capacity for either jug.
    pub fn new(x: u32, y: u32) -> Result<Self, SolveError> {
        if x == 0 {
            return Err(SolveError::InvalidInput { field: "x_capacity" });
        }
        if y == 0 {
            return Err(SolveError::InvalidInput { field: "y_capacity" });
        }
        Ok(Self { x, y })
    }

    /// Create capacities from values already known to be positive.
    pub fn from_nonzero(x: NonZeroU32, y: NonZeroU32) -> Self {
        Self {
            x: x.get(),
            y: y.get(),
        }
    }

    /// Capacity of jug X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Capacity of jug Y.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// The larger of the two capacities.
    pub fn max(&self) -> u32 {
        self.x.max(self.y)
    }

    /// Size of the full state lattice, `(X + 1) * (Y + 1)`.
    pub fn state_count(&self) -> u64 {
        (u64::from(self.x) + 1) * (u64::from(self.y) + 1)
    }

    /// Check that a state lies inside the capacity rectangle.
    pub fn contains(&self, state: JugState) -> bool {
        state.x <= self.x && state.y <= self.y
    }
}

impl fmt::Display for Capacities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={}, Y={}", self.x, self.y)
    }
}

/// Current fill levels of the two jugs.
///
/// Equality and hashing are structural on `(x, y)`, so states can key
/// the visited set and predecessor map of the search directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JugState {
    /// Volume currently in jug X
    pub x: u32,
    /// Volume currently in jug Y
    pub y: u32,
}

impl JugState {
    /// Both jugs empty; every search starts here.
    pub const EMPTY: JugState = JugState { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Check whether either jug holds exactly `target`.
    pub fn touches(&self, target: u32) -> bool {
        self.x == target || self.y == target
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
