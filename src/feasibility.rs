//! Feasibility check run before any search.
//!
//! Integer combinations of the two capacities produce exactly the multiples
//! of their gcd (Bézout's identity), and a target must fit inside one jug.
//! Both conditions together decide reachability, so a rejected query never
//! reaches the search engine.

use crate::core::{Capacities, InfeasibleReason};

/// Verdict of the feasibility check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feasibility {
    Feasible,
    Infeasible(InfeasibleReason),
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible)
    }
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0) == a`, `gcd(0, b) == b` and `gcd(0, 0) == 0`.
///
/// # Example
///
/// ```rust
/// use jugpath::feasibility::gcd;
///
/// assert_eq!(gcd(6, 10), 2);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Decide whether `target` can be produced in one of the jugs.
///
/// The capacity bound is checked first, then divisibility by the gcd.
///
/// # Example
///
/// ```rust
/// use jugpath::core::{Capacities, InfeasibleReason};
/// use jugpath::feasibility::{check, Feasibility};
///
/// let caps = Capacities::new(2, 6).unwrap();
/// assert_eq!(check(caps, 4), Feasibility::Feasible);
/// assert_eq!(
///     check(caps, 5),
///     Feasibility::Infeasible(InfeasibleReason::NotDivisible { target: 5, gcd: 2 })
/// );
/// ```
pub fn check(caps: Capacities, target: u32) -> Feasibility {
    let max = caps.max();
    if target > max {
        return Feasibility::Infeasible(InfeasibleReason::ExceedsCapacity { target, max });
    }

    let g = gcd(caps.x(), caps.y());
    if g == 0 || target % g != 0 {
        return Feasibility::Infeasible(InfeasibleReason::NotDivisible { target, gcd: g });
    }

    Feasibility::Feasible
}
