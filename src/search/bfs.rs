//! Breadth-first traversal over jug states.

use crate::core::{successors, Capacities, JugState, JugTransition, Move, StatePath};
use crate::error::SolveError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

/// How a visited state was discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRecord {
    /// State that discovered this one; `None` for the start state
    pub predecessor: Option<JugState>,
    /// Move applied to the predecessor
    pub generated_by: Option<Move>,
    /// BFS level, 0 for the start state
    pub depth: usize,
}

/// Parent-pointer tree built during one search, keyed by state.
///
/// Every state is inserted once, so following predecessors always ends at
/// the root.
#[derive(Clone, Debug)]
pub struct SearchTree {
    root: JugState,
    records: HashMap<JugState, SearchRecord>,
}

impl SearchTree {
    fn rooted_at(root: JugState) -> Self {
        let mut records = HashMap::new();
        records.insert(
            root,
            SearchRecord {
                predecessor: None,
                generated_by: None,
                depth: 0,
            },
        );
        Self { root, records }
    }

    pub fn root(&self) -> JugState {
        self.root
    }

    pub fn record(&self, state: &JugState) -> Option<&SearchRecord> {
        self.records.get(state)
    }

    pub fn contains(&self, state: &JugState) -> bool {
        self.records.contains_key(state)
    }

    /// Number of discovered states, root included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the root is inserted on construction.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reconstruct the route from the root to `goal`.
    ///
    /// Returns an empty path when `goal` was never discovered or is the root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jugpath::core::{Capacities, JugState};
    /// use jugpath::search::BreadthFirstSearch;
    ///
    /// let caps = Capacities::new(5, 3).unwrap();
    /// let found = BreadthFirstSearch::new(caps, 4).run().unwrap();
    /// let path = found.tree.path_to(found.goal);
    ///
    /// assert_eq!(path.states().first(), Some(&JugState::EMPTY));
    /// assert_eq!(path.final_state(), Some(found.goal));
    /// assert!(found.tree.path_to(JugState::new(99, 99)).is_empty());
    /// ```
    pub fn path_to(&self, goal: JugState) -> StatePath {
        let mut transitions = Vec::new();
        let mut current = goal;
        while let Some(record) = self.records.get(&current) {
            let Some(predecessor) = record.predecessor else {
                break;
            };
            transitions.push(JugTransition {
                from: predecessor,
                to: current,
                generated_by: record.generated_by,
            });
            current = predecessor;
        }
        transitions.reverse();
        StatePath::from_transitions(transitions)
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States removed from the frontier
    pub explored: usize,
    /// States ever marked visited, start included
    pub discovered: usize,
    /// BFS level of the goal
    pub depth: usize,
}

/// A goal reached by the search, with the tree that reached it.
#[derive(Clone, Debug)]
pub struct Discovery {
    pub goal: JugState,
    pub tree: SearchTree,
    pub stats: SearchStats,
}

impl Discovery {
    /// Route from the empty state to the goal.
    pub fn path(&self) -> StatePath {
        self.tree.path_to(self.goal)
    }
}

/// Shortest-path search from the empty state to any state touching a target.
///
/// The frontier is FIFO and successors are enqueued in [`Move::ALL`] order,
/// so the first goal dequeued is at minimum depth and the result is fully
/// deterministic. The caller is expected to have checked feasibility first.
///
/// # Example
///
/// ```rust
/// use jugpath::core::{Capacities, JugState};
/// use jugpath::search::BreadthFirstSearch;
///
/// let caps = Capacities::new(4, 3).unwrap();
/// let found = BreadthFirstSearch::new(caps, 2).run().unwrap();
///
/// assert_eq!(found.goal, JugState::new(4, 2));
/// assert_eq!(found.stats.depth, 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BreadthFirstSearch {
    caps: Capacities,
    target: u32,
    state_limit: Option<usize>,
}

impl BreadthFirstSearch {
    pub fn new(caps: Capacities, target: u32) -> Self {
        Self {
            caps,
            target,
            state_limit: None,
        }
    }

    /// Abort once more than `limit` states have been discovered.
    pub fn with_state_limit(mut self, limit: Option<usize>) -> Self {
        self.state_limit = limit;
        self
    }

    /// Run the search to completion.
    ///
    /// Fails with [`SolveError::SearchExhausted`] if the frontier empties
    /// first, and with [`SolveError::StateLimitExceeded`] if a limit is set
    /// and exceeded.
    pub fn run(&self) -> Result<Discovery, SolveError> {
        debug!(capacities = %self.caps, target = self.target, "starting breadth-first search");

        let mut tree = SearchTree::rooted_at(JugState::EMPTY);
        let mut frontier = VecDeque::from([JugState::EMPTY]);
        let mut explored = 0;

        while let Some(current) = frontier.pop_front() {
            explored += 1;
            let depth = tree.record(&current).map_or(0, |r| r.depth);

            if current.touches(self.target) {
                let stats = SearchStats {
                    explored,
                    discovered: tree.len(),
                    depth,
                };
                debug!(
                    goal = %current,
                    explored,
                    discovered = stats.discovered,
                    depth,
                    "goal reached"
                );
                return Ok(Discovery {
                    goal: current,
                    tree,
                    stats,
                });
            }

            for (generated_by, next) in successors(current, self.caps) {
                if tree.contains(&next) {
                    continue;
                }
                if let Some(limit) = self.state_limit {
                    if tree.len() >= limit {
                        warn!(limit, "state limit reached during search");
                        return Err(SolveError::StateLimitExceeded {
                            limit,
                            discovered: tree.len() + 1,
                        });
                    }
                }
                tree.records.insert(
                    next,
                    SearchRecord {
                        predecessor: Some(current),
                        generated_by: Some(generated_by),
                        depth: depth + 1,
                    },
                );
                frontier.push_back(next);
            }
        }

        warn!(capacities = %self.caps, target = self.target, explored, "frontier exhausted");
        Err(SolveError::SearchExhausted {
            capacities: self.caps,
            target: self.target,
            explored,
        })
    }
}
