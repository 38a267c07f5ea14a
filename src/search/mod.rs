//! State-space search engine.
//!
//! [`BreadthFirstSearch`] explores `(x, y)` states from the empty state and
//! records a parent-pointer [`SearchTree`]. [`label_path`] turns the route it
//! reconstructs into numbered [`Step`](crate::core::Step)s.
//!
//! Each run owns its frontier, visited set and predecessor map. Nothing is
//! shared between runs.

mod bfs;
mod label;

pub use bfs::{BreadthFirstSearch, Discovery, SearchRecord, SearchStats, SearchTree};
pub use label::{label_path, TerminalMarker};
