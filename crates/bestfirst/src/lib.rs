//! Generic best-first graph search.
//!
//! This crate provides one search primitive: A* over a caller-defined
//! state space, which degrades to Dijkstra's algorithm with a zero
//! heuristic and runs in either cost-minimizing or cost-maximizing mode.
//! There is no graph type — the caller supplies a start [`Candidate`] and
//! an expansion closure producing neighbor candidates, and gets back the
//! discovered path as a `Vec` of scored [`Node`]s (empty when no goal is
//! reachable).
//!
//! - **States** are keyed by an opaque id (`Eq + Hash + Clone`); at most
//!   one node is retained per id.
//! - **Heuristics** are plain values or deferred closures ([`Estimate`]),
//!   evaluated at most once per admitted node.
//! - **Selection** follows the extreme `f = cost + estimate`, breaking
//!   ties by the extreme estimate, then by admission order.
//! - **Relaxation** re-routes a frontier node when the same state is
//!   rediscovered at a better cost; expanded states are never revisited.
//!
//! Optimality holds under the usual A* assumptions: non-negative edge
//! costs and an admissible heuristic (one that never overestimates the
//! true remaining cost). Both are the caller's responsibility.
//!
//! # Example
//!
//! ```
//! use bestfirst::{Candidate, Search};
//!
//! // Count from 0 to 5, one unit per step.
//! let mut search = Search::new();
//! let path = search.path(Candidate::new(0, 0.0, 5.0), |node| {
//!     let next = node.id + 1;
//!     vec![Candidate::new(next, node.cost + 1.0, f64::from(5 - next))]
//! });
//! assert_eq!(path.len(), 6);
//! assert_eq!(path.last().unwrap().cost, 5.0);
//! ```

mod distance;
mod node;
mod search;

pub use distance::{chebyshev, manhattan};
pub use node::{Candidate, Estimate, Node};
pub use search::{Mode, Search};
