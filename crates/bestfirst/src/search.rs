//! The best-first search engine.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::node::{Candidate, Node};

/// Optimization direction of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Minimize accumulated cost (shortest path; A*, or Dijkstra with a
    /// zero heuristic).
    #[default]
    Min,
    /// Maximize accumulated cost (best-value search).
    Max,
}

/// Reusable best-first search engine.
///
/// The engine owns a node arena, an id-to-slot map, and the frontier, and
/// recycles their allocations across runs: each call to
/// [`path`](Self::path) or [`path_until`](Self::path_until) starts from a
/// cleared state, so runs never share nodes.
///
/// Frontier selection is a linear scan in admission order with strict
/// comparisons: the extreme `f_cost` wins, ties fall to the extreme
/// estimate in the same direction, and remaining ties to the
/// earliest-admitted node. Both the scan and the relaxation rule assume
/// non-negative edge costs and, for optimal results, an admissible
/// heuristic.
pub struct Search<I> {
    mode: Mode,
    /// Node arena, in admission order.
    nodes: Vec<Node<I>>,
    /// State identity to arena slot.
    slots: HashMap<I, usize>,
    /// Frontier as arena slots, in admission order.
    open: Vec<usize>,
}

impl<I: Eq + Hash + Clone> Search<I> {
    /// Create a minimizing engine.
    pub fn new() -> Self {
        Self::with_mode(Mode::Min)
    }

    /// Create an engine with an explicit optimization direction.
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            nodes: Vec::new(),
            slots: HashMap::new(),
            open: Vec::new(),
        }
    }

    /// The engine's optimization direction.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Search from `start`, treating nodes with a zero estimate as goals.
    ///
    /// Equivalent to [`path_until`](Self::path_until) with the predicate
    /// `node.estimate == 0.0`.
    pub fn path<E, C>(&mut self, start: Candidate<I>, expand: E) -> Vec<Node<I>>
    where
        E: FnMut(&Node<I>) -> C,
        C: IntoIterator,
        C::Item: Into<Option<Candidate<I>>>,
    {
        self.path_until(start, expand, |node| node.estimate == 0.0)
    }

    /// Search from `start` until a node satisfying `is_goal` is selected.
    ///
    /// `expand` is called once per expanded node and must produce that
    /// node's neighbor candidates. It may return an eager collection or a
    /// lazy iterator; the sequence is drained exactly once, in order.
    /// Items convert into `Option<Candidate>` so callers with unreliable
    /// producers can emit `None`, which is skipped without affecting valid
    /// siblings.
    ///
    /// Returns the discovered path from `start` to the goal node,
    /// inclusive, in traversal order. An empty `Vec` means the frontier
    /// was exhausted without selecting a goal. A `start` that already
    /// satisfies `is_goal` yields a single-node path and `expand` is never
    /// called.
    pub fn path_until<E, C, F>(
        &mut self,
        start: Candidate<I>,
        mut expand: E,
        mut is_goal: F,
    ) -> Vec<Node<I>>
    where
        E: FnMut(&Node<I>) -> C,
        C: IntoIterator,
        C::Item: Into<Option<Candidate<I>>>,
        F: FnMut(&Node<I>) -> bool,
    {
        self.clear();
        self.admit(start, None);

        let mut goal = None;
        let mut expanded = 0usize;

        while let Some(pos) = self.select() {
            let slot = self.open[pos];
            if is_goal(&self.nodes[slot]) {
                goal = Some(slot);
                break;
            }

            self.open.remove(pos);
            self.nodes[slot].open = false;
            expanded += 1;
            trace!(
                "expand #{slot}: g={} f={}",
                self.nodes[slot].cost,
                self.nodes[slot].f_cost()
            );

            for item in expand(&self.nodes[slot]) {
                let Some(candidate) = item.into() else {
                    continue;
                };
                match self.slots.get(&candidate.id).copied() {
                    // Already expanded; never re-admitted.
                    Some(known) if !self.nodes[known].open => {}
                    Some(known) => self.relax(known, slot, candidate),
                    None => self.admit(candidate, Some(slot)),
                }
            }
        }

        debug!(
            "search done: expanded={expanded} frontier={} found={}",
            self.open.len(),
            goal.is_some()
        );
        self.reconstruct(goal)
    }

    /// Score a candidate and insert it into the frontier.
    ///
    /// This is the one place a deferred estimate runs.
    fn admit(&mut self, candidate: Candidate<I>, parent: Option<usize>) {
        let Candidate { id, cost, estimate } = candidate;
        let estimate = estimate.resolve();
        let slot = self.nodes.len();
        self.slots.insert(id.clone(), slot);
        self.nodes.push(Node {
            id,
            cost,
            estimate,
            parent,
            open: true,
        });
        self.open.push(slot);
    }

    /// Re-route a frontier node through a better parent, if `candidate`
    /// reaches the same state more cheaply (min) or more valuably (max).
    ///
    /// The node keeps its estimate either way; the candidate is dropped,
    /// its own estimate unevaluated.
    fn relax(&mut self, known: usize, parent: usize, candidate: Candidate<I>) {
        let node = &mut self.nodes[known];
        let better = match self.mode {
            Mode::Min => candidate.cost < node.cost,
            Mode::Max => candidate.cost > node.cost,
        };
        if better {
            node.cost = candidate.cost;
            node.parent = Some(parent);
        }
    }

    /// Scan the frontier for the node with the extreme selection key.
    ///
    /// Returns a position in `self.open`, or `None` when the frontier is
    /// exhausted. The comparisons are strict, so on equal `f_cost` and
    /// equal estimate the earliest-admitted node is kept.
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, f64, f64)> = None;
        for (pos, &slot) in self.open.iter().enumerate() {
            let node = &self.nodes[slot];
            let (f, h) = (node.f_cost(), node.estimate);
            let better = match best {
                None => true,
                Some((_, bf, bh)) => match self.mode {
                    Mode::Min => f < bf || (f == bf && h < bh),
                    Mode::Max => f > bf || (f == bf && h > bh),
                },
            };
            if better {
                best = Some((pos, f, h));
            }
        }
        best.map(|(pos, ..)| pos)
    }

    /// Walk parent slots back from the goal and reverse into start-first
    /// order. No goal, no path: an empty `Vec`.
    fn reconstruct(&self, goal: Option<usize>) -> Vec<Node<I>> {
        let mut path = Vec::new();
        let mut cursor = goal;
        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            path.push(node.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.slots.clear();
        self.open.clear();
    }
}

impl<I: Eq + Hash + Clone> Default for Search<I> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_nodes_round_trip() {
        let mut search = Search::new();
        let path = search.path(Candidate::new(0, 0.0, 2.0), |node| {
            vec![Candidate::new(
                node.id + 1,
                node.cost + 1.0,
                (2.0 - node.cost - 1.0).max(0.0),
            )]
        });
        assert_eq!(path.len(), 3);

        let json = serde_json::to_string(&path).unwrap();
        let back: Vec<Node<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), path.len());
        for (a, b) in path.iter().zip(&back) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.cost, b.cost);
            assert_eq!(a.estimate, b.estimate);
        }
    }

    #[test]
    fn mode_round_trips() {
        let json = serde_json::to_string(&Mode::Max).unwrap();
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::Max);
    }
}
