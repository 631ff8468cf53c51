//! Search node types: caller-built candidates and engine-scored nodes.

use std::fmt;

// ---------------------------------------------------------------------------
// Estimate
// ---------------------------------------------------------------------------

/// A heuristic estimate: either a known value or a deferred computation.
///
/// The deferred form exists for expensive heuristics. The closure runs at
/// most once — when the candidate is admitted to the frontier — and its
/// result is kept from then on. A candidate rejected before admission
/// (state already expanded, or no better than the frontier entry for the
/// same state) is dropped with the closure never called.
pub enum Estimate {
    /// An already-known estimate.
    Value(f64),
    /// A deferred computation, run once on admission.
    Deferred(Box<dyn FnOnce() -> f64>),
}

impl Estimate {
    /// Collapse to a concrete value, running the deferred computation if
    /// there is one.
    pub(crate) fn resolve(self) -> f64 {
        match self {
            Estimate::Value(v) => v,
            Estimate::Deferred(compute) => compute(),
        }
    }
}

impl From<f64> for Estimate {
    #[inline]
    fn from(v: f64) -> Self {
        Estimate::Value(v)
    }
}

impl fmt::Debug for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Estimate::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A state proposed by the caller: the start of a search, and every entry
/// produced by the expansion closure.
///
/// `id` is the uniqueness key of the whole search. Two candidates with
/// equal ids denote the same logical state, and at most one node is ever
/// retained for it.
#[derive(Debug)]
pub struct Candidate<I> {
    /// State identity.
    pub id: I,
    /// Accumulated cost from the start.
    pub cost: f64,
    /// Estimated remaining cost to a goal.
    pub estimate: Estimate,
}

impl<I> Candidate<I> {
    /// Candidate with a known estimate.
    pub fn new(id: I, cost: f64, estimate: f64) -> Self {
        Self {
            id,
            cost,
            estimate: Estimate::Value(estimate),
        }
    }

    /// Candidate with a deferred estimate, computed once on admission.
    pub fn deferred(id: I, cost: f64, estimate: impl FnOnce() -> f64 + 'static) -> Self {
        Self {
            id,
            cost,
            estimate: Estimate::Deferred(Box::new(estimate)),
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A scored node, owned by the search engine and returned in result paths.
///
/// The expansion closure and the goal predicate see nodes in this form:
/// the estimate is already a number, and [`f_cost`](Self::f_cost) is the
/// selection key the engine ranks the frontier by.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<I> {
    /// State identity.
    pub id: I,
    /// Accumulated cost from the start.
    pub cost: f64,
    /// Heuristic estimate of the remaining cost.
    pub estimate: f64,
    /// Arena slot of the predecessor on the best known route.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) parent: Option<usize>,
    /// Whether the node is still on the frontier.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) open: bool,
}

impl<I> Node<I> {
    /// Selection key: `cost + estimate`.
    #[inline]
    pub fn f_cost(&self) -> f64 {
        self.cost + self.estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_estimate_resolves_to_itself() {
        assert_eq!(Estimate::Value(3.5).resolve(), 3.5);
        assert_eq!(Estimate::from(2.0).resolve(), 2.0);
    }

    #[test]
    fn deferred_estimate_runs_the_closure() {
        let est = Estimate::Deferred(Box::new(|| 4.0 + 3.0));
        assert_eq!(est.resolve(), 7.0);
    }

    #[test]
    fn f_cost_is_cost_plus_estimate() {
        let node = Node {
            id: 'a',
            cost: 3.0,
            estimate: 7.0,
            parent: None,
            open: true,
        };
        assert_eq!(node.f_cost(), 10.0);
    }

    #[test]
    fn debug_hides_deferred_closure() {
        let cand = Candidate::deferred(1, 0.0, || 9.0);
        let repr = format!("{cand:?}");
        assert!(repr.contains("Deferred(..)"));

        let cand = Candidate::new(1, 0.0, 9.0);
        let repr = format!("{cand:?}");
        assert!(repr.contains("Value(9.0)"));
    }
}
