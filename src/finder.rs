use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Sentinel cost meaning "never reached" in [`PathFinder::cost_to`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Open-heap entry: a candidate node with its f/g scores at push time.
///
/// A node may appear in the heap more than once; older entries become stale
/// when a better g-score is found and are discarded on pop (lazy deletion).
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry<N> {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) node: N,
}

impl<N: Ord> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        // Ties: lower g, then smaller node, for a deterministic pop order.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable A* search state.
///
/// A `PathFinder` owns the open heap, closed set, g-score map and
/// parent-link map used by [`astar_path`](PathFinder::astar_path), so that
/// repeated queries reuse their allocations. Each search clears all state
/// first; nothing carries over between calls except capacity.
///
/// The finder holds no global state. Concurrent searches simply use one
/// `PathFinder` each.
pub struct PathFinder<N> {
    pub(crate) open: BinaryHeap<OpenEntry<N>>,
    pub(crate) closed: HashSet<N>,
    pub(crate) g: HashMap<N, i32>,
    pub(crate) parents: HashMap<N, N>,
    pub(crate) nbuf: Vec<N>,
    pub(crate) step_budget: Option<usize>,
}

impl<N: Copy + Eq + Hash + Ord> Default for PathFinder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Eq + Hash + Ord> PathFinder<N> {
    /// Create a new finder with no step budget.
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            g: HashMap::new(),
            parents: HashMap::new(),
            nbuf: Vec::with_capacity(8),
            step_budget: None,
        }
    }

    /// Create a finder that gives up after `max_steps` node expansions.
    ///
    /// A search that exhausts its budget returns `None`, exactly like an
    /// unreachable goal.
    pub fn with_step_budget(max_steps: usize) -> Self {
        let mut finder = Self::new();
        finder.step_budget = Some(max_steps);
        finder
    }

    /// Set or remove the expansion budget for subsequent searches.
    pub fn set_step_budget(&mut self, max_steps: Option<usize>) {
        self.step_budget = max_steps;
    }

    /// Best known cost from the start of the last search to `n`.
    ///
    /// Returns [`UNREACHABLE`] if `n` was never reached.
    pub fn cost_to(&self, n: N) -> i32 {
        self.g.get(&n).copied().unwrap_or(UNREACHABLE)
    }

    /// Reset all per-search state, keeping allocations.
    pub(crate) fn reset(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.g.clear();
        self.parents.clear();
    }
}
