use std::hash::Hash;

/// Minimal graph-provider interface — neighbor enumeration over opaque nodes.
///
/// Implementations must enumerate a finite set of neighbors and report the
/// same topology for repeated calls within one search.
pub trait Pather {
    /// Node identity. Nodes are values; the engine never mutates one.
    ///
    /// `Ord` is used only to break ties between equal-priority queue entries,
    /// so results are reproducible across runs.
    type Node: Copy + Eq + Hash + Ord;

    /// Append neighbors of `n` into `buf`. The caller clears `buf` before
    /// calling. Order is unspecified.
    fn neighbors(&self, n: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    ///
    /// The default treats every edge as unit cost.
    fn cost(&self, _from: Self::Node, _to: Self::Node) -> i32 {
        1
    }
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    ///
    /// Must be non-negative and must never overestimate the true cost
    /// (admissible), or the returned path may not be shortest. This is a
    /// precondition, not checked at runtime.
    fn estimate(&self, from: Self::Node, to: Self::Node) -> i32;
}
