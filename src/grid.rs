use std::collections::HashSet;

use crate::distance::{chebyshev, manhattan};
use crate::geom::Point;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A rectangular grid graph with blockable cells.
///
/// Cells span `(0, 0)` inclusive to `(width, height)` exclusive. Adjacency is
/// 4-directional by default, 8-directional with [`with_diagonals`](Grid::with_diagonals).
/// Every passable step costs 1; the heuristic is Manhattan distance (Chebyshev
/// when diagonal movement is on), so paths found through it are shortest.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: HashSet<Point>,
    diagonals: bool,
}

impl Grid {
    /// Create an open grid of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            blocked: HashSet::new(),
            diagonals: false,
        }
    }

    /// Enable or disable diagonal (8-way) movement.
    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Make `p` impassable.
    pub fn block(&mut self, p: Point) {
        self.blocked.insert(p);
    }

    /// Make `p` passable again.
    pub fn unblock(&mut self, p: Point) {
        self.blocked.remove(&p);
    }

    /// Whether `p` has been blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.contains(p) && !self.is_blocked(p)
    }
}

impl Pather for Grid {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if self.diagonals {
            buf.extend(p.neighbors_8().into_iter().filter(|&n| self.passable(n)));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.passable(n)));
        }
    }
}

impl WeightedPather for Grid {}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        if self.diagonals {
            chebyshev(from, to)
        } else {
            manhattan(from, to)
        }
    }
}
