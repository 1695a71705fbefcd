use crate::geom::Point;

/// Manhattan (L1) distance between two points.
///
/// An admissible heuristic for 4-directional unit-cost grids.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// An admissible heuristic for 8-directional unit-cost grids.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
