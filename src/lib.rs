//! Graph-agnostic A* shortest-path search.
//!
//! This crate provides an A* search engine over any graph whose nodes are
//! cheap, hashable values — 2D grids, hex maps, road networks, abstract
//! state spaces. The graph is supplied by the caller through a small trait
//! hierarchy; the engine owns the open/closed bookkeeping, cost accounting
//! and path reconstruction.
//!
//! All searches run through [`PathFinder`], which owns and reuses its
//! internal state so that repeated queries avoid reallocation after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | positive per-edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic estimate |
//!
//! # Example
//!
//! ```
//! use starpath::{Grid, PathFinder, Point};
//!
//! let grid = Grid::new(5, 5);
//! let mut finder = PathFinder::new();
//! let path = finder
//!     .astar_path(&grid, Point::new(0, 0), Point::new(4, 4))
//!     .unwrap();
//! assert_eq!(path.len(), 9); // 8 unit steps between opposite corners
//! ```

mod astar;
mod distance;
mod finder;
mod geom;
mod grid;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use finder::{PathFinder, UNREACHABLE};
pub use geom::Point;
pub use grid::Grid;
pub use traits::{AstarPather, Pather, WeightedPather};
