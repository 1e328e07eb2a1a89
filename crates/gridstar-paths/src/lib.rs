//! Shortest-path search on 8-connected occupancy grids.
//!
//! This crate implements A* over any [`Terrain`] (a [`Grid`](gridstar_core::Grid)
//! out of the box) with unit axis steps and `√2` diagonal steps:
//!
//! - **Search engine** ([`SearchEngine`], [`find_path`]): tick-driven state
//!   machine ending in [`SearchState::GoalReached`] or
//!   [`SearchState::Exhausted`]
//! - **Node store** ([`NodeStore`]): arena of discovered nodes, parent links
//!   as [`NodeHandle`]s
//! - **Frontier** ([`Frontier`]): binary heap on `f`, ties broken by
//!   discovery order, lazy decrease-key
//! - **Path reconstruction** ([`reconstruct`], [`Path`]): start→goal moves
//!   and per-node costs
//!
//! ```
//! use gridstar_core::{Coord, Grid};
//! use gridstar_paths::{find_path, Move, SearchConfig};
//!
//! let grid = Grid::open(3, 3);
//! let outcome = find_path(&grid, Coord::new(0, 0), Coord::new(2, 2), SearchConfig::default())?;
//! let path = outcome.path()?.expect("open board");
//! assert_eq!(path.moves(), &[Move::NorthEast, Move::NorthEast]);
//! # Ok::<(), gridstar_paths::SearchError>(())
//! ```

mod astar;
mod distance;
mod error;
mod frontier;
mod heuristic;
mod neighbors;
mod path;
mod store;
mod traits;

pub use astar::{SearchConfig, SearchEngine, SearchOutcome, SearchState, SearchStats, find_path};
pub use distance::{chebyshev, euclidean, octile, round_to_hundredths};
pub use error::{SearchError, SearchResult};
pub use frontier::Frontier;
pub use heuristic::Heuristic;
pub use neighbors::{Move, Neighbors};
pub use path::{Path, PathStep, reconstruct};
pub use store::{Ancestors, NodeHandle, NodeStore, SearchNode};
pub use traits::Terrain;
