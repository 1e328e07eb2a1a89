//! **gridstar-core**: board geometry and occupancy types.
//!
//! This crate provides the foundational types used across the *gridstar*
//! workspace: `(row, col)` coordinates with a bottom-left origin, board
//! bounds, free/blocked cells and the immutable occupancy [`Grid`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use geom::{Bounds, BoundsIter, Coord};
pub use grid::Grid;
