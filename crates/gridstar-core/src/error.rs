//! Error types for grid construction and queries.

use thiserror::Error;

use crate::geom::{Bounds, Coord};

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while building or querying a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate lies outside the board.
    #[error("coordinate {coord} is outside the {bounds} board")]
    OutOfBounds { coord: Coord, bounds: Bounds },

    /// A source marker is neither free (`0`) nor blocked (`1`).
    #[error("invalid marker {marker} at source row {row}, column {col}")]
    InvalidMarker { row: usize, col: usize, marker: i64 },

    /// Source rows do not all have the same width.
    #[error("source row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A flat cell buffer does not match the requested dimensions.
    #[error("cell buffer holds {found} cells, board {bounds} needs {expected}")]
    SizeMismatch {
        bounds: Bounds,
        found: usize,
        expected: usize,
    },
}

impl GridError {
    /// Create an out-of-bounds error.
    #[must_use]
    pub const fn out_of_bounds(coord: Coord, bounds: Bounds) -> Self {
        Self::OutOfBounds { coord, bounds }
    }

    /// Returns `true` if this is an out-of-bounds error.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
