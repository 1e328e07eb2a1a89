//! Error types for search operations.
//!
//! A search that runs out of frontier is **not** an error: it ends in
//! [`SearchState::Exhausted`](crate::SearchState::Exhausted). Errors here
//! mean the caller broke a precondition or the node store is inconsistent.

use gridstar_core::{Coord, GridError};
use thiserror::Error;

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while searching or rebuilding a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A board query failed, typically a coordinate off the board.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Two linked nodes are not one king-step apart.
    #[error("parent link from {from} to {to} is not a single step")]
    NonAdjacentStep { from: Coord, to: Coord },
}

impl SearchError {
    /// Returns `true` if a coordinate fell outside the board.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::Grid(e) if e.is_out_of_bounds())
    }
}
