//! Error types for loading problems and writing reports.

use std::io;
use std::path::PathBuf;

use gridstar_core::{Bounds, Coord, GridError};
use gridstar_paths::SearchError;
use thiserror::Error;

/// A problem file could not be turned into a grid and two endpoints.
///
/// Line numbers are 1-based and count every line of the file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("problem file is empty, expected a `start_row start_col goal_row goal_col` line")]
    MissingHeader,

    #[error("line {line}: expected 4 coordinates, found {found}")]
    HeaderTokenCount { line: usize, found: usize },

    #[error("line {line}: `{token}` is not an integer")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}, column {col}: marker {marker} is neither 0 (free) nor 1 (blocked)")]
    InvalidMarker { line: usize, col: usize, marker: i64 },

    #[error("line {line}: {found} markers exceed the board width of {expected}")]
    TooManyColumns {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: board already has {expected} rows")]
    TooManyRows { line: usize, expected: usize },

    #[error("board has {found} rows, expected {expected}")]
    MissingRows { found: usize, expected: usize },

    #[error("{which} {coord} is outside the {bounds} board")]
    EndpointOutOfBounds {
        which: &'static str,
        coord: Coord,
        bounds: Bounds,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl LoadError {
    /// Create an invalid integer error.
    #[must_use]
    pub fn invalid_integer(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidInteger {
            line,
            token: token.into(),
        }
    }
}

/// Everything that can stop a solve run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
