//! The [`Grid`] type: an immutable occupancy map of [`Cell`]s.
//!
//! Cells are stored row-major with row 0 at the bottom of the board. Source
//! matrices (files, literals in tests) are written top row first, so
//! [`Grid::from_markers`] flips them on the way in and
//! [`Grid::markers_top_down`] flips them back on the way out.

use crate::cell::Cell;
use crate::error::{GridError, GridResult};
use crate::geom::{Bounds, Coord};

/// An immutable 2D occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Bounds,
}

impl Grid {
    /// Create a grid with every cell free.
    pub fn open(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![Cell::Free; bounds.len()],
            bounds,
        }
    }

    /// Create a grid with the listed coordinates blocked.
    ///
    /// Coordinates outside the board are rejected.
    pub fn with_blocked(
        rows: i32,
        cols: i32,
        blocked: impl IntoIterator<Item = Coord>,
    ) -> GridResult<Self> {
        let mut grid = Self::open(rows, cols);
        for c in blocked {
            let idx = grid
                .bounds
                .index(c)
                .ok_or(GridError::out_of_bounds(c, grid.bounds))?;
            grid.cells[idx] = Cell::Blocked;
        }
        Ok(grid)
    }

    /// Create a grid from a flat row-major buffer, bottom row first.
    pub fn from_cells(bounds: Bounds, cells: Vec<Cell>) -> GridResult<Self> {
        if cells.len() != bounds.len() {
            return Err(GridError::SizeMismatch {
                bounds,
                found: cells.len(),
                expected: bounds.len(),
            });
        }
        Ok(Self { cells, bounds })
    }

    /// Build a grid from marker rows given **top row first**.
    ///
    /// Source row 0 becomes logical row `rows - 1`. Every row must have the
    /// same width; markers must be `0` (free) or `1` (blocked).
    pub fn from_markers<R: AsRef<[i64]>>(source: &[R]) -> GridResult<Self> {
        let rows = source.len();
        let cols = source.first().map_or(0, |r| r.as_ref().len());
        let bounds = Bounds::new(rows as i32, cols as i32);
        let mut cells = vec![Cell::Free; bounds.len()];

        for (src_row, markers) in source.iter().enumerate() {
            let markers = markers.as_ref();
            if markers.len() != cols {
                return Err(GridError::RaggedRows {
                    row: src_row,
                    found: markers.len(),
                    expected: cols,
                });
            }
            let row = rows - 1 - src_row;
            for (col, &marker) in markers.iter().enumerate() {
                let cell = Cell::from_marker(marker).ok_or(GridError::InvalidMarker {
                    row: src_row,
                    col,
                    marker,
                })?;
                cells[row * cols + col] = cell;
            }
        }

        Ok(Self { cells, bounds })
    }

    /// The board extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` is on the board.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The cell at `c`, or `None` if `c` is off the board.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is impassable.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the board.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> GridResult<bool> {
        self.at(c)
            .map(Cell::is_blocked)
            .ok_or(GridError::out_of_bounds(c, self.bounds))
    }

    /// Count blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order, bottom row first.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Marker rows, top row first, the layout used by problem files.
    pub fn markers_top_down(&self) -> Vec<Vec<u8>> {
        let cols = self.bounds.cols as usize;
        if cols == 0 {
            return vec![Vec::new(); self.bounds.rows as usize];
        }
        self.cells
            .chunks(cols)
            .rev()
            .map(|row| row.iter().map(|c| c.marker()).collect())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, Cell);
    type IntoIter = Box<dyn Iterator<Item = (Coord, Cell)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
