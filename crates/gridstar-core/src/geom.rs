//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` with a bottom-left origin: row 0 is the
//! bottom row of the board and rows grow upwards, columns grow to the right.
//! Every crate in the workspace uses this one convention.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position on the board, `(row, col)`, row 0 at the bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0), the bottom-left cell.
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the coordinate lies inside `bounds`.
    #[inline]
    pub fn in_bounds(self, bounds: &Bounds) -> bool {
        bounds.contains(self)
    }

    /// All eight neighbours, clockwise starting from the one above.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        [
            self.shift(1, 0),
            self.shift(1, 1),
            self.shift(0, 1),
            self.shift(-1, 1),
            self.shift(-1, 0),
            self.shift(-1, -1),
            self.shift(0, -1),
            self.shift(1, -1),
        ]
    }

    /// Whether `other` is one king-step away (the eight neighbours).
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let d = other - self;
        d != Coord::ZERO && d.row.abs() <= 1 && d.col.abs() <= 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, rows) × [0, cols)` covered by a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds for a `rows × cols` board. Negative sizes clamp to 0.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the board has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` is inside the board.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Convert a coordinate to a flat row-major index. `None` if outside.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate, bottom row first.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let cols = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn coord_orders_by_row_then_col() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbors_are_all_adjacent_and_distinct() {
        let c = Coord::new(5, 5);
        let ns = c.neighbors_8();
        for (i, n) in ns.iter().enumerate() {
            assert!(c.is_adjacent(*n));
            assert!(!ns[i + 1..].contains(n));
        }
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(7, 5)));
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(3, 2);
        assert_eq!(b.len(), 6);
        assert!(b.contains(Coord::new(0, 0)));
        assert!(b.contains(Coord::new(2, 1)));
        assert!(!b.contains(Coord::new(3, 0)));
        assert!(!b.contains(Coord::new(0, 2)));
        assert!(!b.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn bounds_negative_clamps_to_empty() {
        let b = Bounds::new(-3, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn index_and_coord_agree() {
        let b = Bounds::new(4, 7);
        for (i, c) in b.iter().enumerate() {
            assert_eq!(b.index(c), Some(i));
            assert_eq!(b.coord(i), c);
        }
        assert_eq!(b.index(Coord::new(4, 0)), None);
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let b = Bounds::new(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let cs: Vec<_> = it.collect();
        assert_eq!(cs[0], Coord::new(0, 0));
        assert_eq!(cs[3], Coord::new(1, 0));
        assert_eq!(cs[5], Coord::new(1, 2));
    }
}
