use std::f64::consts::SQRT_2;
use std::fmt;

use gridstar_core::Coord;

/// One king-step on the board, named by compass direction.
///
/// Rows grow upwards, so `North` is `(+1, 0)`. The discriminant is the move
/// code written to reports; codes run clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Move {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Move {
    /// Every move in code order. Expansion visits neighbours in this order.
    pub const ALL: [Move; 8] = [
        Move::North,
        Move::NorthEast,
        Move::East,
        Move::SouthEast,
        Move::South,
        Move::SouthWest,
        Move::West,
        Move::NorthWest,
    ];

    /// The `(Δrow, Δcol)` offset of this move.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Self::North => Coord::new(1, 0),
            Self::NorthEast => Coord::new(1, 1),
            Self::East => Coord::new(0, 1),
            Self::SouthEast => Coord::new(-1, 1),
            Self::South => Coord::new(-1, 0),
            Self::SouthWest => Coord::new(-1, -1),
            Self::West => Coord::new(0, -1),
            Self::NorthWest => Coord::new(1, -1),
        }
    }

    /// Report code of this move.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a report code.
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// The move whose offset is `delta`, if it is a single king-step.
    pub fn from_delta(delta: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.delta() == delta)
    }

    /// The move that takes `from` to `to`, if they are adjacent.
    #[inline]
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Self::from_delta(to - from)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }

    /// Cost of taking this step: `1` along an axis, `√2` diagonally.
    #[inline]
    pub fn step_cost(self) -> f64 {
        if self.is_diagonal() { SQRT_2 } else { 1.0 }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Cached neighbour computation helper.
///
/// Enumerates the eight neighbours of a cell in [`Move::ALL`] order,
/// keeping those accepted by a predicate, without reallocating.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<(Coord, Move)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-directional neighbours of `c` with the move that reaches
    /// each, keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[(Coord, Move)] {
        self.buf.clear();
        for m in Move::ALL {
            let n = c + m.delta();
            if keep(n) {
                self.buf.push((n, m));
            }
        }
        &self.buf
    }
}
