//! Remaining-cost estimates used to rank the frontier.

use gridstar_core::Coord;

use crate::distance;

/// Which estimate the search uses for `h`.
///
/// | Variant | Estimate | Admissible |
/// |---|---|---|
/// | `Euclidean` | straight line, rounded to 0.01 | within 0.005 |
/// | `Octile` | exact open-board 8-way cost | yes |
/// | `Zero` | always 0 (uniform-cost search) | yes |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Euclidean,
    Octile,
    Zero,
}

impl Heuristic {
    /// Estimate the cost of reaching `goal` from `from`.
    ///
    /// Pure and deterministic: the same pair always yields the same value.
    #[inline]
    pub fn estimate(self, from: Coord, goal: Coord) -> f64 {
        match self {
            Self::Euclidean => distance::euclidean(from, goal),
            Self::Octile => distance::octile(from, goal),
            Self::Zero => 0.0,
        }
    }
}
