use std::f64::consts::SQRT_2;

use gridstar_core::Coord;

/// Chebyshev (L∞) distance: the number of king moves between two cells.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance: the exact 8-way path cost on an open board, with unit
/// axis steps and `√2` diagonal steps.
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    f64::from(hi - lo) + f64::from(lo) * SQRT_2
}

/// Straight-line distance rounded to two decimals.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    round_to_hundredths(dr.hypot(dc))
}

/// Round half away from zero to two decimal places.
#[inline]
pub fn round_to_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_counts_king_moves() {
        assert_eq!(chebyshev(Coord::new(0, 0), Coord::new(2, 2)), 2);
        assert_eq!(chebyshev(Coord::new(0, 0), Coord::new(3, 7)), 7);
        assert_eq!(chebyshev(Coord::new(4, 4), Coord::new(4, 4)), 0);
    }

    #[test]
    fn octile_mixes_axis_and_diagonal() {
        let d = octile(Coord::new(0, 0), Coord::new(2, 5));
        assert!((d - (3.0 + 2.0 * SQRT_2)).abs() < 1e-12);
        assert_eq!(octile(Coord::new(1, 1), Coord::new(1, 4)), 3.0);
    }

    #[test]
    fn euclidean_is_rounded() {
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(3, 4)), 5.0);
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(1, 1)), 1.41);
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(2, 2)), 2.83);
        assert_eq!(euclidean(Coord::new(5, 1), Coord::new(3, 2)), 2.24);
    }

    #[test]
    fn euclidean_is_symmetric() {
        let a = Coord::new(7, 11);
        let b = Coord::new(29, 3);
        assert_eq!(euclidean(a, b), euclidean(b, a));
    }
}
