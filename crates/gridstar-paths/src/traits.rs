use gridstar_core::{Bounds, Coord, Grid, GridResult};

/// What the search needs to know about the board it walks.
pub trait Terrain {
    /// The board extent. Every coordinate the search touches lies inside it.
    fn bounds(&self) -> Bounds;

    /// Whether `c` is impassable. Must fail for coordinates outside
    /// [`bounds`](Self::bounds).
    fn is_blocked(&self, c: Coord) -> GridResult<bool>;
}

impl Terrain for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn is_blocked(&self, c: Coord) -> GridResult<bool> {
        Grid::is_blocked(self, c)
    }
}
