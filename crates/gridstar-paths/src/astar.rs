//! A* search over a [`Terrain`], one tick at a time.
//!
//! The engine is a small state machine. It starts in
//! [`SearchState::Exploring`] with the start node on the frontier; every
//! [`tick`](SearchEngine::tick) pops the cheapest open node and either
//! finishes on the goal or expands the eight neighbours. An empty frontier
//! (or the optional tick limit) ends the run in [`SearchState::Exhausted`].

use gridstar_core::{Coord, GridError};
use log::{debug, trace, warn};

use crate::error::SearchResult;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::neighbors::Neighbors;
use crate::path::{Path, reconstruct};
use crate::store::{NodeHandle, NodeStore};
use crate::traits::Terrain;

/// Search tuning knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Estimate used for `h`.
    pub heuristic: Heuristic,
    /// Give up after this many ticks. `None` runs until the frontier is empty,
    /// which always terminates on a finite board.
    pub max_ticks: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub const fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }
}

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frontier pops, including the final one that found the goal.
    pub ticks: usize,
    /// Nodes ever created in the store, the seed included.
    pub nodes_created: usize,
    /// Coordinates moved to the closed set.
    pub nodes_expanded: usize,
    /// Open nodes whose cost was lowered by decrease-key.
    pub nodes_refined: usize,
    /// Largest number of live open nodes at any point.
    pub peak_frontier: usize,
    /// Whether the run stopped because of [`SearchConfig::max_ticks`].
    pub cut_off: bool,
}

/// Where the engine is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Exploring,
    /// The goal was popped from the frontier; the handle is its node.
    GoalReached(NodeHandle),
    /// No path exists, or the tick limit was hit.
    Exhausted,
}

impl SearchState {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Exploring)
    }
}

/// A single A* run from `start` to `goal`.
pub struct SearchEngine<'a, T: Terrain + ?Sized> {
    terrain: &'a T,
    goal: Coord,
    start: Coord,
    config: SearchConfig,
    store: NodeStore,
    frontier: Frontier,
    closed: Vec<bool>,
    nbuf: Neighbors,
    state: SearchState,
    stats: SearchStats,
}

impl<'a, T: Terrain + ?Sized> SearchEngine<'a, T> {
    /// Prepare a search, seeding the frontier with the start node.
    ///
    /// Fails if either endpoint lies off the board. Blocked endpoints are
    /// allowed: a blocked goal simply ends in [`SearchState::Exhausted`].
    pub fn new(
        terrain: &'a T,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> SearchResult<Self> {
        let bounds = terrain.bounds();
        if terrain.is_blocked(start)? {
            warn!("start {start} is blocked, searching from it anyway");
        }
        if terrain.is_blocked(goal)? {
            warn!("goal {goal} is blocked and cannot be reached");
        }

        let mut store = NodeStore::new();
        let mut frontier = Frontier::new(bounds.len());
        let h = config.heuristic.estimate(start, goal);
        let seed = store.create(None, start, 0.0, h);
        frontier.push(Self::slot_in(terrain, start)?, seed, h);

        debug!(
            "search {start} -> {goal} on {bounds} board, heuristic {:?}",
            config.heuristic
        );

        Ok(Self {
            terrain,
            goal,
            start,
            config,
            store,
            frontier,
            closed: vec![false; bounds.len()],
            nbuf: Neighbors::new(),
            state: SearchState::Exploring,
            stats: SearchStats {
                nodes_created: 1,
                peak_frontier: 1,
                ..SearchStats::default()
            },
        })
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The nodes discovered so far.
    #[inline]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Number of live open nodes.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Whether `c` has been expanded. `false` for coordinates off the board.
    pub fn is_closed(&self, c: Coord) -> bool {
        self.terrain
            .bounds()
            .index(c)
            .is_some_and(|i| self.closed[i])
    }

    /// Advance the search by one frontier pop.
    ///
    /// Returns the state after the tick. Once terminal, further ticks are
    /// no-ops that return the same state.
    pub fn tick(&mut self) -> SearchResult<SearchState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if self.config.max_ticks.is_some_and(|limit| self.stats.ticks >= limit) {
            warn!(
                "search cut off after {} ticks with {} nodes open",
                self.stats.ticks,
                self.frontier.len()
            );
            self.stats.cut_off = true;
            self.state = SearchState::Exhausted;
            return Ok(self.state);
        }

        let Some(current) = self.frontier.pop(&self.store) else {
            debug!(
                "frontier empty after {} ticks, {} nodes: no path",
                self.stats.ticks, self.stats.nodes_created
            );
            self.state = SearchState::Exhausted;
            return Ok(self.state);
        };
        self.stats.ticks += 1;

        let node = *self.store.get(current);
        if node.position == self.goal {
            debug!(
                "goal {} reached after {} ticks, {} nodes, cost {:.2}",
                self.goal, self.stats.ticks, self.stats.nodes_created, node.g
            );
            self.state = SearchState::GoalReached(current);
            return Ok(self.state);
        }

        let ci = self.slot(node.position)?;
        self.closed[ci] = true;
        self.stats.nodes_expanded += 1;
        trace!("expand {} g={:.2} f={:.2}", node.position, node.g, node.f);

        let bounds = self.terrain.bounds();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for &(next, mv) in nbuf.all(node.position, |n| bounds.contains(n)) {
            if self.terrain.is_blocked(next)? {
                continue;
            }
            let ni = self.slot(next)?;
            if self.closed[ni] {
                continue;
            }

            let g = node.g + mv.step_cost();
            match self.frontier.open_at(ni) {
                Some(open) => {
                    if g >= self.store.get(open).g {
                        continue;
                    }
                    self.store.refine(open, current, g);
                    self.frontier.push(ni, open, self.store.get(open).f);
                    self.stats.nodes_refined += 1;
                }
                None => {
                    let h = self.config.heuristic.estimate(next, self.goal);
                    let handle = self.store.create(Some(current), next, g, h);
                    self.frontier.push(ni, handle, g + h);
                }
            }
        }

        self.nbuf = nbuf;
        self.stats.nodes_created = self.store.len();
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        Ok(self.state)
    }

    /// Tick until a terminal state is reached.
    pub fn run(&mut self) -> SearchResult<SearchState> {
        loop {
            let state = self.tick()?;
            if state.is_terminal() {
                return Ok(state);
            }
        }
    }

    /// Finish the run and keep only what path reconstruction needs.
    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            store: self.store,
            state: self.state,
            stats: self.stats,
            start: self.start,
            goal: self.goal,
        }
    }

    #[inline]
    fn slot(&self, c: Coord) -> SearchResult<usize> {
        Self::slot_in(self.terrain, c)
    }

    fn slot_in(terrain: &T, c: Coord) -> SearchResult<usize> {
        let bounds = terrain.bounds();
        bounds
            .index(c)
            .ok_or_else(|| GridError::out_of_bounds(c, bounds).into())
    }
}

/// The result of a finished (or abandoned) search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    store: NodeStore,
    state: SearchState,
    stats: SearchStats,
    start: Coord,
    goal: Coord,
}

impl SearchOutcome {
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Handle of the goal node, if the goal was reached.
    pub fn goal_node(&self) -> Option<NodeHandle> {
        match self.state {
            SearchState::GoalReached(h) => Some(h),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.goal_node().is_some()
    }

    /// Rebuild the route, or `None` if the search did not reach the goal.
    pub fn path(&self) -> SearchResult<Option<Path>> {
        self.goal_node()
            .map(|goal| reconstruct(&self.store, goal))
            .transpose()
    }
}

/// Run a complete search from `start` to `goal`.
///
/// Not finding a path is not an error; check [`SearchOutcome::path`].
pub fn find_path<T: Terrain + ?Sized>(
    terrain: &T,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> SearchResult<SearchOutcome> {
    let mut engine = SearchEngine::new(terrain, start, goal, config)?;
    engine.run()?;
    Ok(engine.into_outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::chebyshev;
    use crate::neighbors::Move;
    use gridstar_core::Grid;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use std::f64::consts::SQRT_2;

    fn solve(grid: &Grid, start: Coord, goal: Coord) -> (SearchOutcome, Option<Path>) {
        let outcome = find_path(grid, start, goal, SearchConfig::default()).unwrap();
        let path = outcome.path().unwrap();
        (outcome, path)
    }

    fn random_grid(rng: &mut StdRng, rows: i32, cols: i32, density: f64) -> Grid {
        let blocked: Vec<Coord> = gridstar_core::Bounds::new(rows, cols)
            .iter()
            .filter(|_| rng.random_bool(density))
            .collect();
        Grid::with_blocked(rows, cols, blocked).unwrap()
    }

    #[test]
    fn three_by_three_diagonal() {
        let grid = Grid::open(3, 3);
        let (outcome, path) = solve(&grid, Coord::new(0, 0), Coord::new(2, 2));
        let path = path.unwrap();
        assert!(outcome.is_found());
        assert_eq!(path.depth(), 2);
        assert_eq!(path.moves(), &[Move::NorthEast, Move::NorthEast]);
        let codes: Vec<u8> = path.moves().iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec![1, 1]);
        assert!((path.total_cost() - 2.0 * SQRT_2).abs() < 1e-9);
        assert_eq!(format!("{:.2}", path.total_cost()), "2.83");
    }

    #[test]
    fn detours_around_blocked_cell() {
        let grid = Grid::with_blocked(3, 3, [Coord::new(0, 1)]).unwrap();
        let (_, path) = solve(&grid, Coord::new(0, 0), Coord::new(0, 2));
        let path = path.unwrap();
        assert_eq!(path.depth(), 2);
        assert!((path.total_cost() - 2.0 * SQRT_2).abs() < 1e-9);
        assert!(path.positions().all(|c| c != Coord::new(0, 1)));
        assert_eq!(
            path.positions().collect::<Vec<_>>(),
            vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::open(4, 4);
        let (outcome, path) = solve(&grid, Coord::new(2, 1), Coord::new(2, 1));
        let path = path.unwrap();
        assert_eq!(path.depth(), 0);
        assert_eq!(path.steps().len(), 1);
        assert_eq!(outcome.stats().nodes_created, 1);
        assert_eq!(outcome.stats().ticks, 1);
        assert_eq!(outcome.stats().nodes_expanded, 0);
    }

    #[test]
    fn wall_exhausts_search() {
        // Column 2 is a full wall.
        let wall = (0..5).map(|r| Coord::new(r, 2));
        let grid = Grid::with_blocked(5, 5, wall).unwrap();
        let (outcome, path) = solve(&grid, Coord::new(0, 0), Coord::new(4, 4));
        assert!(path.is_none());
        assert_eq!(outcome.state(), SearchState::Exhausted);
        assert!(!outcome.stats().cut_off);
        // Everything left of the wall was expanded, nothing more.
        assert_eq!(outcome.stats().nodes_expanded, 10);
    }

    #[test]
    fn blocked_goal_exhausts_search() {
        let grid = Grid::with_blocked(4, 4, [Coord::new(3, 3)]).unwrap();
        let (outcome, path) = solve(&grid, Coord::new(0, 0), Coord::new(3, 3));
        assert!(path.is_none());
        assert_eq!(outcome.state(), SearchState::Exhausted);
    }

    #[test]
    fn endpoint_off_board_is_an_error() {
        let grid = Grid::open(3, 3);
        let config = SearchConfig::default();
        let err = SearchEngine::new(&grid, Coord::new(0, 0), Coord::new(3, 0), config)
            .err()
            .unwrap();
        assert!(err.is_out_of_bounds());
        let err = find_path(&grid, Coord::new(-1, 0), Coord::new(1, 1), config)
            .err()
            .unwrap();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn tick_limit_cuts_off() {
        let grid = Grid::open(30, 50);
        let config = SearchConfig::default().with_max_ticks(3);
        let outcome = find_path(&grid, Coord::new(0, 0), Coord::new(29, 49), config).unwrap();
        assert_eq!(outcome.state(), SearchState::Exhausted);
        assert!(outcome.stats().cut_off);
        assert_eq!(outcome.stats().ticks, 3);
        assert!(outcome.path().unwrap().is_none());
    }

    #[test]
    fn ticking_walks_through_states() {
        let grid = Grid::open(2, 2);
        let mut engine =
            SearchEngine::new(&grid, Coord::new(0, 0), Coord::new(1, 1), SearchConfig::default())
                .unwrap();
        assert_eq!(engine.state(), SearchState::Exploring);
        assert_eq!(engine.frontier_len(), 1);

        assert_eq!(engine.tick().unwrap(), SearchState::Exploring);
        assert!(engine.is_closed(Coord::new(0, 0)));
        assert_eq!(engine.frontier_len(), 3);
        assert_eq!(engine.stats().nodes_created, 4);

        let state = engine.tick().unwrap();
        assert!(matches!(state, SearchState::GoalReached(_)));
        // Terminal ticks are idempotent.
        assert_eq!(engine.tick().unwrap(), state);
        assert_eq!(engine.stats().ticks, 2);
        assert!(!engine.is_closed(Coord::new(5, 5)));
    }

    #[test]
    fn decrease_key_reroutes_through_gap() {
        // Column 2 is a wall except for a gap at row 2.
        let wall = (0..5).filter(|&r| r != 2).map(|r| Coord::new(r, 2));
        let grid = Grid::with_blocked(5, 5, wall).unwrap();
        let (outcome, path) = solve(&grid, Coord::new(0, 0), Coord::new(0, 4));
        let path = path.unwrap();
        assert_eq!(outcome.stats().nodes_refined, 1);
        assert_eq!(path.depth(), 4);
        assert_eq!(
            path.moves(),
            &[Move::NorthEast, Move::NorthEast, Move::SouthEast, Move::SouthEast]
        );
        assert!((path.total_cost() - 4.0 * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn heuristics_agree_on_optimal_cost() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 12, 16, 0.25);
            let start = Coord::new(0, 0);
            let goal = Coord::new(11, 15);
            let cost = |h: Heuristic| {
                find_path(&grid, start, goal, SearchConfig::default().with_heuristic(h))
                    .unwrap()
                    .path()
                    .unwrap()
                    .map(|p| p.total_cost())
            };
            let zero = cost(Heuristic::Zero);
            let octile = cost(Heuristic::Octile);
            let euclid = cost(Heuristic::Euclidean);
            assert_eq!(zero.is_some(), octile.is_some());
            assert_eq!(zero.is_some(), euclid.is_some());
            if let (Some(z), Some(o), Some(e)) = (zero, octile, euclid) {
                assert!((z - o).abs() < 1e-9);
                // Rounded Euclidean may overestimate by at most 0.005.
                assert!(e <= z + 0.005 + 1e-9);
            }
        }
    }

    #[test]
    fn open_grid_depth_is_chebyshev() {
        let grid = Grid::open(9, 13);
        for start in grid.bounds().iter().step_by(5) {
            for goal in grid.bounds().iter().step_by(7) {
                let (_, path) = solve(&grid, start, goal);
                let path = path.unwrap();
                assert_eq!(path.depth() as i32, chebyshev(start, goal), "{start} -> {goal}");
            }
        }
    }

    #[test]
    fn random_grids_keep_path_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let grid = random_grid(&mut rng, 10, 14, 0.3);
            let start = Coord::new(rng.random_range(0..10), rng.random_range(0..14));
            let goal = Coord::new(rng.random_range(0..10), rng.random_range(0..14));
            let (outcome, path) = solve(&grid, start, goal);

            let stats = outcome.stats();
            assert!(stats.nodes_expanded <= grid.bounds().len());
            assert_eq!(stats.nodes_created, outcome.store().len());

            let Some(path) = path else {
                assert_eq!(outcome.state(), SearchState::Exhausted);
                continue;
            };
            assert_eq!(path.start(), Some(start));
            assert_eq!(path.goal(), Some(goal));
            assert_eq!(path.moves().len() + 1, path.steps().len());

            for w in path.steps().windows(2) {
                assert!(w[0].position.is_adjacent(w[1].position));
                assert!(w[1].g >= w[0].g);
            }
            for step in path.steps().iter().skip(1) {
                assert_eq!(grid.is_blocked(step.position), Ok(false));
            }
            for s in path.steps() {
                assert_eq!(s.f, s.g + s.h);
            }
        }
    }

    #[test]
    fn reruns_are_identical() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = random_grid(&mut rng, 30, 50, 0.2);
        let start = Coord::new(0, 0);
        let goal = Coord::new(29, 49);
        let (a, pa) = solve(&grid, start, goal);
        let (b, pb) = solve(&grid, start, goal);
        assert_eq!(a.stats(), b.stats());
        assert_eq!(a.state(), b.state());
        assert_eq!(pa, pb);
    }
}
