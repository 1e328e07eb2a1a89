//! Rendering a search result as the textual report.

use std::fmt;
use std::fs;
use std::path::Path as FsPath;

use gridstar_core::Grid;
use gridstar_paths::{Move, Path, SearchOutcome, SearchResult};

/// How the report marks the path and prints costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Marker written over every path cell except the goal.
    pub path_marker: u8,
    /// Decimal places for `f` values.
    pub cost_precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path_marker: 4,
            cost_precision: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Solution {
    Found { moves: Vec<Move>, costs: Vec<f64> },
    NoPath,
}

/// A rendered search result.
///
/// The [`Display`](fmt::Display) form is the exact file contents: depth,
/// node count, move codes, `f` values, then the board top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    nodes_created: usize,
    solution: Solution,
    board: Vec<Vec<u8>>,
    precision: usize,
}

impl Report {
    /// Report a found path, stamping it onto a copy of the board.
    pub fn solved(grid: &Grid, path: &Path, nodes_created: usize, config: &ReportConfig) -> Self {
        let mut board = grid.markers_top_down();
        let top = grid.rows() - 1;
        let before_goal = path.steps().len().saturating_sub(1);
        for pos in path.positions().take(before_goal) {
            // `Grid` rows count up from the bottom, `board` rows from the top.
            board[(top - pos.row) as usize][pos.col as usize] = config.path_marker;
        }
        Self {
            nodes_created,
            solution: Solution::Found {
                moves: path.moves().to_vec(),
                costs: path.costs().collect(),
            },
            board,
            precision: config.cost_precision,
        }
    }

    /// Report an exhausted search: the board is left untouched.
    pub fn no_path(grid: &Grid, nodes_created: usize, config: &ReportConfig) -> Self {
        Self {
            nodes_created,
            solution: Solution::NoPath,
            board: grid.markers_top_down(),
            precision: config.cost_precision,
        }
    }

    /// Build whichever report fits `outcome`.
    pub fn from_outcome(
        grid: &Grid,
        outcome: &SearchOutcome,
        config: &ReportConfig,
    ) -> SearchResult<Self> {
        let nodes = outcome.stats().nodes_created;
        Ok(match outcome.path()? {
            Some(path) => Self::solved(grid, &path, nodes, config),
            None => Self::no_path(grid, nodes, config),
        })
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.solution, Solution::Found { .. })
    }

    /// Number of moves on the path, `None` when there is no path.
    pub fn depth(&self) -> Option<usize> {
        match &self.solution {
            Solution::Found { moves, .. } => Some(moves.len()),
            Solution::NoPath => None,
        }
    }

    pub fn nodes_created(&self) -> usize {
        self.nodes_created
    }

    /// Board markers, top row first, with the path stamped in.
    pub fn board(&self) -> &[Vec<u8>] {
        &self.board
    }

    /// Write the report, replacing any existing file.
    pub fn write_to(&self, path: &FsPath) -> std::io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.solution {
            Solution::Found { moves, costs } => {
                writeln!(f, "{}", moves.len())?;
                writeln!(f, "{}", self.nodes_created)?;
                writeln!(f, "{}", join(moves.iter().map(|m| m.to_string())))?;
                let prec = self.precision;
                writeln!(f, "{}", join(costs.iter().map(|c| format!("{c:.prec$}"))))?;
            }
            Solution::NoPath => {
                writeln!(f, "no path")?;
                writeln!(f, "{}", self.nodes_created)?;
                writeln!(f)?;
                writeln!(f)?;
            }
        }
        for row in &self.board {
            writeln!(f, "{}", join(row.iter().map(|m| m.to_string())))?;
        }
        Ok(())
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Coord;
    use gridstar_paths::{SearchConfig, find_path};

    fn report(grid: &Grid, start: Coord, goal: Coord) -> Report {
        let outcome = find_path(grid, start, goal, SearchConfig::default()).unwrap();
        Report::from_outcome(grid, &outcome, &ReportConfig::default()).unwrap()
    }

    #[test]
    fn open_three_by_three() {
        let grid = Grid::open(3, 3);
        let r = report(&grid, Coord::new(0, 0), Coord::new(2, 2));
        assert!(r.is_solved());
        assert_eq!(r.depth(), Some(2));
        assert_eq!(
            r.to_string(),
            "2\n9\n1 1\n2.83 2.82 2.83\n0 0 0\n0 4 0\n4 0 0\n"
        );
    }

    #[test]
    fn detour_around_center() {
        let grid = Grid::with_blocked(3, 3, [Coord::new(1, 1)]).unwrap();
        let r = report(&grid, Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(
            r.to_string(),
            "3\n8\n0 1 2\n2.83 3.24 3.41 3.41\n0 4 0\n4 1 0\n4 0 0\n"
        );
    }

    #[test]
    fn wall_gives_no_path() {
        let blocked = (0..3).map(|row| Coord::new(row, 1));
        let grid = Grid::with_blocked(3, 4, blocked).unwrap();
        let r = report(&grid, Coord::new(0, 0), Coord::new(2, 3));
        assert!(!r.is_solved());
        assert_eq!(r.depth(), None);
        assert_eq!(r.nodes_created(), 3);
        assert_eq!(
            r.to_string(),
            "no path\n3\n\n\n0 1 0 0\n0 1 0 0\n0 1 0 0\n"
        );
    }

    #[test]
    fn start_is_goal_leaves_board_alone() {
        let grid = Grid::open(2, 2);
        let r = report(&grid, Coord::new(1, 0), Coord::new(1, 0));
        assert_eq!(r.to_string(), "0\n1\n\n0.00\n0 0\n0 0\n");
    }

    #[test]
    fn honours_config() {
        let grid = Grid::open(1, 3);
        let outcome =
            find_path(&grid, Coord::new(0, 0), Coord::new(0, 2), SearchConfig::default()).unwrap();
        let config = ReportConfig {
            path_marker: 7,
            cost_precision: 1,
        };
        let r = Report::from_outcome(&grid, &outcome, &config).unwrap();
        assert_eq!(r.board(), &[vec![7, 7, 0]]);
        assert!(r.to_string().contains("\n2.0 2.0 2.0\n"));
    }
}
