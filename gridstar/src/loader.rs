//! Reading problem files.
//!
//! ```text
//! start_row start_col goal_row goal_col
//! <rows lines of up to cols markers, top row first>
//! ```
//!
//! Markers are `0` (free) or `1` (blocked). Short rows are padded with free
//! cells and blank lines are skipped. Endpoint coordinates use the board
//! convention: row 0 is the **last** marker line of the file.

use std::fs;
use std::path::Path;

use gridstar_core::{Cell, Coord, Grid};
use log::debug;

use crate::error::LoadError;

/// Board dimensions expected in a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { rows: 30, cols: 50 }
    }
}

/// A loaded search problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub grid: Grid,
    pub start: Coord,
    pub goal: Coord,
}

/// Read and parse a problem file.
pub fn read_problem(path: &Path, config: &LoaderConfig) -> Result<Problem, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_problem(&text, config)
}

/// Parse the text of a problem file.
pub fn parse_problem(text: &str, config: &LoaderConfig) -> Result<Problem, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let (start, goal) = parse_header(header_line, header)?;

    let mut rows: Vec<Vec<i64>> = Vec::with_capacity(config.rows);
    for (line, text) in lines {
        if rows.len() == config.rows {
            return Err(LoadError::TooManyRows {
                line,
                expected: config.rows,
            });
        }
        rows.push(parse_row(line, text, config.cols)?);
    }
    if rows.len() < config.rows {
        return Err(LoadError::MissingRows {
            found: rows.len(),
            expected: config.rows,
        });
    }

    let grid = Grid::from_markers(rows.as_slice())?;
    for (which, coord) in [("start", start), ("goal", goal)] {
        if !grid.contains(coord) {
            return Err(LoadError::EndpointOutOfBounds {
                which,
                coord,
                bounds: grid.bounds(),
            });
        }
    }

    debug!(
        "loaded {} board, {} blocked, start {start}, goal {goal}",
        grid.bounds(),
        grid.count_blocked()
    );
    Ok(Problem { grid, start, goal })
}

fn parse_header(line: usize, text: &str) -> Result<(Coord, Coord), LoadError> {
    let values = text
        .split_whitespace()
        .map(|t| t.parse::<i32>().map_err(|_| LoadError::invalid_integer(line, t)))
        .collect::<Result<Vec<_>, _>>()?;
    match values[..] {
        [sr, sc, gr, gc] => Ok((Coord::new(sr, sc), Coord::new(gr, gc))),
        _ => Err(LoadError::HeaderTokenCount {
            line,
            found: values.len(),
        }),
    }
}

fn parse_row(line: usize, text: &str, cols: usize) -> Result<Vec<i64>, LoadError> {
    let mut markers = Vec::with_capacity(cols);
    for (i, token) in text.split_whitespace().enumerate() {
        let marker: i64 = token
            .parse()
            .map_err(|_| LoadError::invalid_integer(line, token))?;
        if Cell::from_marker(marker).is_none() {
            return Err(LoadError::InvalidMarker {
                line,
                col: i + 1,
                marker,
            });
        }
        markers.push(marker);
    }
    if markers.len() > cols {
        return Err(LoadError::TooManyColumns {
            line,
            found: markers.len(),
            expected: cols,
        });
    }
    markers.resize(cols, i64::from(Cell::FREE_MARKER));
    Ok(markers)
}
