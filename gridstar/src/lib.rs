//! gridstar: solve a grid shortest-path problem file and write a report.
//!
//! A problem file names a start and a goal on a fixed-size board of free (`0`)
//! and blocked (`1`) cells; see [`loader`] for the format. The search itself
//! lives in `gridstar-paths`, and [`report`] turns its outcome into the output
//! file.

pub mod error;
pub mod loader;
pub mod report;

use std::path::Path;

use gridstar_paths::{SearchConfig, find_path};
use log::info;

pub use error::{Error, LoadError};
pub use loader::{LoaderConfig, Problem, parse_problem, read_problem};
pub use report::{Report, ReportConfig};

/// Settings for one solve run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub loader: LoaderConfig,
    pub search: SearchConfig,
    pub report: ReportConfig,
}

/// Search `problem` and build its report.
pub fn solve(problem: &Problem, config: &Config) -> Result<Report, Error> {
    let outcome = find_path(&problem.grid, problem.start, problem.goal, config.search)?;
    let stats = outcome.stats();
    let report = Report::from_outcome(&problem.grid, &outcome, &config.report)?;
    match report.depth() {
        Some(depth) => info!(
            "path of {depth} moves from {} to {}, {} nodes created",
            problem.start, problem.goal, stats.nodes_created
        ),
        None => info!(
            "no path from {} to {}, {} nodes created",
            problem.start, problem.goal, stats.nodes_created
        ),
    }
    Ok(report)
}

/// Parse problem text and solve it.
pub fn solve_str(text: &str, config: &Config) -> Result<Report, Error> {
    let problem = parse_problem(text, &config.loader)?;
    solve(&problem, config)
}

/// Read `input`, solve it and write the report to `output`.
pub fn run(input: &Path, output: &Path, config: &Config) -> Result<Report, Error> {
    let problem = read_problem(input, &config.loader)?;
    info!("loaded {} ({} board)", input.display(), problem.grid.bounds());
    let report = solve(&problem, config)?;
    report.write_to(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(report)
}
