use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gridstar_lib::Config;

/// Find the shortest 8-connected path on a 30x50 occupancy board.
#[derive(Debug, Parser)]
#[command(name = "gridstar", version, about)]
struct Cli {
    /// Problem file: `start_row start_col goal_row goal_col`, then the board
    /// rows top first.
    input: PathBuf,

    /// Report file to write. Overwritten if it exists.
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let report = gridstar_lib::run(&cli.input, &cli.output, &Config::default())
        .with_context(|| format!("solving {}", cli.input.display()))?;

    if !report.is_solved() {
        log::warn!(
            "no path found, {} nodes created; wrote {}",
            report.nodes_created(),
            cli.output.display()
        );
    }
    Ok(())
}
