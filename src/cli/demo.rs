use clap::Args;

use crate::cli::search::{print_report, SearchOptions};
use crate::cli::OutputFormat;
use crate::matching::engine::SearchEngine;
use crate::puzzle::store::Puzzle;

#[derive(Args)]
pub struct DemoArgs {
    /// Print the demo grid before the results
    #[arg(long)]
    pub show_grid: bool,

    #[command(flatten)]
    pub options: SearchOptions,
}

/// Execute demo subcommand: search the embedded puzzle
///
/// # Errors
///
/// Returns an error if the embedded puzzle cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DemoArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let puzzle = Puzzle::load_embedded()?;

    if args.show_grid && matches!(format, OutputFormat::Text) {
        println!("{}\n", puzzle.grid);
    }

    let engine = SearchEngine::with_config(args.options.to_config());
    let report = engine.search(&puzzle.grid, &puzzle.words);
    print_report(&report, format, verbose)
}
