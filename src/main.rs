use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod matching;
mod parsing;
mod puzzle;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("grid_word_finder=debug,info")
    } else {
        EnvFilter::new("grid_word_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Demo(args) => {
            cli::demo::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Puzzle(args) => {
            cli::puzzle::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
