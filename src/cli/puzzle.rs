use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::puzzle::store::Puzzle;

#[derive(Args)]
pub struct PuzzleArgs {
    #[command(subcommand)]
    pub command: PuzzleCommands,
}

#[derive(Subcommand)]
pub enum PuzzleCommands {
    /// Show the grid and words of a puzzle
    Show {
        /// Path to puzzle file (defaults to the embedded demo)
        #[arg(long)]
        puzzle: Option<PathBuf>,
    },

    /// Export a puzzle as JSON
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to puzzle file to export (defaults to the embedded demo)
        #[arg(long)]
        puzzle: Option<PathBuf>,
    },
}

/// Execute puzzle subcommand
///
/// # Errors
///
/// Returns an error if the puzzle cannot be loaded or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PuzzleArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    match args.command {
        PuzzleCommands::Show { puzzle } => {
            let puzzle = load(puzzle.as_ref())?;
            show(&puzzle, format)
        }
        PuzzleCommands::Export { output, puzzle } => {
            let puzzle = load(puzzle.as_ref())?;
            let json = puzzle.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("Exported puzzle to {}", path.display());
                }
                None => println!("{json}"),
            }
            Ok(())
        }
    }
}

fn load(path: Option<&PathBuf>) -> anyhow::Result<Puzzle> {
    Ok(match path {
        Some(path) => Puzzle::load_from_file(path)?,
        None => Puzzle::load_embedded()?,
    })
}

fn show(puzzle: &Puzzle, format: OutputFormat) -> anyhow::Result<()> {
    let words: Vec<&str> = puzzle.words.iter().map(|w| w.text.as_str()).collect();

    match format {
        OutputFormat::Text => {
            println!("Grid ({n}x{n}):", n = puzzle.grid.size());
            for row in puzzle.grid.rows() {
                println!("  {row}");
            }
            println!("\nWords ({}):", words.len());
            for word in &words {
                println!("  {word}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "size": puzzle.grid.size(),
                "rows": puzzle.grid.rows(),
                "words": words,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kind\tvalue");
            for row in puzzle.grid.rows() {
                println!("row\t{row}");
            }
            for word in &words {
                println!("word\t{word}");
            }
        }
    }

    Ok(())
}
