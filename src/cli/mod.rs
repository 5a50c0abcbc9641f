//! Command-line interface for grid-word-finder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Search a grid file (or puzzle file) for words
//! - **demo**: Search the embedded demo puzzle
//! - **puzzle**: Show or export a puzzle
//!
//! ## Usage
//!
//! ```text
//! # Search a 5x5 grid for a few words
//! grid-word-finder search --grid grid.txt CHILL WIND COLD
//!
//! # Words from a file, grid from stdin
//! cat grid.txt | grid-word-finder search --grid - --words words.txt
//!
//! # A 10x10 grid, horizontal words only, JSON output
//! grid-word-finder search --grid big.txt --size 10 --direction horizontal WORD --format json
//!
//! # Run the built-in demo
//! grid-word-finder demo --show-grid
//! ```

use clap::{Parser, Subcommand};

pub mod demo;
pub mod puzzle;
pub mod search;

#[derive(Parser)]
#[command(name = "grid-word-finder")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find the most frequent words hidden in a square letter grid")]
#[command(
    long_about = "grid-word-finder reads a square letter grid once, cell by cell, tracking every partial match of every word as it goes.\n\nWords are read left-to-right and top-to-bottom. Every occurrence counts, and the words found most often are reported first."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a grid for words
    Search(search::SearchArgs),

    /// Search the embedded demo puzzle
    Demo(demo::DemoArgs),

    /// Show or export puzzles
    Puzzle(puzzle::PuzzleArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
