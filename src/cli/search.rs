use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::grid::{Grid, DEFAULT_GRID_SIZE};
use crate::core::types::Direction;
use crate::core::word_list::WordList;
use crate::matching::engine::{SearchConfig, SearchEngine, SearchReport};
use crate::matching::ranking::DEFAULT_MAX_RESULTS;
use crate::parsing;
use crate::puzzle::store::Puzzle;
use crate::utils::validation::{validate_grid_size, validate_word_count};

/// Options shared by every command that runs a search
#[derive(Args, Debug, Clone)]
pub struct SearchOptions {
    /// Number of ranked words to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Direction to read words in; repeat for several (default: both)
    #[arg(long = "direction", value_enum)]
    pub directions: Vec<Direction>,

    /// Compare letters case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
}

impl SearchOptions {
    pub fn to_config(&self) -> SearchConfig {
        let directions = if self.directions.is_empty() {
            Direction::ALL.to_vec()
        } else {
            self.directions.clone()
        };

        SearchConfig::default()
            .with_max_results(self.max_results)
            .with_directions(directions)
            .with_ignore_case(self.ignore_case)
    }
}

#[derive(Args)]
pub struct SearchArgs {
    /// Grid file, one row per line. Use '-' for stdin
    #[arg(short, long, conflicts_with = "puzzle", required_unless_present = "puzzle")]
    pub grid: Option<PathBuf>,

    /// Puzzle JSON file holding both grid rows and words
    #[arg(long)]
    pub puzzle: Option<PathBuf>,

    /// Word file, one word per line or comma-separated
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Words to search for (comma-separated values allowed)
    pub word: Vec<String>,

    /// Grid side length (grid files only; puzzles take it from their rows)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE, conflicts_with = "puzzle")]
    pub size: usize,

    #[command(flatten)]
    pub options: SearchOptions,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the grid or words cannot be read or the grid has the wrong shape.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (grid, mut words) = load_inputs(&args)?;

    if let Some(path) = &args.words {
        words.extend(parsing::words::parse_word_file(path)?.iter().map(|w| w.text.clone()));
    }
    if !args.word.is_empty() {
        words.extend(
            parsing::words::parse_word_args(&args.word)?
                .iter()
                .map(|w| w.text.clone()),
        );
    }

    // Each source is checked on its own; the limit also holds for all of them together
    validate_word_count(words.len())?;

    let words = WordList::new(words);
    if words.is_empty() {
        anyhow::bail!("No words to search for: pass words as arguments, --words, or --puzzle");
    }

    if verbose {
        eprintln!(
            "Searching a {n}x{n} grid for {} words",
            words.len(),
            n = grid.size()
        );
    }

    let report = SearchEngine::with_config(args.options.to_config()).search(&grid, &words);
    print_report(&report, format, verbose)
}

/// Grid plus any words bundled with it
fn load_inputs(args: &SearchArgs) -> anyhow::Result<(Grid, Vec<String>)> {
    if let Some(path) = &args.puzzle {
        let puzzle = Puzzle::load_from_file(path)?;
        let words = puzzle.words.iter().map(|w| w.text.clone()).collect();
        return Ok((puzzle.grid, words));
    }

    let Some(path) = &args.grid else {
        anyhow::bail!("Either --grid or --puzzle is required");
    };
    let size = validate_grid_size(args.size)?;
    Ok((parsing::grid_text::parse_grid_file(path, size)?, Vec::new()))
}

/// Print a search report in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_report(
    report: &SearchReport,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_report(report, verbose),
        OutputFormat::Json => print_json_report(report)?,
        OutputFormat::Tsv => print_tsv_report(report),
    }
    Ok(())
}

fn print_text_report(report: &SearchReport, verbose: bool) {
    if report.matches.is_empty() {
        println!("No words found.");
        return;
    }

    println!("Top Words");
    println!("{}", "=".repeat(40));
    for (i, m) in report.matches.iter().enumerate() {
        println!(
            "#{:<3} {:<16} {:>4} hit{}  first at {} {}",
            i + 1,
            m.word,
            m.hits,
            if m.hits == 1 { "" } else { "s" },
            m.first_match,
            m.direction
        );
    }

    if verbose {
        let stats = &report.stats;
        println!("\nScan Statistics:");
        println!("  Grid: {n}x{n}", n = report.grid_size);
        println!("  Words searched: {}", report.words_searched);
        println!("  Cells visited: {}", stats.cells_visited);
        println!("  Attempts spawned: {}", stats.attempts_spawned);
        println!("  Attempts failed: {}", stats.attempts_failed);
        println!("  Attempts matched: {}", stats.attempts_matched);
        println!("  Peak live attempts: {}", stats.peak_live_attempts);
    }
}

fn print_json_report(report: &SearchReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &SearchReport) {
    println!("rank\tword\thits\trow\tcol\tdirection");
    for (i, m) in report.matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            m.word,
            m.hits,
            m.first_match.row,
            m.first_match.col,
            m.direction
        );
    }
}
