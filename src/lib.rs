//! # grid-word-finder
//!
//! A library for finding the words hidden most often in a square letter grid.
//!
//! Words are read left-to-right along rows and top-to-bottom down columns. The
//! grid is scanned exactly once: every cell advances the partial matches that
//! were waiting for it, drops the ones that fail, and starts new ones for words
//! beginning with that letter. Completed matches are counted per word and the
//! most frequent words are reported.
//!
//! ## Features
//!
//! - **Single pass**: Each cell is read once, whatever the number of words
//! - **Cumulative counts**: Every occurrence counts, overlapping ones included
//! - **Deterministic ranking**: Equal counts keep word list order
//! - **Configurable**: Grid side, result count, directions and case folding
//!
//! ## Example
//!
//! ```rust
//! use grid_word_finder::{Grid, SearchEngine, WordList};
//!
//! let grid = Grid::new(&["ABCCC", "FGWOO", "CHILL", "PQNDD", "UVDXY"], 5).unwrap();
//! let words = WordList::new(["CHILL", "WIND", "COLD", "SNOW"]);
//!
//! let report = SearchEngine::new().search(&grid, &words);
//! for m in &report.matches {
//!     println!("{}: {} hits, first at {} ({})", m.word, m.hits, m.first_match, m.direction);
//! }
//! assert_eq!(report.words(), vec!["COLD", "CHILL", "WIND"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Grid, word list and match bookkeeping types
//! - [`matching`]: Match attempts, the scanner and the ranker
//! - [`parsing`]: Text parsers for grids and word lists
//! - [`puzzle`]: JSON puzzle bundles and the embedded demo puzzle
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod puzzle;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::grid::{Grid, ShapeError, DEFAULT_GRID_SIZE};
pub use core::types::*;
pub use core::word_list::{Word, WordList};
pub use matching::engine::{find, SearchConfig, SearchEngine, SearchReport};
pub use matching::ranking::WordHits;
pub use puzzle::store::Puzzle;
