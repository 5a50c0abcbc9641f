//! Single-pass word matching engine and ranking.
//!
//! - [`SearchEngine`]: Main entry point, scans a grid and ranks the words found
//! - [`Scanner`]: Drives the row-major pass and owns every live attempt
//! - [`MatchAttempt`]: State machine for one word, start cell and direction
//! - [`Ranker`]: Counts completed matches per word and keeps the top K
//!
//! ## Matching Algorithm
//!
//! The grid is read once, cell by cell, in row-major order. At each cell:
//!
//! 1. Every live attempt whose next expected cell is this one compares the
//!    character; mismatches and attempts that would leave the grid fail and
//!    are dropped, completed attempts are recorded.
//! 2. A new attempt is started for every word beginning with the cell's
//!    character, once per direction (once in total for one-letter words).
//!
//! Because step 1 runs before step 2, an attempt never consumes the same
//! cell twice.
//!
//! ## Example
//!
//! ```rust
//! use grid_word_finder::{find, Grid};
//!
//! let grid = Grid::with_default_size(&["ABCCC", "FGWOO", "CHILL", "PQNDD", "UVDXY"]).unwrap();
//! let found = find(&grid, &["CHILL", "SNOW"]);
//! assert_eq!(found, vec!["CHILL"]);
//! ```
//!
//! [`SearchEngine`]: engine::SearchEngine
//! [`Scanner`]: scanner::Scanner
//! [`MatchAttempt`]: attempt::MatchAttempt
//! [`Ranker`]: ranking::Ranker

pub mod attempt;
pub mod direction;
pub mod engine;
pub mod index;
pub mod ranking;
pub mod scanner;

pub use engine::{find, SearchConfig, SearchEngine, SearchReport};
