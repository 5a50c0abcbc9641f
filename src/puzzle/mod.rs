//! Puzzle bundles: a grid plus its word list, stored as JSON.
//!
//! A demo puzzle is compiled into the binary and checked by `build.rs`.
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "rows": ["ABCCC", "FGWOO", "CHILL", "PQNDD", "UVDXY"],
//!   "words": ["CHILL", "WIND", "COLD"]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use grid_word_finder::{Puzzle, SearchEngine};
//!
//! let puzzle = Puzzle::load_embedded().unwrap();
//! let report = SearchEngine::new().search(&puzzle.grid, &puzzle.words);
//! assert!(!report.matches.is_empty());
//! ```

pub mod store;
