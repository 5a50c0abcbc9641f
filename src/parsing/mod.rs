//! Parsers for grid and word list text inputs.
//!
//! - **Grid files**: One row per line, `#` comments and blank lines ignored
//! - **Word files**: One word per line or comma-separated, `#` comments ignored
//!
//! Paths equal to `-` are read from stdin.
//!
//! ## Example
//!
//! ```rust
//! use grid_word_finder::parsing::grid_text::parse_grid_text;
//! use grid_word_finder::parsing::words::parse_word_text;
//!
//! let grid = parse_grid_text("AB\nCD\n", 2).unwrap();
//! let words = parse_word_text("AB, BD\n").unwrap();
//! assert_eq!(grid.size(), 2);
//! assert_eq!(words.len(), 2);
//! ```

pub mod grid_text;
pub mod words;

pub use grid_text::ParseError;
