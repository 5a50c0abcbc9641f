//! Core data types for grid word searches.
//!
//! - [`Grid`]: The fixed-size square character matrix being searched
//! - [`WordList`]: The ordered, de-duplicated words to look for
//! - [`Direction`], [`Position`], [`MatchStatus`]: Match bookkeeping types
//!
//! ## Grid Size
//!
//! The side length is an explicit constructor argument rather than something
//! inferred from the rows, so a 3x3 input is rejected when a 5x5 grid is
//! required. [`grid::DEFAULT_GRID_SIZE`] is 5.
//!
//! [`Grid`]: grid::Grid
//! [`WordList`]: word_list::WordList
//! [`Direction`]: types::Direction
//! [`Position`]: types::Position
//! [`MatchStatus`]: types::MatchStatus

pub mod grid;
pub mod types;
pub mod word_list;
