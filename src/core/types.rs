use serde::{Deserialize, Serialize};

/// Reading direction of a word in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom down a column
    Vertical,
}

impl Direction {
    /// Every supported direction, in spawn order
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Upper-case `c` when that gives exactly one character, otherwise keep `c`.
///
/// Grid cells and word characters are folded with this same rule, so folding
/// never changes a word's length or drops a case-sensitive match.
#[must_use]
pub fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// A cell coordinate, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single match attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Every character so far matched and the word is not complete yet
    Possible,
    /// The whole word matched (terminal)
    Matched,
    /// A character mismatched or the word ran off the grid (terminal)
    Failed,
}

impl MatchStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Possible)
    }
}
