use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::grid::{Grid, ShapeError};
use crate::core::word_list::WordList;
use crate::utils::validation::{validate_word_count, ValidationError};

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Failed to read puzzle: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse puzzle: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid puzzle grid: {0}")]
    Shape(#[from] ShapeError),

    #[error("Invalid puzzle words: {0}")]
    Validation(#[from] ValidationError),
}

/// Puzzle format version for compatibility checking
pub const PUZZLE_VERSION: &str = "1.0.0";

/// Serializable puzzle format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleData {
    pub version: String,
    pub rows: Vec<String>,
    pub words: Vec<String>,
}

/// A grid together with the words to look for in it
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: WordList,
}

impl Puzzle {
    /// Load the embedded demo puzzle
    pub fn load_embedded() -> Result<Self, PuzzleError> {
        // Validated at compile time by build.rs
        const EMBEDDED_PUZZLE: &str = include_str!("../../puzzles/demo.json");
        Self::from_json(EMBEDDED_PUZZLE)
    }

    /// Load a puzzle from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, PuzzleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a puzzle from a JSON string.
    ///
    /// The grid side is the number of rows; every row must have that many characters.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let data: PuzzleData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != PUZZLE_VERSION {
            tracing::warn!(
                expected = PUZZLE_VERSION,
                found = %data.version,
                "Puzzle version mismatch"
            );
        }

        let grid = Grid::new(&data.rows, data.rows.len())?;
        validate_word_count(data.words.len())?;
        let words = WordList::new(data.words);

        Ok(Self { grid, words })
    }

    /// Serialize back to the JSON puzzle format
    pub fn to_json(&self) -> Result<String, PuzzleError> {
        let data = PuzzleData {
            version: PUZZLE_VERSION.to_string(),
            rows: self.grid.rows(),
            words: self.words.iter().map(|w| w.text.clone()).collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MAX_WORDS;

    #[test]
    fn test_load_embedded() {
        let puzzle = Puzzle::load_embedded().unwrap();
        assert_eq!(puzzle.grid.size(), 5);
        assert_eq!(puzzle.grid.rows()[2], "CHILL");
        assert!(!puzzle.words.is_empty());
    }

    #[test]
    fn test_from_json_rejects_ragged_grid() {
        let json = r#"{"version": "1.0.0", "rows": ["AB", "C"], "words": []}"#;
        let err = Puzzle::from_json(json).unwrap_err();
        assert!(matches!(err, PuzzleError::Shape(_)));
    }

    #[test]
    fn test_from_json_rejects_too_many_words() {
        let words: Vec<String> = (0..=MAX_WORDS).map(|i| format!("W{i}")).collect();
        let data = PuzzleData {
            version: PUZZLE_VERSION.to_string(),
            rows: vec!["A".to_string()],
            words,
        };
        let json = serde_json::to_string(&data).unwrap();

        let err = Puzzle::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Validation(ValidationError::TooManyWords(n)) if n == MAX_WORDS + 1
        ));
    }

    #[test]
    fn test_from_json_accepts_word_limit() {
        let data = PuzzleData {
            version: PUZZLE_VERSION.to_string(),
            rows: vec!["A".to_string()],
            words: (0..MAX_WORDS).map(|i| format!("W{i}")).collect(),
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(Puzzle::from_json(&json).unwrap().words.len(), MAX_WORDS);
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        let err = Puzzle::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PuzzleError::ParseError(_)));
    }

    #[test]
    fn test_json_round_trip_preserves_puzzle() {
        let puzzle = Puzzle::load_embedded().unwrap();
        let reloaded = Puzzle::from_json(&puzzle.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.grid, puzzle.grid);
        assert_eq!(reloaded.words, puzzle.words);
    }
}
