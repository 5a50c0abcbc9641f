use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::core::grid::{Grid, ShapeError};
use crate::utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Invalid grid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Read a whole input, treating `-` as stdin
///
/// # Errors
///
/// Returns `ParseError::Io` if the file or stdin cannot be read.
pub fn read_input(path: &Path) -> Result<String, ParseError> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Parse a grid file with one row per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is not a `size` x `size` grid.
pub fn parse_grid_file(path: &Path, size: usize) -> Result<Grid, ParseError> {
    let content = read_input(path)?;
    parse_grid_text(&content, size)
}

/// Parse grid text with one row per line.
///
/// Rows are trimmed; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no rows are found, or
/// `ParseError::Shape` if the rows are not a `size` x `size` square.
pub fn parse_grid_text(text: &str, size: usize) -> Result<Grid, ParseError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if rows.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No grid rows found in input".to_string(),
        ));
    }

    Ok(Grid::new(&rows, size)?)
}
