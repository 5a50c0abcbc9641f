use std::fmt;

use thiserror::Error;

use crate::core::types::fold_case;

/// Side length used when no explicit size is given
pub const DEFAULT_GRID_SIZE: usize = 5;

/// The grid does not have the required square shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Grid size must be at least 1")]
    ZeroSize,

    #[error("Grid has {found} rows, expected {expected}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("Row {row} has {found} characters, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An immutable square matrix of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Row-major cells, `size * size` long
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid of side `size` from its rows.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError` if `size` is zero, the row count is not `size`,
    /// or any row does not hold exactly `size` characters.
    pub fn new<S: AsRef<str>>(rows: &[S], size: usize) -> Result<Self, ShapeError> {
        if size == 0 {
            return Err(ShapeError::ZeroSize);
        }
        if rows.len() != size {
            return Err(ShapeError::WrongRowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(text.as_ref().chars());
            let found = cells.len() - before;
            if found != size {
                return Err(ShapeError::WrongRowLength {
                    row,
                    expected: size,
                    found,
                });
            }
        }

        Ok(Self { size, cells })
    }

    /// Build a grid with the [`DEFAULT_GRID_SIZE`] side length
    ///
    /// # Errors
    ///
    /// Returns `ShapeError` if the rows do not form a 5x5 square.
    pub fn with_default_size<S: AsRef<str>>(rows: &[S]) -> Result<Self, ShapeError> {
        Self::new(rows, DEFAULT_GRID_SIZE)
    }

    /// Side length N
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Character at `(row, col)`, or `None` outside the grid
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// Visit every cell in row-major order as `(row, col, char)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i / self.size, i % self.size, c))
    }

    /// Rows as owned strings
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Copy of this grid with every cell passed through [`fold_case`].
    #[must_use]
    pub fn case_folded(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|&c| fold_case(c)).collect(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
