use std::collections::HashMap;

use crate::core::word_list::WordList;

/// Finds the words that could start at a cell, keyed by their first character
pub struct FirstCharIndex {
    /// First character -> word indices, in word list order
    by_first_char: HashMap<char, Vec<usize>>,
}

impl FirstCharIndex {
    /// Index every word that fits in a grid of side `grid_size`.
    ///
    /// Longer words could only ever fail at the grid edge, so they are left out.
    pub fn new(words: &WordList, grid_size: usize) -> Self {
        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();

        for (idx, word) in words.iter().enumerate() {
            if word.len() > grid_size {
                tracing::debug!(
                    word = %word.text,
                    grid_size,
                    "Word is longer than the grid side and cannot match"
                );
                continue;
            }
            if let Some(first) = word.first() {
                by_first_char.entry(first).or_default().push(idx);
            }
        }

        Self { by_first_char }
    }

    /// Indices of words starting with `c`
    pub fn candidates(&self, c: char) -> &[usize] {
        self.by_first_char
            .get(&c)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        self.by_first_char.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_first_char.is_empty()
    }
}
