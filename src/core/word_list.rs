use std::collections::HashSet;

use crate::core::types::fold_case;

/// A target word, pre-split into characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word as given
    pub text: String,
    /// Characters compared one at a time against grid cells
    pub chars: Vec<char>,
}

impl Word {
    fn new(text: String) -> Self {
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First character, used to decide where attempts start
    #[must_use]
    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }
}

/// Ordered list of distinct, non-empty words.
///
/// Empty entries are dropped and repeated entries collapse to their first
/// appearance. A word's index is its rank among the kept words, which is
/// what ties are broken by when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::new();

        for word in words {
            let word: String = word.into();
            if word.is_empty() {
                tracing::debug!("Skipping empty word");
                continue;
            }
            if !seen.insert(word.clone()) {
                tracing::debug!(word = %word, "Skipping duplicate word");
                continue;
            }
            kept.push(Word::new(word));
        }

        Self { words: kept }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Copy for case-insensitive searches.
    ///
    /// Each word keeps its original `text`; only the compared `chars` go through
    /// [`fold_case`]. Words that fold to the same characters collapse to the
    /// first spelling.
    #[must_use]
    pub fn case_folded(&self) -> Self {
        let mut seen: HashSet<Vec<char>> = HashSet::new();
        let mut kept = Vec::new();

        for word in &self.words {
            let chars: Vec<char> = word.chars.iter().map(|&c| fold_case(c)).collect();
            if !seen.insert(chars.clone()) {
                tracing::debug!(word = %word.text, "Skipping case variant of an earlier word");
                continue;
            }
            kept.push(Word {
                text: word.text.clone(),
                chars,
            });
        }

        Self { words: kept }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
