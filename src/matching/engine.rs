use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;
use crate::core::types::Direction;
use crate::core::word_list::WordList;
use crate::matching::ranking::{Ranker, WordHits, DEFAULT_MAX_RESULTS};
use crate::matching::scanner::{ScanStats, Scanner};

/// Configuration for the search engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of ranked words returned
    pub max_results: usize,
    /// Directions words are read in
    pub directions: Vec<Direction>,
    /// Compare case-folded characters; reported words keep their spelling
    pub ignore_case: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            directions: Direction::ALL.to_vec(),
            ignore_case: false,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// Result of searching one grid for one word list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub grid_size: usize,
    /// Distinct non-empty words searched for
    pub words_searched: usize,
    pub stats: ScanStats,
    /// Ranked words, most hits first
    pub matches: Vec<WordHits>,
}

impl SearchReport {
    /// Just the ranked words
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.word.clone()).collect()
    }
}

/// The main search engine
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Create a new search engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new search engine with custom configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Scan `grid` once and rank the words of `words` by how often they occur.
    ///
    /// Neither input is modified, so repeated calls give identical reports.
    pub fn search(&self, grid: &Grid, words: &WordList) -> SearchReport {
        let (grid, words): (Cow<'_, Grid>, Cow<'_, WordList>) = if self.config.ignore_case {
            (
                Cow::Owned(grid.case_folded()),
                Cow::Owned(words.case_folded()),
            )
        } else {
            (Cow::Borrowed(grid), Cow::Borrowed(words))
        };

        let outcome = Scanner::with_directions(&grid, &words, &self.config.directions).scan();
        let matches = Ranker::new(self.config.max_results).rank(&words, &outcome.matches);

        SearchReport {
            grid_size: grid.size(),
            words_searched: words.len(),
            stats: outcome.stats,
            matches,
        }
    }
}

/// Search `grid` for `words` with the default configuration and return the
/// top ranked words.
pub fn find<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Vec<String> {
    let words = WordList::new(words.iter().map(|w| w.as_ref().to_string()));
    SearchEngine::new().search(grid, &words).words()
}
