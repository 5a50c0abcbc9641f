use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;
use crate::core::types::{Direction, MatchStatus, Position};
use crate::core::word_list::WordList;
use crate::matching::attempt::MatchAttempt;
use crate::matching::index::FirstCharIndex;

/// A word occurrence found by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMatch {
    /// Index of the word in the searched [`WordList`]
    pub word_index: usize,
    /// Cell holding the word's first character
    pub start: Position,
    pub direction: Direction,
}

/// Counters collected during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub cells_visited: usize,
    pub attempts_spawned: usize,
    pub attempts_failed: usize,
    pub attempts_matched: usize,
    /// Largest number of attempts alive after any single cell
    pub peak_live_attempts: usize,
}

/// Everything a scan produces
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Completed matches in the order they completed
    pub matches: Vec<CompletedMatch>,
    pub stats: ScanStats,
}

/// Drives the single row-major pass over a grid.
///
/// For every cell, live attempts are advanced and pruned first, then new
/// attempts are spawned for words starting with that cell's character. A new
/// attempt therefore never sees the same cell twice.
pub struct Scanner<'a> {
    grid: &'a Grid,
    words: &'a WordList,
    index: FirstCharIndex,
    directions: Vec<Direction>,
}

impl<'a> Scanner<'a> {
    /// Scanner searching both directions
    pub fn new(grid: &'a Grid, words: &'a WordList) -> Self {
        Self::with_directions(grid, words, &Direction::ALL)
    }

    /// Scanner restricted to `directions`; duplicates are ignored
    pub fn with_directions(grid: &'a Grid, words: &'a WordList, directions: &[Direction]) -> Self {
        let mut unique = Vec::with_capacity(directions.len());
        for &direction in directions {
            if !unique.contains(&direction) {
                unique.push(direction);
            }
        }

        Self {
            grid,
            words,
            index: FirstCharIndex::new(words, grid.size()),
            directions: unique,
        }
    }

    /// Run the scan to completion
    pub fn scan(&self) -> ScanOutcome {
        let size = self.grid.size();
        let mut live: Vec<MatchAttempt<'a>> = Vec::new();
        let mut outcome = ScanOutcome::default();

        tracing::debug!(
            grid_size = size,
            words = self.words.len(),
            indexed = self.index.len(),
            "Starting grid scan"
        );

        for (row, col, c) in self.grid.cells() {
            let at = Position::new(row, col);
            outcome.stats.cells_visited += 1;

            // Advance existing attempts before spawning any for this cell
            live.retain_mut(|attempt| match attempt.advance(c, at) {
                MatchStatus::Possible => true,
                MatchStatus::Matched => {
                    outcome.stats.attempts_matched += 1;
                    outcome.matches.push(completed(attempt));
                    false
                }
                MatchStatus::Failed => {
                    outcome.stats.attempts_failed += 1;
                    false
                }
            });

            for &word_index in self.index.candidates(c) {
                let Some(word) = self.words.get(word_index) else {
                    continue;
                };

                // A single character reads the same in every direction
                let directions = if word.len() == 1 {
                    &self.directions[..self.directions.len().min(1)]
                } else {
                    &self.directions[..]
                };

                for &direction in directions {
                    let attempt =
                        MatchAttempt::start(word_index, &word.chars, direction, size, at, c);
                    outcome.stats.attempts_spawned += 1;

                    match attempt.status() {
                        MatchStatus::Possible => live.push(attempt),
                        MatchStatus::Matched => {
                            outcome.stats.attempts_matched += 1;
                            outcome.matches.push(completed(&attempt));
                        }
                        MatchStatus::Failed => outcome.stats.attempts_failed += 1,
                    }
                }
            }

            outcome.stats.peak_live_attempts = outcome.stats.peak_live_attempts.max(live.len());
        }

        // An unfinished attempt always expects a later cell, so none survive the last one
        debug_assert!(live.is_empty());

        tracing::debug!(
            cells = outcome.stats.cells_visited,
            spawned = outcome.stats.attempts_spawned,
            failed = outcome.stats.attempts_failed,
            matched = outcome.stats.attempts_matched,
            peak_live = outcome.stats.peak_live_attempts,
            "Grid scan complete"
        );

        outcome
    }
}

fn completed(attempt: &MatchAttempt<'_>) -> CompletedMatch {
    CompletedMatch {
        word_index: attempt.word_index(),
        start: attempt.start_position(),
        direction: attempt.direction(),
    }
}
