use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Position};
use crate::core::word_list::WordList;
use crate::matching::scanner::CompletedMatch;

/// Default number of words returned by a search
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Cumulative hits for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHits {
    pub word: String,

    /// Number of completed occurrences, every start cell and direction counted
    pub hits: usize,

    /// Start of the occurrence that completed first
    pub first_match: Position,

    /// Direction of that first occurrence
    pub direction: Direction,
}

/// Groups completed matches by word and keeps the most frequent ones
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

impl Ranker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Rank words by hit count, descending.
    ///
    /// Ties keep word list order. Words without any hit are left out.
    pub fn rank(&self, words: &WordList, matches: &[CompletedMatch]) -> Vec<WordHits> {
        // Indexed by word, so iteration order is word list order
        let mut tally: Vec<Option<(usize, CompletedMatch)>> = vec![None; words.len()];

        for m in matches {
            let Some(slot) = tally.get_mut(m.word_index) else {
                tracing::warn!(word_index = m.word_index, "Match for unknown word ignored");
                continue;
            };
            match slot {
                Some((hits, _)) => *hits += 1,
                None => *slot = Some((1, *m)),
            }
        }

        let mut ranked: Vec<WordHits> = tally
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let (hits, first) = entry?;
                let word = words.get(idx)?;
                Some(WordHits {
                    word: word.text.clone(),
                    hits,
                    first_match: first.start,
                    direction: first.direction,
                })
            })
            .collect();

        // Stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|a, b| b.hits.cmp(&a.hits));
        ranked.truncate(self.limit);
        ranked
    }
}
