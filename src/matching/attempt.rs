use crate::core::types::{Direction, MatchStatus, Position};

/// One hypothesis that a word starts at a given cell and reads in a given
/// direction.
///
/// The attempt only reacts to the cell it expects next; every other cell
/// leaves it untouched. `Matched` and `Failed` are terminal.
#[derive(Debug, Clone)]
pub struct MatchAttempt<'w> {
    /// Index of the word in its [`WordList`](crate::core::word_list::WordList)
    word_index: usize,
    word: &'w [char],
    direction: Direction,
    grid_size: usize,
    start: Position,
    /// Characters matched so far
    matched: usize,
    /// Cell whose character is compared against `word[matched]`
    expected: Position,
    status: MatchStatus,
}

impl<'w> MatchAttempt<'w> {
    /// Start an attempt at `at` and evaluate the character found there.
    ///
    /// A one-character word that matches is already `Matched` when this returns.
    #[must_use]
    pub fn start(
        word_index: usize,
        word: &'w [char],
        direction: Direction,
        grid_size: usize,
        at: Position,
        c: char,
    ) -> Self {
        let mut attempt = Self {
            word_index,
            word,
            direction,
            grid_size,
            start: at,
            matched: 0,
            expected: at,
            status: MatchStatus::Possible,
        };
        attempt.advance(c, at);
        attempt
    }

    /// Feed the character at `at` to this attempt and return the resulting status.
    ///
    /// Cells other than the expected one, and attempts already in a terminal
    /// state, are left unchanged.
    pub fn advance(&mut self, c: char, at: Position) -> MatchStatus {
        if self.status.is_terminal() || at != self.expected {
            return self.status;
        }

        if self.word.get(self.matched) != Some(&c) {
            self.status = MatchStatus::Failed;
            return self.status;
        }

        self.matched += 1;
        self.status = if self.matched == self.word.len() {
            MatchStatus::Matched
        } else if let Some(next) = self.direction.advance(self.expected, self.grid_size) {
            self.expected = next;
            MatchStatus::Possible
        } else {
            MatchStatus::Failed
        };

        self.status
    }

    #[must_use]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn start_position(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn expected(&self) -> Position {
        self.expected
    }

    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.matched
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_single_char_word_matches_at_start() {
        let word = chars("A");
        let attempt =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 0), 'A');
        assert_eq!(attempt.status(), MatchStatus::Matched);
        assert_eq!(attempt.matched_len(), 1);
    }

    #[test]
    fn test_horizontal_match_progression() {
        let word = chars("CAT");
        let mut attempt =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(1, 0), 'C');
        assert_eq!(attempt.status(), MatchStatus::Possible);
        assert_eq!(attempt.expected(), Position::new(1, 1));

        assert_eq!(attempt.advance('A', Position::new(1, 1)), MatchStatus::Possible);
        assert_eq!(attempt.advance('T', Position::new(1, 2)), MatchStatus::Matched);
        assert_eq!(attempt.start_position(), Position::new(1, 0));
    }

    #[test]
    fn test_vertical_ignores_cells_in_between() {
        let word = chars("CAT");
        let mut attempt =
            MatchAttempt::start(0, &word, Direction::Vertical, 5, Position::new(0, 2), 'C');

        // Rest of row 0 and start of row 1 are not the expected cell
        for col in 3..5 {
            assert_eq!(attempt.advance('X', Position::new(0, col)), MatchStatus::Possible);
        }
        for col in 0..2 {
            assert_eq!(attempt.advance('X', Position::new(1, col)), MatchStatus::Possible);
        }
        assert_eq!(attempt.matched_len(), 1);

        assert_eq!(attempt.advance('A', Position::new(1, 2)), MatchStatus::Possible);
        assert_eq!(attempt.advance('T', Position::new(2, 2)), MatchStatus::Matched);
    }

    #[test]
    fn test_mismatch_fails() {
        let word = chars("CAT");
        let mut attempt =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 0), 'C');
        assert_eq!(attempt.advance('O', Position::new(0, 1)), MatchStatus::Failed);
    }

    #[test]
    fn test_first_char_mismatch_fails_at_start() {
        let word = chars("CAT");
        let attempt =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 0), 'X');
        assert_eq!(attempt.status(), MatchStatus::Failed);
    }

    #[test]
    fn test_running_off_grid_fails() {
        let word = chars("CAT");
        let mut attempt =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 3), 'C');
        assert_eq!(attempt.advance('A', Position::new(0, 4)), MatchStatus::Failed);
    }

    #[test]
    fn test_word_ending_on_last_cell_matches() {
        let word = chars("AT");
        let mut attempt =
            MatchAttempt::start(0, &word, Direction::Vertical, 5, Position::new(3, 4), 'A');
        assert_eq!(attempt.advance('T', Position::new(4, 4)), MatchStatus::Matched);
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        let word = chars("AB");
        let mut failed =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 0), 'A');
        failed.advance('X', Position::new(0, 1));
        assert_eq!(failed.advance('B', Position::new(0, 1)), MatchStatus::Failed);

        let mut matched =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 0), 'A');
        matched.advance('B', Position::new(0, 1));
        assert_eq!(matched.advance('X', Position::new(0, 1)), MatchStatus::Matched);
        assert_eq!(matched.matched_len(), 2);
    }

    #[test]
    fn test_empty_word_never_matches() {
        let word: Vec<char> = Vec::new();
        let attempt =
            MatchAttempt::start(0, &word, Direction::Horizontal, 5, Position::new(0, 0), 'A');
        assert_eq!(attempt.status(), MatchStatus::Failed);
    }
}
