//! Coordinate-advance rule for each [`Direction`].
//!
//! This is the only place the two directions differ; [`MatchAttempt`] runs the
//! same state machine for both and asks the direction where to look next.
//!
//! [`MatchAttempt`]: super::attempt::MatchAttempt

use crate::core::types::{Direction, Position};

impl Direction {
    /// The cell after `from` in this direction, or `None` if it falls outside a
    /// grid of side `size`.
    #[must_use]
    pub fn advance(self, from: Position, size: usize) -> Option<Position> {
        let next = match self {
            Self::Horizontal => Position::new(from.row, from.col + 1),
            Self::Vertical => Position::new(from.row + 1, from.col),
        };

        (next.row < size && next.col < size).then_some(next)
    }
}
