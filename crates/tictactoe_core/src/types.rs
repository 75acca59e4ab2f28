//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two marks a player places on the board.
///
/// `X` always moves first. In the persisted game the human plays `X` and the
/// computer opponent plays `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Classification of a board: still being played, won, or drawn.
///
/// Always derived from the squares; never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// All squares are filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns true once no further move may be applied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Short tag used by persisted game records: `""`, `"X"`, `"O"` or `"D"`.
    pub fn tag(self) -> &'static str {
        match self {
            Outcome::InProgress => "",
            Outcome::Won(Mark::X) => "X",
            Outcome::Won(Mark::O) => "O",
            Outcome::Draw => "D",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_mark_tags_round_trip() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::from_str("O").unwrap(), Mark::O);
        assert!(Mark::from_str("D").is_err());
    }

    #[test]
    fn test_outcome_tags() {
        assert_eq!(Outcome::InProgress.tag(), "");
        assert_eq!(Outcome::Won(Mark::X).tag(), "X");
        assert_eq!(Outcome::Won(Mark::O).tag(), "O");
        assert_eq!(Outcome::Draw.tag(), "D");
    }

    #[test]
    fn test_square_mark() {
        assert_eq!(Square::Empty.mark(), None);
        assert_eq!(Square::Occupied(Mark::O).mark(), Some(Mark::O));
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
