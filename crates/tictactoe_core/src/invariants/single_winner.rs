//! Single winner invariant: the game stops at the first completed line.

use super::super::rules::win::has_line;
use super::super::{Board, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: completed lines belong to at most one mark.
///
/// A game stops as soon as a line is completed, so both marks owning a line
/// means the board was not reached by legal play.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let valid = !(has_line(board, Mark::X) && has_line(board, Mark::O));
        if !valid {
            warn!("Both marks completed a line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one mark has completed a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_single_line_holds() {
        let mut squares = [Square::Empty; 9];
        for i in [0, 1, 2] {
            squares[i] = Square::Occupied(Mark::X);
        }
        squares[4] = Square::Occupied(Mark::O);
        squares[8] = Square::Occupied(Mark::O);
        assert!(SingleWinnerInvariant::holds(&Board::from_squares(squares, Mark::O)));
    }

    #[test]
    fn test_two_winners_violate() {
        let mut squares = [Square::Empty; 9];
        for i in [0, 1, 2] {
            squares[i] = Square::Occupied(Mark::X);
        }
        for i in [6, 7, 8] {
            squares[i] = Square::Occupied(Mark::O);
        }
        assert!(!SingleWinnerInvariant::holds(&Board::from_squares(squares, Mark::X)));
    }
}
