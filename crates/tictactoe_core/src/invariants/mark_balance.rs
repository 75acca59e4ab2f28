//! Mark balance invariant: players alternate, so counts differ by at most one.

use super::super::{Board, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: the number of X and O marks differ by at most one.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_either_mark_may_lead_by_one() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::O);
        assert!(MarkBalanceInvariant::holds(&Board::from_squares(squares, Mark::X)));
    }

    #[test]
    fn test_two_ahead_violates() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        squares[1] = Square::Occupied(Mark::X);
        assert!(!MarkBalanceInvariant::holds(&Board::from_squares(squares, Mark::O)));
    }
}
