//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying a board. Rules are kept apart from board
//! storage so that the engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};

/// Classifies the board.
///
/// A completed line wins, checked in the order of [`LINES`]. Otherwise a full
/// board is a draw, and anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
