//! Greedy policy: one-ply lookahead with a center preference.

use super::super::{Board, BoardError, Mark, Position, rules};
use super::random;
use rand::Rng;
use tracing::debug;

/// Picks a square by the first rule that applies:
///
/// 1. complete a line for `mark` (lowest index wins ties)
/// 2. block a line the opponent would complete next turn (lowest index)
/// 3. take the center
/// 4. fall back to [`random::choose`]
pub fn choose<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Position, BoardError> {
    if let Some(pos) = completing_move(board, mark) {
        debug!(position = %pos, "Taking winning square");
        return Ok(pos);
    }

    if let Some(pos) = completing_move(board, mark.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Ok(pos);
    }

    if board.is_empty(Position::Center) {
        return Ok(Position::Center);
    }

    random::choose(board, rng)
}

/// Lowest empty square where placing `mark` completes a line for it.
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|&pos| rules::check_winner(&board.with_mark(pos, mark)) == Some(mark))
}
