//! Optimal policy: full-depth minimax over every legal continuation.
//!
//! Leaves score +1 when the searching mark has won, -1 when the opponent has
//! won and 0 for a draw. The game tree holds at most 9! lines, so the search
//! runs without pruning or memoization.
//!
//! Each child is explored on its own copy of the board, so sibling branches
//! never observe each other's moves and the root board is left untouched.

use super::super::{Board, BoardError, Mark, Outcome, Position, rules};
use tracing::debug;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    /// Chosen square: the lowest index whose value equals the root value.
    pub position: Position,
    /// Minimax value of the position for the searching mark.
    pub score: i8,
    /// Number of nodes visited.
    pub nodes: u64,
}

/// Picks the optimal square for `mark`.
///
/// # Errors
///
/// Returns [`BoardError::EngineMisuse`] if no square is empty.
pub fn choose(board: &Board, mark: Mark) -> Result<Position, BoardError> {
    search(board, mark).map(|s| s.position)
}

/// Searches the full game tree from `board` with `mark` to move.
pub fn search(board: &Board, mark: Mark) -> Result<Search, BoardError> {
    let mut nodes = 0;
    let mut best: Option<(Position, i8)> = None;

    for pos in board.empty_positions() {
        let score = value(board.with_mark(pos, mark), mark, mark.opponent(), &mut nodes);
        // Strict comparison keeps the lowest index among equal values.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (position, score) =
        best.ok_or_else(|| BoardError::EngineMisuse("no empty square to search".to_string()))?;
    debug!(position = %position, score, nodes, "Minimax search complete");
    Ok(Search {
        position,
        score,
        nodes,
    })
}

/// Minimax value of `board` for `me`, with `mover` to play.
fn value(board: Board, me: Mark, mover: Mark, nodes: &mut u64) -> i8 {
    *nodes += 1;

    match rules::evaluate(&board) {
        Outcome::Won(winner) if winner == me => return 1,
        Outcome::Won(_) => return -1,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let children = Position::ALL
        .iter()
        .filter(|&&pos| board.is_empty(pos))
        .map(|&pos| value(board.with_mark(pos, mover), me, mover.opponent(), nodes));

    let best = if mover == me {
        children.max()
    } else {
        children.min()
    };
    best.unwrap_or(0)
}
