//! Errors reported by board and engine operations.

use super::Position;

/// Error that can occur when applying a move or asking the engine for one.
///
/// A failed operation never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    InvalidMove(Position),

    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The engine was asked to move on a board where no move exists.
    #[display("Engine misuse: {}", _0)]
    EngineMisuse(String),
}

impl std::error::Error for BoardError {}
