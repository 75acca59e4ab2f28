//! The 3x3 board and move application.

use super::{BoardError, Mark, Outcome, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// The board is a small `Copy` value, so search code explores continuations
/// on copies and the caller's board is never touched.
///
/// Invariants maintained by [`Board::apply_move`]:
/// - an occupied square never becomes empty again
/// - `moves` equals the number of occupied squares
/// - the outcome is recomputed from the squares on demand, never stored
///
/// Deserializing goes through [`Board::from_squares`], so a serialized move
/// counter is never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BoardState")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Mark expected to move next.
    to_move: Mark,
    /// Number of marks placed so far.
    moves: u8,
}

impl Board {
    /// Creates a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            to_move: Mark::X,
            moves: 0,
        }
    }

    /// Builds a board from raw squares, e.g. when restoring a saved game.
    ///
    /// The move counter is recomputed from the squares. No other validation
    /// is performed; see [`crate::invariants`] for structural checks.
    pub fn from_squares(squares: [Square; 9], to_move: Mark) -> Self {
        let moves = squares.iter().filter(|s| **s != Square::Empty).count() as u8;
        Self {
            squares,
            to_move,
            moves,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the mark expected to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns how many marks have been placed.
    pub fn move_count(&self) -> usize {
        self.moves as usize
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the square at `index` (0-8) is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `index` is not a board index.
    pub fn is_empty_at(&self, index: usize) -> Result<bool, BoardError> {
        Position::from_index(index)
            .map(|pos| self.is_empty(pos))
            .ok_or(BoardError::OutOfRange(index))
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Classifies the board from its squares.
    ///
    /// Pure: calling it repeatedly without a move in between always yields
    /// the same outcome.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Places `mark` at board index `index` (0-8).
    ///
    /// On success the move counter is incremented and the turn passes to the
    /// other mark.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfRange`] if `index` is not 0-8
    /// - [`BoardError::GameOver`] if the board is already won or drawn
    /// - [`BoardError::InvalidMove`] if the square is occupied
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Position, BoardError> {
        let pos = Position::from_index(index).ok_or(BoardError::OutOfRange(index))?;
        self.place(pos, mark)?;
        Ok(pos)
    }

    /// Places `mark` at `pos`. Same rules as [`Board::apply_move`].
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if self.evaluate_outcome().is_terminal() {
            return Err(BoardError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(BoardError::InvalidMove(pos));
        }

        self.squares[pos.to_index()] = Square::Occupied(mark);
        self.moves += 1;
        self.to_move = mark.opponent();
        debug!(position = %pos, %mark, moves = self.moves, "Mark placed");
        Ok(())
    }

    /// Returns a copy with `mark` placed at `pos`, for search.
    ///
    /// Callers must only pass empty positions of an in-progress board.
    pub(crate) fn with_mark(mut self, pos: Position, mark: Mark) -> Self {
        debug_assert!(self.is_empty(pos));
        self.squares[pos.to_index()] = Square::Occupied(mark);
        self.moves += 1;
        self.to_move = mark.opponent();
        self
    }
}

/// Serialized form accepted when reading a board back.
#[derive(Deserialize)]
struct BoardState {
    squares: [Square; 9],
    to_move: Mark,
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Self::from_squares(state.squares, state.to_move)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as a 3x3 grid; empty squares show their index.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Square::Empty => write!(f, "{}", pos.to_index())?,
                Square::Occupied(mark) => write!(f, "{}", mark)?,
            }
            if pos.col() < 2 {
                write!(f, "|")?;
            } else if pos.row() < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
