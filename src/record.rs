//! Persisted game record.
//!
//! The record keeps the shape the game has always been saved in:
//!
//! ```json
//! {
//!   "board": ["X", " ", " ", " ", "O", " ", " ", " ", " "],
//!   "turn": "X",
//!   "winner": "",
//!   "moves": 2
//! }
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tictactoe_core::invariants::{BoardInvariants, InvariantSet};
use tictactoe_core::{Board, Mark, Square};
use tracing::{debug, info, instrument, warn};

/// Serialized form of a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Nine cell tags: `"X"`, `"O"`, or `" "` for empty.
    pub board: Vec<String>,
    /// Mark to move next.
    pub turn: String,
    /// Outcome tag: `""`, `"X"`, `"O"` or `"D"`.
    #[serde(default)]
    pub winner: String,
    /// Number of marks placed.
    #[serde(default)]
    pub moves: usize,
}

impl GameRecord {
    /// Builds the record for `board`. The winner tag is derived from the squares.
    pub fn from_board(board: &Board) -> Self {
        let cells = board
            .squares()
            .iter()
            .map(|square| match square {
                Square::Empty => " ".to_string(),
                Square::Occupied(mark) => mark.to_string(),
            })
            .collect();

        Self {
            board: cells,
            turn: board.to_move().to_string(),
            winner: board.evaluate_outcome().tag().to_string(),
            moves: board.move_count(),
        }
    }

    /// Rebuilds the board, rejecting records that legal play cannot produce.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] for a wrong cell count, unknown cell or turn
    /// tags, a move counter that disagrees with the cells, or a board that
    /// violates [`BoardInvariants`].
    #[instrument(skip(self))]
    pub fn to_board(&self) -> Result<Board, RecordError> {
        if self.board.len() != 9 {
            return Err(RecordError::new(format!(
                "Expected 9 cells, found {}",
                self.board.len()
            )));
        }

        let mut squares = [Square::Empty; 9];
        for (i, cell) in self.board.iter().enumerate() {
            squares[i] = parse_cell(cell)
                .ok_or_else(|| RecordError::new(format!("Invalid cell {} at index {}", cell, i)))?;
        }

        let turn = match self.turn.trim() {
            "" => Mark::X,
            tag => Mark::from_str(tag)
                .map_err(|_| RecordError::new(format!("Invalid turn: {}", self.turn)))?,
        };

        let board = Board::from_squares(squares, turn);

        if board.move_count() != self.moves {
            return Err(RecordError::new(format!(
                "Move counter {} does not match {} occupied cells",
                self.moves,
                board.move_count()
            )));
        }

        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            RecordError::new(format!("Board violates invariants: {}", descriptions))
        })?;

        let derived = board.evaluate_outcome().tag();
        if self.winner.trim() != derived {
            warn!(stored = %self.winner, derived, "Stored winner is stale, using derived outcome");
        }

        Ok(board)
    }

    /// Reads a record from `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let record = serde_json::from_str(&content)?;
        debug!("Record loaded");
        Ok(record)
    }

    /// Writes the record to `path` as pretty-printed JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path.as_ref(), content)?;
        debug!(moves = self.moves, winner = %self.winner, "Record saved");
        Ok(())
    }
}

/// Loads the board stored at `path`, creating a fresh record if none exists.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_or_create(path: impl AsRef<Path>) -> Result<Board, RecordError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No saved game, starting a new one");
        let board = Board::new();
        GameRecord::from_board(&board).save(path)?;
        return Ok(board);
    }
    GameRecord::load(path)?.to_board()
}

fn parse_cell(cell: &str) -> Option<Square> {
    match cell.trim() {
        "" => Some(Square::Empty),
        tag => Mark::from_str(tag).ok().map(Square::Occupied),
    }
}

/// Error reading, writing or validating a game record.
#[derive(Debug, Clone, Display, Error)]
#[display("Record error: {} at {}:{}", message, file, line)]
pub struct RecordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RecordError {
    /// Creates a new record error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RecordError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RecordError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Outcome;

    fn record(cells: [&str; 9], turn: &str, moves: usize) -> GameRecord {
        GameRecord {
            board: cells.iter().map(|c| c.to_string()).collect(),
            turn: turn.to_string(),
            winner: String::new(),
            moves,
        }
    }

    #[test]
    fn test_from_board_shape() {
        let mut board = Board::new();
        board.apply_move(0, Mark::X).unwrap();
        board.apply_move(4, Mark::O).unwrap();

        let record = GameRecord::from_board(&board);
        assert_eq!(record.board[0], "X");
        assert_eq!(record.board[1], " ");
        assert_eq!(record.board[4], "O");
        assert_eq!(record.turn, "X");
        assert_eq!(record.winner, "");
        assert_eq!(record.moves, 2);
        assert_eq!(record.to_board().unwrap(), board);
    }

    #[test]
    fn test_winner_is_derived() {
        let rec = record(["X", "X", "X", "O", "O", " ", " ", " ", " "], "O", 5);
        let board = rec.to_board().unwrap();
        assert_eq!(board.evaluate_outcome(), Outcome::Won(Mark::X));
        assert_eq!(GameRecord::from_board(&board).winner, "X");
    }

    #[test]
    fn test_empty_string_cells_are_empty() {
        let rec = record(["", "", "", "", "X", "", "", "", ""], "O", 1);
        let board = rec.to_board().unwrap();
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.to_move(), Mark::O);
    }

    #[test]
    fn test_rejects_wrong_cell_count() {
        let mut rec = record([" "; 9], "X", 0);
        rec.board.pop();
        assert!(rec.to_board().unwrap_err().message.contains("9 cells"));
    }

    #[test]
    fn test_rejects_unknown_tags() {
        let rec = record(["Z", " ", " ", " ", " ", " ", " ", " ", " "], "X", 1);
        assert!(rec.to_board().is_err());

        let rec = record([" "; 9], "Q", 0);
        assert!(rec.to_board().unwrap_err().message.contains("turn"));
    }

    #[test]
    fn test_rejects_counter_mismatch() {
        let rec = record(["X", " ", " ", " ", " ", " ", " ", " ", " "], "O", 3);
        assert!(rec.to_board().unwrap_err().message.contains("Move counter"));
    }

    #[test]
    fn test_rejects_unbalanced_board() {
        let rec = record(["X", "X", " ", " ", " ", " ", " ", " ", " "], "O", 2);
        assert!(rec.to_board().unwrap_err().message.contains("invariants"));
    }
}
