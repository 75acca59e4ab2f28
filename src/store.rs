//! File-backed storage for the board and the difficulty tag.

use crate::{AppConfig, GameRecord, RecordError, record};
use std::path::PathBuf;
use tictactoe_core::{Board, Difficulty};
use tracing::{debug, info, instrument};

/// Reads and writes game state at the paths named by an [`AppConfig`].
#[derive(Debug, Clone)]
pub struct GameStore {
    board_path: PathBuf,
    difficulty_path: PathBuf,
    default_difficulty: Difficulty,
}

impl GameStore {
    /// Creates a store using the paths from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            board_path: config.board_path().clone(),
            difficulty_path: config.difficulty_path().clone(),
            default_difficulty: *config.default_difficulty(),
        }
    }

    /// Loads the saved board, creating an empty one if nothing is saved yet.
    pub fn load_board(&self) -> Result<Board, RecordError> {
        record::load_or_create(&self.board_path)
    }

    /// Saves `board`.
    pub fn save_board(&self, board: &Board) -> Result<(), RecordError> {
        GameRecord::from_board(board).save(&self.board_path)
    }

    /// Discards the saved game and stores a fresh empty board.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<Board, RecordError> {
        let board = Board::new();
        self.save_board(&board)?;
        info!("Started a new game");
        Ok(board)
    }

    /// Reads the chosen difficulty.
    ///
    /// A missing or blank file yields the configured default; an unknown tag
    /// yields [`Difficulty::Easy`].
    #[instrument(skip(self))]
    pub fn difficulty(&self) -> Result<Difficulty, RecordError> {
        if !self.difficulty_path.exists() {
            debug!(default = %self.default_difficulty, "No difficulty file, using default");
            return Ok(self.default_difficulty);
        }

        let content = std::fs::read_to_string(&self.difficulty_path)?;
        let tag = content.trim();
        if tag.is_empty() {
            return Ok(self.default_difficulty);
        }
        Ok(Difficulty::from_tag(tag))
    }

    /// Stores the difficulty tag.
    #[instrument(skip(self))]
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), RecordError> {
        std::fs::write(&self.difficulty_path, format!("{}\n", difficulty))?;
        info!(%difficulty, "Difficulty saved");
        Ok(())
    }
}
