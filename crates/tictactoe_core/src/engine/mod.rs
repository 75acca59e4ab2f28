//! Computer opponent.
//!
//! An [`Engine`] picks a square for a given mark under one of three
//! [`Policy`] values. Choosing never mutates the caller's board.
//!
//! | Difficulty | Policy    | Behaviour                                   |
//! |------------|-----------|---------------------------------------------|
//! | easy       | Random    | uniform over empty squares                  |
//! | medium     | Greedy    | win, else block, else center, else random   |
//! | hard       | Optimal   | exhaustive minimax, never loses             |

pub mod greedy;
pub mod minimax;
pub mod random;

use super::{Board, BoardError, Mark, Outcome, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Strategy the engine uses to pick a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Policy {
    /// Uniformly random empty square.
    Random,
    /// Immediate win, then block, then center, then random.
    Greedy,
    /// Full-depth minimax.
    Optimal,
}

/// Difficulty tag chosen by the player.
///
/// Tags are `easy`, `medium` and `hard`, matched case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random play.
    #[default]
    Easy,
    /// Greedy heuristic.
    Medium,
    /// Optimal search.
    Hard,
}

impl Difficulty {
    /// Parses a difficulty tag, falling back to [`Difficulty::Easy`] for
    /// anything unrecognized.
    #[instrument]
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag.trim()).unwrap_or_else(|_| {
            warn!(tag, "Unrecognized difficulty, defaulting to easy");
            Self::Easy
        })
    }

    /// Policy played at this difficulty.
    pub fn policy(self) -> Policy {
        match self {
            Difficulty::Easy => Policy::Random,
            Difficulty::Medium => Policy::Greedy,
            Difficulty::Hard => Policy::Optimal,
        }
    }
}

/// Computer opponent configured with a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    policy: Policy,
}

impl Engine {
    /// Creates an engine playing `policy`.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Returns the configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Chooses a square for `mark` using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EngineMisuse`] if the board is already decided.
    pub fn choose(&self, board: &Board, mark: Mark) -> Result<Position, BoardError> {
        self.choose_with_rng(board, mark, &mut rand::thread_rng())
    }

    /// Chooses a square for `mark` drawing randomness from `rng`.
    ///
    /// Only the random fallback paths consume randomness, so the optimal
    /// policy is deterministic regardless of `rng`.
    #[instrument(skip(self, board, rng), fields(policy = %self.policy, moves = board.move_count()))]
    pub fn choose_with_rng<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut R,
    ) -> Result<Position, BoardError> {
        ensure_playable(board)?;

        let pos = match self.policy {
            Policy::Random => random::choose(board, rng)?,
            Policy::Greedy => greedy::choose(board, mark, rng)?,
            Policy::Optimal => minimax::choose(board, mark)?,
        };

        info!(position = %pos, index = pos.to_index(), "Engine chose square");
        Ok(pos)
    }

    /// Chooses a square for `mark` and places it on `board`.
    pub fn play(&self, board: &mut Board, mark: Mark) -> Result<Position, BoardError> {
        self.play_with_rng(board, mark, &mut rand::thread_rng())
    }

    /// Same as [`Engine::play`] with a caller-supplied RNG.
    pub fn play_with_rng<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        mark: Mark,
        rng: &mut R,
    ) -> Result<Position, BoardError> {
        let pos = self.choose_with_rng(board, mark, rng)?;
        board.place(pos, mark)?;
        Ok(pos)
    }
}

impl From<Difficulty> for Engine {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty.policy())
    }
}

/// Rejects boards on which no move can be made.
fn ensure_playable(board: &Board) -> Result<(), BoardError> {
    match board.evaluate_outcome() {
        Outcome::InProgress => Ok(()),
        outcome => Err(BoardError::EngineMisuse(format!(
            "engine invoked on a finished board ({})",
            outcome
        ))),
    }
}
