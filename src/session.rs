//! Turn orchestration: one human move followed by one engine reply.
//!
//! A finished board is never restarted implicitly. Playing on it fails with
//! [`BoardError::GameOver`] and leaves it as it was; starting over is an
//! explicit reset (see [`GameStore::reset`](crate::GameStore::reset)).

use rand::Rng;
use serde::Serialize;
use tictactoe_core::{Board, BoardError, Difficulty, Engine, Mark, Outcome, Position};
use tracing::{info, instrument};

/// Mark played by the human.
pub const HUMAN_MARK: Mark = Mark::X;

/// Mark played by the computer opponent.
pub const ENGINE_MARK: Mark = Mark::O;

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Square the human played.
    pub human: Position,
    /// Square the engine replied with, if the game was still open.
    pub engine: Option<Position>,
    /// Outcome after the turn.
    pub outcome: Outcome,
}

/// Plays the human's move at board index `index`, then the engine's reply.
///
/// # Errors
///
/// - [`BoardError::GameOver`] if the board is already decided
/// - [`BoardError::OutOfRange`] if `index` is not 0-8
/// - [`BoardError::InvalidMove`] if the square is taken
///
/// The board is unchanged when an error is returned.
#[instrument(skip(board, rng), fields(moves = board.move_count()))]
pub fn play_turn<R: Rng + ?Sized>(
    board: &mut Board,
    index: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<TurnReport, BoardError> {
    if board.evaluate_outcome().is_terminal() {
        return Err(BoardError::GameOver);
    }

    let human = board.apply_move(index, HUMAN_MARK)?;
    info!(position = %human, "Human played");

    let engine = if board.evaluate_outcome().is_terminal() {
        None
    } else {
        Some(Engine::from(difficulty).play_with_rng(board, ENGINE_MARK, rng)?)
    };

    let outcome = board.evaluate_outcome();
    info!(%outcome, "Turn complete");
    Ok(TurnReport {
        human,
        engine,
        outcome,
    })
}

/// Win and draw counts from engine-vs-engine play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimulationTally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl SimulationTally {
    /// Total games recorded.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None if outcome == Outcome::Draw => self.draws += 1,
            None => {}
        }
    }
}

impl std::fmt::Display for SimulationTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` complete games between two engines, X moving first.
#[instrument(skip(rng))]
pub fn simulate<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    games: usize,
    rng: &mut R,
) -> Result<SimulationTally, BoardError> {
    let x_engine = Engine::from(x);
    let o_engine = Engine::from(o);
    let mut tally = SimulationTally::default();

    for _ in 0..games {
        let mut board = Board::new();
        while !board.evaluate_outcome().is_terminal() {
            let mark = board.to_move();
            let engine = match mark {
                Mark::X => &x_engine,
                Mark::O => &o_engine,
            };
            engine.play_with_rng(&mut board, mark, rng)?;
        }
        tally.record(board.evaluate_outcome());
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
