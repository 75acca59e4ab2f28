//! Plain-text rendering of the game for the terminal.

use crate::session::{ENGINE_MARK, HUMAN_MARK, TurnReport};
use tictactoe_core::{Board, Difficulty, Outcome};

/// One-line status for the human player.
pub fn status_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "Your move. You are X.",
        Outcome::Won(mark) if mark == HUMAN_MARK => "You win!",
        Outcome::Won(mark) if mark == ENGINE_MARK => "AI wins!",
        Outcome::Won(_) => "Game over.",
        Outcome::Draw => "It's a draw.",
    }
}

/// Board, difficulty and status, ready to print.
pub fn render(board: &Board, difficulty: Difficulty) -> String {
    let outcome = board.evaluate_outcome();
    let mut out = format!("{}\n\nDifficulty: {}\n{}", board, difficulty, status_line(outcome));
    if outcome.is_terminal() {
        out.push_str("\nRun `tictactoe new` to play again.");
    }
    out
}

/// Summary of the moves made during a turn.
pub fn describe_turn(report: &TurnReport) -> String {
    let mut out = format!("You played {} ({}).", report.human, report.human.to_index());
    if let Some(reply) = report.engine {
        out.push_str(&format!(" AI played {} ({}).", reply, reply.to_index()));
    }
    out
}
