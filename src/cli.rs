//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_core::Position;

/// Tic-tac-toe against a computer opponent. The game is saved between runs.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Discard the saved game and start a new one
    New {
        /// Difficulty for the new game: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Play a square as X; the computer answers as O
    Play {
        /// Square index 0-8 (row-major) or a label such as "top-left"
        #[arg(value_parser = parse_square)]
        square: usize,
    },

    /// Print the saved game
    Show,

    /// Pit two computer players against each other
    Simulate {
        /// Difficulty of X (moves first)
        #[arg(short, long, default_value = "hard")]
        x: String,

        /// Difficulty of O
        #[arg(short, long, default_value = "easy")]
        o: String,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: usize,
    },
}

/// Parses a square as a raw index or a position label.
///
/// Numbers are passed through unchecked so the board reports out-of-range
/// indices itself.
pub fn parse_square(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("Unknown square: {}", s))
}
