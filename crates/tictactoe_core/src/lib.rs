//! Pure tic-tac-toe game logic.
//!
//! This crate owns the game-state model and the computer opponent:
//!
//! - **Board**: the 3x3 grid, whose turn it is, move application and
//!   outcome detection
//! - **Rules**: win and draw detection as pure functions over a board
//! - **Invariants**: structural properties used to reject malformed boards
//! - **Engine**: three opponent policies (random, greedy, exhaustive minimax)
//!
//! The crate performs no I/O. Loading, saving and rendering are left to the
//! caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Difficulty, Engine, Mark, Outcome};
//!
//! let mut board = Board::new();
//! board.apply_move(4, Mark::X)?;
//!
//! let engine = Engine::new(Difficulty::Hard.policy());
//! let reply = engine.play(&mut board, Mark::O)?;
//!
//! assert!(matches!(reply.to_index(), 0 | 2 | 6 | 8));
//! assert_eq!(board.evaluate_outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_core::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
mod types;

pub mod engine;
pub mod invariants;
pub mod rules;

pub use board::Board;
pub use engine::{Difficulty, Engine, Policy};
pub use error::BoardError;
pub use position::Position;
pub use types::{Mark, Outcome, Square};
