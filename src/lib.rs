//! Tic-tac-toe against a computer opponent, saved between invocations.
//!
//! The game logic lives in [`tictactoe_core`]. This crate is the thin driver
//! around it:
//!
//! - **Config**: TOML file plus `TICTACTOE_*` environment overrides
//! - **Record**: the JSON game record and its validation
//! - **Store**: file-backed board and difficulty storage
//! - **Session**: one human move and the engine's reply per turn
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_ai::{AppConfig, GameStore, play_turn};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let store = GameStore::new(&config);
//!
//! let mut board = store.load_board()?;
//! let report = play_turn(&mut board, 4, store.difficulty()?, &mut rand::thread_rng())?;
//! store.save_board(&board)?;
//! println!("{:?}", report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod record;
mod session;
mod store;

pub mod cli;
pub mod display;

pub use config::{
    AppConfig, ConfigError, DEFAULT_CONFIG_FILE, ENV_BOARD_PATH, ENV_DIFFICULTY,
    ENV_DIFFICULTY_PATH,
};
pub use record::{GameRecord, RecordError, load_or_create};
pub use session::{ENGINE_MARK, HUMAN_MARK, SimulationTally, TurnReport, play_turn, simulate};
pub use store::GameStore;
