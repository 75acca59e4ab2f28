//! tictactoe - play against the computer from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_ai::cli::{Cli, Command};
use tictactoe_ai::{AppConfig, GameStore, display, play_turn, simulate};
use tictactoe_core::Difficulty;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let store = GameStore::new(&config);

    match cli.command {
        Command::New { difficulty } => run_new(&store, difficulty),
        Command::Play { square } => run_play(&store, square),
        Command::Show => run_show(&store),
        Command::Simulate { x, o, games } => run_simulate(&x, &o, games),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_ai=info,tictactoe_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument(skip(store))]
fn run_new(store: &GameStore, difficulty: Option<String>) -> Result<()> {
    if let Some(tag) = difficulty {
        store.set_difficulty(Difficulty::from_tag(&tag))?;
    }
    let board = store.reset()?;
    println!("{}", display::render(&board, store.difficulty()?));
    Ok(())
}

#[instrument(skip(store))]
fn run_play(store: &GameStore, square: usize) -> Result<()> {
    let mut board = store.load_board().context("Failed to load saved game")?;
    let difficulty = store.difficulty()?;

    let report = play_turn(&mut board, square, difficulty, &mut rand::thread_rng())
        .with_context(|| format!("Cannot play square {}", square))?;
    store.save_board(&board).context("Failed to save game")?;

    println!("{}\n", display::describe_turn(&report));
    println!("{}", display::render(&board, difficulty));
    Ok(())
}

#[instrument(skip(store))]
fn run_show(store: &GameStore) -> Result<()> {
    let board = store.load_board().context("Failed to load saved game")?;
    println!("{}", display::render(&board, store.difficulty()?));
    Ok(())
}

#[instrument]
fn run_simulate(x: &str, o: &str, games: usize) -> Result<()> {
    let (x, o) = (Difficulty::from_tag(x), Difficulty::from_tag(o));
    info!(%x, %o, games, "Starting simulation");

    let tally = simulate(x, o, games, &mut rand::thread_rng())?;
    println!("X ({}) vs O ({}) over {} games", x, o, tally.games());
    println!("{}", tally);
    Ok(())
}
