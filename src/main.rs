//! Tic Tac Toe - unified CLI
//!
//! Interactive terminal play, or scripted play from a list of moves.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe_engine::{GameEngine, JsonRenderer, Renderer, TextRenderer, TuiConfig, tui};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config } => run_tui(config),
        Command::Play { moves, json } => run_play(&moves, json),
    }
}

/// Run the interactive terminal game
fn run_tui(config: Option<std::path::PathBuf>) -> Result<()> {
    let config = TuiConfig::load(config.as_deref())?;
    tui::run_tui(&config)
}

/// Apply moves to a fresh game and print the result
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_play(moves: &[u8], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut engine = GameEngine::new();
    for &index in moves {
        let accepted = engine.apply_move(usize::from(index));
        debug!(index, accepted, "Scripted move");
    }
    info!(outcome = %engine.outcome(), "Scripted game finished");

    let stdout = io::stdout().lock();
    if json {
        JsonRenderer::new(stdout).render(&engine.view())?;
    } else {
        TextRenderer::new(stdout).render(&engine.view())?;
    }

    Ok(())
}
