//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to a TOML config file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a sequence of cell indices (0-8) and print the final board
    Play {
        /// Cell indices, in move order. Illegal moves are ignored.
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        moves: Vec<u8>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
