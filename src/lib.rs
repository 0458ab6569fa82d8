//! Tic-tac-toe engine library
//!
//! A single-game tic-tac-toe engine with pluggable renderers.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, the turn and the derived outcome
//! - **Rules**: pure win/draw detection over a [`Board`] snapshot
//! - **View**: [`BoardView`] snapshots out, [`Intent`]s in, [`Renderer`] implementations
//! - **TUI**: ratatui front end with keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome(), Outcome::Won(Player::X));
//! assert_eq!(engine.view().status_text(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod view;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{Board, GameEngine, Outcome, Player, Position, Square, rules};

// Crate-level exports - Renderer contract
pub use view::{
    BoardView, Flow, Intent, JsonRenderer, RenderError, Renderer, TextRenderer, dispatch,
};
