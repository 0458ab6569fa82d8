//! Tic-tac-toe: board types, pure rules and the stateful engine.

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};

