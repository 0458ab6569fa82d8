//! Game engine for tic-tac-toe.

use super::position::Position;
use super::rules;
use super::types::{Board, Outcome, Player, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the player to move and the derived outcome. The
/// outcome is recomputed on every board change and is never set
/// directly. Once the game is over the board is frozen until
/// [`GameEngine::restart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    outcome: Outcome,
}

impl GameEngine {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Returns `false` and leaves the game untouched when the game is
    /// over, the square is occupied, or the index is off the board.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.outcome.is_over() {
            debug!(outcome = %self.outcome, "Ignoring move, game is over");
            return false;
        }

        let Some(pos) = Position::from_index(index) else {
            debug!("Ignoring move, index off the board");
            return false;
        };

        if self.board.at(pos) != Square::Empty {
            debug!(position = %pos, "Ignoring move, square occupied");
            return false;
        }

        let mark = self.turn;
        self.board.set(pos, Square::Occupied(mark));
        self.turn = mark.opponent();
        self.outcome = rules::evaluate(&self.board);

        info!(mark = %mark, position = %pos, outcome = %self.outcome, "Move applied");
        true
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.outcome = rules::evaluate(&self.board);
        info!("Game restarted");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
