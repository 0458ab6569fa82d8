//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Rules are kept apart from
//! the engine so renderers and tests can evaluate any board directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board: win first, then draw, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Position, Square};
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_win_on_full_board() {
        // X X X / O O X / X O O: full, but the top row wins
        let layout = [
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::iter().zip(layout) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_evaluate_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let layout = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        let mut board = Board::new();
        for (pos, player) in Position::iter().zip(layout) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
