//! Keyboard mapping: cursor movement and intents.

use crate::games::tictactoe::Position;
use crate::view::Intent;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys. The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Translates a key press into an intent, if it is one.
///
/// Digits pick a cell directly (1 is top-left); Enter and Space pick
/// the cell under the cursor.
pub fn key_intent(cursor: Position, key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') => Some(Intent::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::CellSelected(cursor.to_index())),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(Intent::CellSelected(digit as usize - 1)),
            _ => None,
        },
        _ => None,
    }
}
