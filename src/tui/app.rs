//! Application state and event handling.

use crate::games::tictactoe::{GameEngine, Position};
use crate::view::{self, Flow, Intent};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use super::{input, ui};

/// Main application state: the engine plus the keyboard cursor.
#[derive(Debug, Clone)]
pub struct TuiApp {
    engine: GameEngine,
    cursor: Position,
}

impl TuiApp {
    /// Creates a new application with a fresh game and the cursor centered.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        if let Some(intent) = input::key_intent(self.cursor, key) {
            return self.apply(intent);
        }

        let moved = input::move_cursor(self.cursor, key);
        if moved != self.cursor {
            debug!(to = %moved, "Cursor moved");
            self.cursor = moved;
        }
        Flow::Continue
    }

    /// Handles a left click at a terminal coordinate within `area`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, area: Rect, show_help: bool, column: u16, row: u16) -> Flow {
        match ui::hit_test(area, show_help, column, row) {
            Some(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.apply(Intent::CellSelected(index))
            }
            None => Flow::Continue,
        }
    }

    fn apply(&mut self, intent: Intent) -> Flow {
        view::dispatch(&mut self.engine, intent)
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
