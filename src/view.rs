//! Renderer contract: snapshots going out, intents coming back.
//!
//! A renderer never touches the engine. It receives a [`BoardView`],
//! draws it however it likes, and reports what the user did as an
//! [`Intent`]. [`dispatch`] is the only path from an intent back into
//! the engine.

use crate::games::tictactoe::{Board, GameEngine, Outcome, Player, Position, Square, rules};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, instrument};

/// Read-only snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// The board at the time of the snapshot.
    pub board: Board,
    /// Player whose mark goes next.
    pub turn: Player,
    /// Current outcome.
    pub outcome: Outcome,
}

impl BoardView {
    /// Whether the cell at `index` accepts a click.
    ///
    /// Occupied cells and every cell of a finished game are disabled.
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        !self.outcome.is_over() && self.board.is_empty(index)
    }

    /// Status line: `Winner: X`, `It's a draw!` or `Next: O`.
    pub fn status_text(&self) -> String {
        if let Some(winner) = self.outcome.winner() {
            format!("Winner: {}", winner)
        } else if self.outcome == Outcome::Draw {
            "It's a draw!".to_string()
        } else {
            format!("Next: {}", self.turn)
        }
    }

    /// Accessible description of a cell, numbered from 1.
    pub fn cell_label(&self, index: usize) -> String {
        match self.board.get(index).map(Square::player) {
            Some(Some(player)) => format!("Cell {}, {}", index + 1, player),
            Some(None) => format!("Cell {}, empty. Click to place {}", index + 1, self.turn),
            None => format!("Cell {}, off the board", index + 1),
        }
    }

    /// Positions of the completed line, when the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }
}

impl GameEngine {
    /// Takes a snapshot of the current game for rendering.
    pub fn view(&self) -> BoardView {
        BoardView {
            board: self.board().clone(),
            turn: self.turn(),
            outcome: self.outcome(),
        }
    }
}

/// Something the user asked for through a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A cell was clicked or otherwise chosen (0-8).
    CellSelected(usize),
    /// The restart control was activated.
    Restart,
    /// The user wants to leave.
    Quit,
}

/// Whether the event loop should keep going after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Forwards an intent to the engine.
#[instrument(skip(engine))]
pub fn dispatch(engine: &mut GameEngine, intent: Intent) -> Flow {
    match intent {
        Intent::CellSelected(index) => {
            if !engine.apply_move(index) {
                debug!(index, "Cell selection had no effect");
            }
            Flow::Continue
        }
        Intent::Restart => {
            engine.restart();
            Flow::Continue
        }
        Intent::Quit => Flow::Exit,
    }
}

/// Rendering error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Render error: {} at {}:{}", message, file, line)]
pub struct RenderError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RenderError {
    /// Creates a new render error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RenderError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RenderError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Draws board snapshots.
pub trait Renderer {
    /// Renders one snapshot.
    fn render(&mut self, view: &BoardView) -> Result<(), RenderError>;
}

/// Plain-text renderer writing to any [`Write`] sink.
///
/// Empty cells show their 1-based number so a reader knows what to type.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer over `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    #[instrument(skip_all, fields(outcome = %view.outcome))]
    fn render(&mut self, view: &BoardView) -> Result<(), RenderError> {
        writeln!(self.out, "{}", format_board(view))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", view.status_text())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Renders snapshots as one JSON document per line.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer over `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, view: &BoardView) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

fn format_board(view: &BoardView) -> String {
    let mut result = String::new();
    for (i, cell) in view.board.squares().iter().enumerate() {
        if i % 3 == 0 && i > 0 {
            result.push_str("\n---+---+---\n");
        }
        match cell {
            Square::Occupied(player) => result.push_str(&format!(" {} ", player)),
            Square::Empty => result.push_str(&format!(" {} ", i + 1)),
        }
        if i % 3 < 2 {
            result.push('|');
        }
    }
    result
}
