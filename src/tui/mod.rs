//! Terminal UI for tic-tac-toe.

mod app;
mod guard;
mod input;
mod ui;

pub use app::TuiApp;
pub use guard::TerminalGuard;
pub use input::{key_intent, move_cursor};
pub use ui::{ScreenLayout, cell_rects, draw, hit_test, screen_layout};

use crate::config::TuiConfig;
use crate::games::tictactoe::Position;
use crate::view::{BoardView, Flow, RenderError, Renderer};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

/// Draws snapshots onto a ratatui terminal, with the cursor highlighted.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    cursor: Position,
    show_help: bool,
    last_area: Rect,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wraps a terminal.
    pub fn new(terminal: Terminal<B>, show_help: bool) -> Self {
        Self {
            terminal,
            cursor: Position::Center,
            show_help,
            last_area: Rect::default(),
        }
    }

    /// Sets the cell highlighted on the next render.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Frame area of the most recent render, used for mouse hit-testing.
    pub fn last_area(&self) -> Rect {
        self.last_area
    }

    /// Whether the help line is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Gives access to the wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, view: &BoardView) -> Result<(), RenderError> {
        let cursor = self.cursor;
        let show_help = self.show_help;
        let mut area = self.last_area;
        self.terminal
            .draw(|f| {
                area = f.area();
                ui::draw(f, view, cursor, show_help);
            })
            .map_err(|e| RenderError::new(format!("Terminal draw failed: {}", e)))?;
        self.last_area = area;
        Ok(())
    }
}

/// Run the TUI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    // Log to file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    install_file_logging(log_file, config.log_file());

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut guard = TerminalGuard::new(io::stdout());
    execute!(guard.writer_mut(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to initialise terminal")?;
    let mut renderer = TerminalRenderer::new(terminal, *config.show_help());

    let res = run_app(&mut renderer, config);

    let restored = guard.restore();
    let cursor = renderer.terminal_mut().show_cursor();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");

    res?;
    restored.context("Failed to restore terminal")?;
    cursor.context("Failed to show cursor")?;
    Ok(())
}

/// Sends tracing output to `log_file` so it stays off the TUI.
///
/// Returns `false`, after a warning, when a global subscriber is
/// already installed.
fn install_file_logging(log_file: std::fs::File, path: &std::path::Path) -> bool {
    let init = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    match init {
        Ok(()) => true,
        Err(e) => {
            warn!(
                error = %e,
                log_file = %path.display(),
                "Subscriber already installed, TUI log file unused"
            );
            false
        }
    }
}

/// Draw, wait for one event, dispatch it; repeat until quit.
fn run_app(
    renderer: &mut TerminalRenderer<CrosstermBackend<Stdout>>,
    config: &TuiConfig,
) -> Result<()> {
    let mut app = TuiApp::new();

    loop {
        renderer.set_cursor(app.cursor());
        renderer.render(&app.engine().view())?;

        if !event::poll(config.tick_rate())? {
            continue;
        }

        let flow = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.handle_click(renderer.last_area(), renderer.show_help(), column, row),
            _ => Flow::Continue,
        };

        if flow == Flow::Exit {
            info!("User quit");
            return Ok(());
        }
    }
}
