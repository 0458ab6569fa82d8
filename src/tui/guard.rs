//! Terminal mode restoration.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Restores the terminal when dropped: leaves raw mode, the alternate
/// screen and mouse capture.
///
/// Create it right after raw mode is enabled so every exit path, early
/// `?` returns included, hands back a usable terminal.
pub struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Arms a guard that writes its escape sequences to `out`.
    pub fn new(out: W) -> Self {
        Self { out, active: true }
    }

    /// The sink used for terminal commands.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Runs every restore step, even when an earlier one fails, and
    /// reports the first error. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        debug!("Restoring terminal");

        let raw = disable_raw_mode();
        let screen = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}
