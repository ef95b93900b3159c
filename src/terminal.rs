//! Host terminal session.
//!
//! Menus need single key presses without echo, so the terminal runs in raw mode for as
//! long as a session is alive. Dropping the session puts the terminal back.

use crate::error::{Result, ScreenError};
use ratatui::crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Raw mode plus a hidden cursor, optionally on the alternate screen.
pub struct TerminalSession {
    active: bool,
    alternate_screen: bool,
}

impl TerminalSession {
    pub fn start(alternate_screen: bool) -> Result<Self> {
        enable_raw_mode().map_err(|err| ScreenError::terminal("failed to enable raw mode", err))?;

        let mut session = Self {
            active: true,
            alternate_screen,
        };
        let mut stdout = io::stdout();
        let entered = if alternate_screen {
            execute!(stdout, EnterAlternateScreen, Hide)
        } else {
            execute!(stdout, Hide)
        };
        if let Err(err) = entered {
            let _ = session.finish();
            return Err(ScreenError::terminal("failed to prepare the terminal", err));
        }

        log::debug!("terminal session started (alternate screen: {alternate_screen})");
        Ok(session)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn finish(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        if self.alternate_screen {
            execute!(stdout, Show, LeaveAlternateScreen)?;
        } else {
            execute!(stdout, Show)?;
        }
        disable_raw_mode()?;
        log::debug!("terminal session finished");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
