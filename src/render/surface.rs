//! Output surfaces the renderer writes to.

use crate::error::{Result, ScreenError};
use ratatui::crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// A line-oriented character grid.
pub trait OutputSurface {
    /// Write `line` followed by a line break.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Write `text` with no line break. Must be visible immediately, since the
    /// typewriter effect writes one character at a time.
    fn write_raw(&mut self, text: &str) -> Result<()>;

    /// Blank the whole display and move to its top-left corner.
    fn clear(&mut self) -> Result<()>;

    /// Number of rows currently visible.
    fn height(&self) -> Result<u16>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<O: OutputSurface + ?Sized> OutputSurface for &mut O {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        (**self).write_raw(text)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn height(&self) -> Result<u16> {
        (**self).height()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Terminal output through crossterm.
///
/// Lines end in `\r\n` so output stays aligned when the terminal is in raw mode.
pub struct TerminalOutput<W: Write = Stdout> {
    out: W,
}

impl TerminalOutput<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSurface for TerminalOutput<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\r\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|err| ScreenError::terminal("failed to clear the screen", err))?;
        self.out.flush()?;
        Ok(())
    }

    fn height(&self) -> Result<u16> {
        let (_, rows) = terminal::size()
            .map_err(|err| ScreenError::terminal("failed to query terminal size", err))?;
        Ok(rows)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
