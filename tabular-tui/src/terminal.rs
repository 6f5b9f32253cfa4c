//! Raw-mode terminal backend

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, SetAttribute},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, TextStyle};

/// Owns the raw-mode terminal session and double-buffered drawing.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Collects pending raw events, blocking up to `timeout` for the first.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Writes the cells that changed since the previous draw.
    pub fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        if buffer.width() != self.previous.width() || buffer.height() != self.previous.height() {
            // Size changed; repaint everything against a blank canvas.
            self.previous = Buffer::new(buffer.width(), buffer.height());
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in buffer.diff(&self.previous) {
            // The glyph before a continuation cell already occupies this
            // column; writing it would shift the rest of the run.
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x + last_char_width {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }
            Self::apply_style(&mut self.stdout, cell.style, last_style)?;
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;
            last_x = x;
            last_y = y;
            last_char_width = (cell.char.width().unwrap_or(1).max(1)) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.previous = buffer.clone();
        Ok(())
    }

    fn apply_style(stdout: &mut io::Stdout, style: TextStyle, last: TextStyle) -> io::Result<()> {
        if style.bold != last.bold {
            let attr = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        if style.dim != last.dim {
            let attr = if style.dim {
                Attribute::Dim
            } else {
                Attribute::NormalIntensity
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        if style.underline != last.underline {
            let attr = if style.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        if style.reverse != last.reverse {
            let attr = if style.reverse {
                Attribute::Reverse
            } else {
                Attribute::NoReverse
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
