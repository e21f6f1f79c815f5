//! Terminal setup, teardown and diff-based drawing, with panic safety.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::screen::Buffer;

/// Raw-mode terminal that restores itself on drop and on panic. Drawing is
/// incremental: only cells that changed since the previous frame are
/// written.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the default panic output, otherwise
        // the message lands on the alternate screen and vanishes.
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            previous: Buffer::new(width, height),
        })
    }

    /// Current size as reported by crossterm.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Diff `frame` against the previous one and write the changes.
    pub fn draw(&mut self, frame: Buffer) -> io::Result<()> {
        if frame.width() != self.previous.width() || frame.height() != self.previous.height() {
            // Resized: repaint everything against an empty previous frame.
            self.previous = Buffer::new(frame.width(), frame.height());
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.flush_diff(&frame)?;
        self.previous = frame;
        Ok(())
    }

    fn flush_diff(&mut self, frame: &Buffer) -> io::Result<()> {
        let mut last_pos: Option<(u16, u16)> = None;
        let mut last_fg = None;
        let mut last_bg = None;
        let mut last_bold = false;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in frame.diff(&self.previous) {
            // The wide character to the left already painted this cell.
            if cell.wide_continuation {
                continue;
            }

            if last_pos != Some((x.wrapping_sub(1), y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(cell.fg))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(cell.bg))?;
                last_bg = Some(cell.bg);
            }
            if cell.bold != last_bold {
                let attr = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(self.stdout, SetAttribute(attr))?;
                last_bold = cell.bold;
            }

            write!(self.stdout, "{}", cell.symbol)?;
            last_pos = Some((x, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore();
    }
}

fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    Ok(())
}
