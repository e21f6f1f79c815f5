//! Cell buffer the form is drawn into before diffing against the screen.

use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    /// True for the cell shadowed by a preceding double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            wide_continuation: false,
        }
    }
}

/// A width x height grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[allow(dead_code)] // Read back by the render tests
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Out-of-bounds writes are dropped, which is what clipping wants.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Fill a rectangle with a background color, clipped to the buffer.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Color) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.set(
                    col,
                    row,
                    Cell {
                        bg,
                        ..Cell::default()
                    },
                );
            }
        }
    }

    /// Write a string starting at (x, y), advancing by display width.
    /// Double-width characters occupy two cells, the second marked as a
    /// continuation; a wide character that would straddle the right edge is
    /// dropped. Returns the column after the last cell written.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: TextStyle) -> u16 {
        let mut col = x;
        for symbol in text.chars() {
            let w = symbol.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > self.width {
                break;
            }
            self.set(
                col,
                y,
                Cell {
                    symbol,
                    fg: style.fg,
                    bg: style.bg,
                    bold: style.bold,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    col + 1,
                    y,
                    Cell {
                        symbol: ' ',
                        fg: style.fg,
                        bg: style.bg,
                        bold: style.bold,
                        wide_continuation: true,
                    },
                );
            }
            col += w;
        }
        col
    }

    /// Cells that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Style applied by [`Buffer::set_string`].
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}
