//! Character grid the widget renders into

use unicode_width::UnicodeWidthChar;

/// Text attributes for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            underline: false,
            reverse: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub style: TextStyle,
    /// Marks the trailing column of a width-2 glyph. Writers skip these
    /// cells since the glyph before them already occupies the space.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

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

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Writes a string starting at `(x, y)`, clipped to `max_width` columns
    /// and the buffer edge. Wide characters that would straddle the clip
    /// boundary are dropped rather than half-drawn.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: TextStyle) {
        let limit = (x + max_width).min(self.width);
        let mut cx = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx + w > limit {
                break;
            }
            self.set(cx, y, Cell::new(ch).with_style(style));
            // Mark continuation columns of wide characters.
            for i in 1..w {
                self.set(
                    cx + i,
                    y,
                    Cell {
                        char: ' ',
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }
    }

    /// Applies a style to an entire line, keeping its characters.
    pub fn style_line(&mut self, y: u16, style: TextStyle) {
        if y >= self.height {
            return;
        }
        for x in 0..self.width {
            let idx = self.index(x, y);
            self.cells[idx].style = style;
        }
    }

    /// The characters of one line as a string, trailing spaces trimmed.
    /// Continuation cells of wide glyphs are skipped so the string reads
    /// the way the line displays. Used by tests and the plain-stdout
    /// fallback.
    pub fn line(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if cell.wide_continuation {
                    continue;
                }
                out.push(cell.char);
            }
        }
        out.trim_end().to_string()
    }

    /// Cells that differ from `other`, in row-major order.
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

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
