//! Terminal cell buffer.
//!
//! Uses `CompactString` so typical graphemes stay inline without heap
//! allocations. Writes are width-aware: wide characters claim two columns
//! and anything past the buffer edge is clipped silently.

use compact_str::CompactString;
use mirador_core::Color;
use unicode_width::UnicodeWidthChar;

use crate::layout::Rect;

/// A single terminal cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Symbol displayed in this cell; empty for the continuation cell of a
    /// wide character.
    pub symbol: CompactString,
    /// Foreground color.
    pub fg: Color,
    /// Background color; `None` uses the terminal default.
    pub bg: Option<Color>,
    /// Bold text.
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            fg: Color::WHITE,
            bg: None,
            bold: false,
        }
    }
}

/// A `width x height` grid of cells.
#[derive(Debug, Clone)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create a buffer of default cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    /// Buffer width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(x, y)`, if in bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Reset every cell to a blank with the given colors.
    pub fn clear(&mut self, fg: Color, bg: Option<Color>) {
        let blank = Cell {
            fg,
            bg,
            ..Cell::default()
        };
        self.cells.fill(blank);
    }

    /// Write one character at `(x, y)`; out-of-bounds writes are dropped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Option<Color>, bold: bool) {
        let char_width = ch.width().unwrap_or(0) as u16;
        if char_width == 0 {
            return;
        }
        let Some(index) = self.index(x, y) else {
            return;
        };
        // A wide character that would hang off the edge is clipped whole.
        if x.saturating_add(char_width) > self.width {
            return;
        }
        self.cells[index] = Cell {
            symbol: CompactString::from(ch.to_string()),
            fg,
            bg,
            bold,
        };
        if char_width == 2 {
            self.cells[index + 1] = Cell {
                symbol: CompactString::const_new(""),
                fg,
                bg,
                bold,
            };
        }
    }

    /// Write a string starting at `(x, y)`, clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Option<Color>, bold: bool) {
        let mut cursor = x;
        for ch in text.chars() {
            let char_width = ch.width().unwrap_or(0) as u16;
            if char_width == 0 {
                continue;
            }
            if cursor >= self.width || y >= self.height {
                break;
            }
            self.put_char(cursor, y, ch, fg, bg, bold);
            cursor = cursor.saturating_add(char_width);
        }
    }

    /// Set the background color of every cell in `rect`, keeping symbols.
    pub fn fill_bg(&mut self, rect: Rect, bg: Color) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(index) = self.index(x, y) {
                    self.cells[index].bg = Some(bg);
                }
            }
        }
    }

    /// The visible text of one row (continuation cells contribute nothing).
    /// Primarily for tests.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}
