//! Differential renderer: emits only the cells that changed since the
//! last frame, batching crossterm commands and caching style state to
//! minimize escape sequences.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use mirador_core::Color;
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Cell, CellBuffer};
use crate::color::{to_crossterm, ColorMode};

#[derive(Debug, Clone, Copy, PartialEq)]
struct StyleState {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
}

const UNSET: StyleState = StyleState {
    fg: None,
    bg: None,
    bold: false,
};

/// Renderer that diffs consecutive frames.
#[derive(Debug)]
pub struct DiffRenderer {
    color_mode: ColorMode,
    last_frame: Vec<Cell>,
    last_size: (u16, u16),
    cursor: (u16, u16),
    style: StyleState,
}

impl DiffRenderer {
    /// Create a renderer for the given color mode.
    #[must_use]
    pub fn new(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            last_frame: Vec::new(),
            last_size: (0, 0),
            cursor: (u16::MAX, u16::MAX),
            style: UNSET,
        }
    }

    /// The active color mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Forget the previous frame; the next draw repaints everything.
    /// Call after a resize or an external screen clear.
    pub fn reset(&mut self) {
        self.last_frame.clear();
        self.last_size = (0, 0);
        self.cursor = (u16::MAX, u16::MAX);
        self.style = UNSET;
    }

    /// Draw `buffer` to `out`, emitting only dirty cells.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying writer.
    pub fn draw<W: Write>(&mut self, out: &mut W, buffer: &CellBuffer) -> io::Result<()> {
        let size = (buffer.width(), buffer.height());
        if size != self.last_size {
            self.reset();
        }
        let full_redraw = self.last_frame.is_empty();

        for y in 0..buffer.height() {
            let mut x = 0;
            while x < buffer.width() {
                let index = usize::from(y) * usize::from(buffer.width()) + usize::from(x);
                let cell = &buffer.cells()[index];

                // Continuation cell of a wide character; the glyph before it
                // already covered this column.
                if cell.symbol.is_empty() {
                    x += 1;
                    continue;
                }
                if !full_redraw && self.last_frame.get(index) == Some(cell) {
                    x += 1;
                    continue;
                }

                if self.cursor != (x, y) {
                    queue!(out, MoveTo(x, y))?;
                }
                self.apply_style(out, cell)?;
                queue!(out, Print(cell.symbol.as_str()))?;

                let advance = (cell.symbol.width() as u16).max(1);
                self.cursor = (x.saturating_add(advance), y);
                x = x.saturating_add(advance);
            }
        }

        self.last_frame = buffer.cells().to_vec();
        self.last_size = size;
        out.flush()
    }

    fn apply_style<W: Write>(&mut self, out: &mut W, cell: &Cell) -> io::Result<()> {
        if self.color_mode == ColorMode::Mono {
            return Ok(());
        }
        if self.style.fg != Some(cell.fg) {
            if let Some(fg) = to_crossterm(cell.fg, self.color_mode) {
                queue!(out, SetForegroundColor(fg))?;
            }
            self.style.fg = Some(cell.fg);
        }
        if self.style.bg != cell.bg {
            match cell.bg.and_then(|bg| to_crossterm(bg, self.color_mode)) {
                Some(bg) => queue!(out, SetBackgroundColor(bg))?,
                None => {
                    queue!(out, ResetColor)?;
                    // ResetColor clears the foreground too; force a re-emit.
                    self.style.fg = None;
                }
            }
            self.style.bg = cell.bg;
        }
        if self.style.bold != cell.bold {
            let attr = if cell.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            queue!(out, SetAttribute(attr))?;
            self.style.bold = cell.bold;
        }
        Ok(())
    }
}
