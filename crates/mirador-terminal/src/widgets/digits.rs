//! Large block-glyph digits, three rows tall.
//!
//! Values that contain characters outside the glyph table (error strings,
//! formatted text with units) fall back to plain centered text.

use mirador_core::Color;

use crate::buffer::CellBuffer;
use crate::layout::Rect;
use crate::widgets::text::draw_text_centered;

/// Rows per glyph.
const GLYPH_ROWS: usize = 3;

/// Glyph for one character, or `None` when it has no big form.
fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match ch {
        '0' => ["┌─┐", "│ │", "└─┘"],
        '1' => ["╶┐ ", " │ ", "╶┴╴"],
        '2' => ["╶─┐", "┌─┘", "└─╴"],
        '3' => ["╶─┐", " ─┤", "╶─┘"],
        '4' => ["╷ ╷", "└─┤", "  ╵"],
        '5' => ["┌─╴", "└─┐", "╶─┘"],
        '6' => ["┌─╴", "├─┐", "└─┘"],
        '7' => ["╶─┐", "  │", "  ╵"],
        '8' => ["┌─┐", "├─┤", "└─┘"],
        '9' => ["┌─┐", "└─┤", "╶─┘"],
        '-' => ["   ", "╶─╴", "   "],
        '.' => [" ", " ", "."],
        ':' => [" ", "·", "·"],
        ' ' => [" ", " ", " "],
        _ => return None,
    };
    Some(rows)
}

/// Whether every character of `text` has a big glyph.
#[must_use]
pub fn renderable(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| glyph(ch).is_some())
}

/// Total column width of `text` in big glyphs, including 1-column gaps.
fn glyph_width(text: &str) -> usize {
    let glyphs: usize = text
        .chars()
        .filter_map(glyph)
        .map(|rows| rows[0].chars().count())
        .sum();
    let gaps = text.chars().count().saturating_sub(1);
    glyphs + gaps
}

/// Draw `text` as big digits centered in `rect`.
///
/// Falls back to plain centered text when the value has no big form or
/// does not fit.
pub fn draw_digits(
    buf: &mut CellBuffer,
    rect: Rect,
    text: &str,
    fg: Color,
    bg: Option<Color>,
) {
    let width = glyph_width(text);
    if !renderable(text)
        || width > usize::from(rect.width)
        || usize::from(rect.height) < GLYPH_ROWS
    {
        draw_text_centered(buf, rect, text, fg, bg, true);
        return;
    }

    let top = rect.y + (rect.height - GLYPH_ROWS as u16) / 2;
    let mut x = rect.x + (rect.width - width as u16) / 2;
    for ch in text.chars() {
        let Some(rows) = glyph(ch) else { continue };
        for (row_index, row) in rows.iter().enumerate() {
            buf.put_str(x, top + row_index as u16, row, fg, bg, false);
        }
        x += rows[0].chars().count() as u16 + 1;
    }
}
