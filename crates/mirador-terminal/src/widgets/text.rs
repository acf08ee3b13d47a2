//! Plain text painting helpers.

use mirador_core::Color;
use unicode_width::UnicodeWidthStr;

use crate::buffer::CellBuffer;
use crate::layout::Rect;

/// Truncate `text` to at most `width` columns, ending with an ellipsis
/// when anything was cut.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Draw `text` centered in `rect` (horizontally and vertically).
pub fn draw_text_centered(
    buf: &mut CellBuffer,
    rect: Rect,
    text: &str,
    fg: Color,
    bg: Option<Color>,
    bold: bool,
) {
    if rect.is_empty() {
        return;
    }
    let fitted = fit(text, usize::from(rect.width));
    let text_width = fitted.width() as u16;
    let x = rect.x + (rect.width.saturating_sub(text_width)) / 2;
    let y = rect.y + rect.height / 2;
    buf.put_str(x, y, &fitted, fg, bg, bold);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_short_text_unchanged() {
        assert_eq!(fit("ok", 10), "ok");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("hello world", 6), "hello…");
    }

    #[test]
    fn test_fit_zero_width() {
        assert_eq!(fit("hello", 0), "");
    }

    #[test]
    fn test_centered_horizontally() {
        let mut buf = CellBuffer::new(10, 1);
        draw_text_centered(&mut buf, Rect::new(0, 0, 10, 1), "hi", Color::WHITE, None, false);
        assert_eq!(buf.row_text(0), "    hi    ");
    }

    #[test]
    fn test_centered_vertically() {
        let mut buf = CellBuffer::new(4, 3);
        draw_text_centered(&mut buf, Rect::new(0, 0, 4, 3), "x", Color::WHITE, None, false);
        assert_eq!(buf.row_text(1), " x  ");
    }

    #[test]
    fn test_long_text_clipped() {
        let mut buf = CellBuffer::new(5, 1);
        draw_text_centered(
            &mut buf,
            Rect::new(0, 0, 5, 1),
            "overflowing",
            Color::WHITE,
            None,
            false,
        );
        assert_eq!(buf.row_text(0), "over…");
    }
}
