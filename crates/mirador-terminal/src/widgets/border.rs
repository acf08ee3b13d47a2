//! Widget box borders with title and subtitle captions.

use mirador_core::{BorderStyle, Color};

use crate::buffer::CellBuffer;
use crate::layout::Rect;
use crate::widgets::text::fit;

/// Glyph set for one border style.
#[derive(Debug, Clone, Copy)]
struct BorderGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

fn glyphs(style: BorderStyle) -> Option<BorderGlyphs> {
    let set = match style {
        BorderStyle::None => return None,
        BorderStyle::Solid => BorderGlyphs {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        },
        BorderStyle::Dashed => BorderGlyphs {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '╌',
            vertical: '╎',
        },
        BorderStyle::Double => BorderGlyphs {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
        },
        BorderStyle::Heavy => BorderGlyphs {
            top_left: '┏',
            top_right: '┓',
            bottom_left: '┗',
            bottom_right: '┛',
            horizontal: '━',
            vertical: '┃',
        },
        BorderStyle::Rounded => BorderGlyphs {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
        },
    };
    Some(set)
}

/// Draw a border around `rect` with optional captions.
///
/// The title sits on the top edge, the subtitle right-aligned on the
/// bottom edge; both are truncated to fit. A `BorderStyle::None` border
/// draws nothing (the caller still shrinks the content area uniformly so
/// layouts stay aligned across widgets).
pub fn draw_border(
    buf: &mut CellBuffer,
    rect: Rect,
    style: BorderStyle,
    color: Color,
    title: Option<&str>,
    subtitle: Option<&str>,
) {
    let Some(glyphs) = glyphs(style) else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    for x in rect.x + 1..right {
        buf.put_char(x, rect.y, glyphs.horizontal, color, None, false);
        buf.put_char(x, bottom, glyphs.horizontal, color, None, false);
    }
    for y in rect.y + 1..bottom {
        buf.put_char(rect.x, y, glyphs.vertical, color, None, false);
        buf.put_char(right, y, glyphs.vertical, color, None, false);
    }
    buf.put_char(rect.x, rect.y, glyphs.top_left, color, None, false);
    buf.put_char(right, rect.y, glyphs.top_right, color, None, false);
    buf.put_char(rect.x, bottom, glyphs.bottom_left, color, None, false);
    buf.put_char(right, bottom, glyphs.bottom_right, color, None, false);

    let caption_room = usize::from(rect.width.saturating_sub(4));
    if let Some(title) = title.filter(|t| !t.is_empty() && caption_room > 0) {
        let caption = format!(" {} ", fit(title, caption_room));
        buf.put_str(rect.x + 1, rect.y, &caption, color, None, true);
    }
    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty() && caption_room > 0) {
        let caption = format!(" {} ", fit(subtitle, caption_room));
        let len = caption.chars().count() as u16;
        let x = right.saturating_sub(len);
        buf.put_str(x, bottom, &caption, color, None, false);
    }
}
