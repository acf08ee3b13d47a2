//! Progress bar painting.

use mirador_core::Color;

use crate::buffer::CellBuffer;
use crate::layout::Rect;

/// Partial fill characters, one per extra eighth of a cell.
const PARTIAL_BLOCKS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Track character for the unfilled part of the bar.
const TRACK: char = '░';

/// Draw a horizontal progress bar on the middle row of `rect`.
///
/// `amount` is an absolute value against `total`; the fill ratio is
/// clamped to [0, 1] for display only. With `show_percentage` a
/// right-aligned percentage caption follows the bar.
pub fn draw_progress(
    buf: &mut CellBuffer,
    rect: Rect,
    amount: f64,
    total: f64,
    show_percentage: bool,
    color: Color,
) {
    if rect.is_empty() {
        return;
    }

    let ratio = if total > 0.0 {
        (amount / total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let caption = if show_percentage {
        format!(" {:>3.0}%", ratio * 100.0)
    } else {
        String::new()
    };
    let caption_width = caption.chars().count() as u16;
    let bar_width = rect.width.saturating_sub(caption_width);
    if bar_width == 0 {
        return;
    }

    let y = rect.y + rect.height / 2;
    let eighths = (ratio * f64::from(bar_width) * 8.0).round() as u32;
    let full = (eighths / 8).min(u32::from(bar_width)) as u16;
    let partial = (eighths % 8) as usize;

    for column in 0..bar_width {
        let glyph = if column < full {
            '█'
        } else if column == full && partial > 0 {
            PARTIAL_BLOCKS[partial]
        } else {
            TRACK
        };
        buf.put_char(rect.x + column, y, glyph, color, None, false);
    }
    if !caption.is_empty() {
        buf.put_str(rect.x + bar_width, y, &caption, color, None, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(width: u16, amount: f64, total: f64, show_percentage: bool) -> String {
        let mut buf = CellBuffer::new(width, 1);
        draw_progress(
            &mut buf,
            Rect::new(0, 0, width, 1),
            amount,
            total,
            show_percentage,
            Color::WHITE,
        );
        buf.row_text(0)
    }

    #[test]
    fn test_empty_bar() {
        assert_eq!(render(4, 0.0, 100.0, false), "░░░░");
    }

    #[test]
    fn test_full_bar() {
        assert_eq!(render(4, 100.0, 100.0, false), "████");
    }

    #[test]
    fn test_half_bar() {
        assert_eq!(render(4, 50.0, 100.0, false), "██░░");
    }

    #[test]
    fn test_partial_block() {
        // 1/3 of 4 cells = 1.33 cells = 10.67 eighths -> one full + partial.
        let out = render(4, 1.0, 3.0, false);
        assert!(out.starts_with('█'));
        assert!(PARTIAL_BLOCKS.contains(&out.chars().nth(1).unwrap()));
    }

    #[test]
    fn test_percentage_caption() {
        let out = render(10, 50.0, 100.0, true);
        assert!(out.ends_with(" 50%"));
        assert!(out.starts_with('█'));
    }

    #[test]
    fn test_over_total_clamps_display() {
        let out = render(8, 250.0, 100.0, true);
        assert!(out.contains("100%"));
        assert!(out.starts_with("███"));
    }

    #[test]
    fn test_zero_total_is_empty_bar() {
        assert_eq!(render(4, 5.0, 0.0, false), "░░░░");
    }

    #[test]
    fn test_caption_wider_than_rect_draws_nothing() {
        let out = render(3, 50.0, 100.0, true);
        assert_eq!(out, "   ");
    }
}
