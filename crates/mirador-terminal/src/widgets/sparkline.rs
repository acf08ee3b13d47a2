//! Sparkline painting with vertical block characters.

use mirador_core::{Color, SparklineSummary};

use crate::buffer::CellBuffer;
use crate::layout::Rect;

/// Block characters for sparkline rendering (8 levels).
const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draw `points` as a one-row sparkline, vertically centered in `rect`.
///
/// When there are more points than columns, each column is a bucket
/// aggregated with `summary`; with fewer points than columns the graph is
/// left-aligned, one column per point. Scaling is relative to the min/max
/// of the whole series; a flat series renders at mid height.
pub fn draw_sparkline(
    buf: &mut CellBuffer,
    rect: Rect,
    points: &[f64],
    summary: SparklineSummary,
    color: Color,
) {
    if rect.is_empty() || points.is_empty() {
        return;
    }

    let columns = usize::from(rect.width).min(points.len());
    let min = points.iter().copied().fold(f64::MAX, f64::min);
    let max = points.iter().copied().fold(f64::MIN, f64::max);
    let range = max - min;

    let y = rect.y + rect.height / 2;
    for column in 0..columns {
        let start = column * points.len() / columns;
        let end = ((column + 1) * points.len() / columns).max(start + 1);
        let level = summary.apply(&points[start..end]);

        let normalized = if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((level - min) / range).clamp(0.0, 1.0)
        };
        let glyph = SPARK_CHARS[((normalized * 7.0).round() as usize).min(7)];
        buf.put_char(rect.x + column as u16, y, glyph, color, None, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(width: u16, points: &[f64], summary: SparklineSummary) -> String {
        let mut buf = CellBuffer::new(width, 1);
        draw_sparkline(
            &mut buf,
            Rect::new(0, 0, width, 1),
            points,
            summary,
            Color::WHITE,
        );
        buf.row_text(0).trim_end().to_string()
    }

    #[test]
    fn test_ramp_uses_full_range() {
        let out = render(4, &[0.0, 1.0, 2.0, 3.0], SparklineSummary::Max);
        assert_eq!(out, "▁▃▆█");
    }

    #[test]
    fn test_flat_series_is_mid_height() {
        let out = render(3, &[5.0, 5.0, 5.0], SparklineSummary::Max);
        assert_eq!(out, "▅▅▅");
    }

    #[test]
    fn test_fewer_points_than_columns_left_aligned() {
        let mut buf = CellBuffer::new(8, 1);
        draw_sparkline(
            &mut buf,
            Rect::new(0, 0, 8, 1),
            &[0.0, 10.0],
            SparklineSummary::Max,
            Color::WHITE,
        );
        let row = buf.row_text(0);
        // Two glyphs at the left edge, blank cells after.
        assert_eq!(row.trim_end().chars().count(), 2);
        assert_eq!(row.chars().next(), Some('▁'));
    }

    #[test]
    fn test_bucketing_respects_summary() {
        // 8 points into 4 columns: buckets of 2.
        let points = [0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0];
        let max_out = render(4, &points, SparklineSummary::Max);
        let min_out = render(4, &points, SparklineSummary::Min);
        assert_eq!(max_out, "████");
        assert_eq!(min_out, "▁▁▁▁");
    }

    #[test]
    fn test_mean_summary() {
        let points = [0.0, 10.0, 0.0, 10.0];
        let out = render(2, &points, SparklineSummary::Mean);
        // Both buckets average to 5.0 -> mid-height glyph.
        assert_eq!(out, "▅▅");
    }

    #[test]
    fn test_empty_points_draw_nothing() {
        let out = render(4, &[], SparklineSummary::Max);
        assert!(out.is_empty());
    }

    #[test]
    fn test_vertical_centering() {
        let mut buf = CellBuffer::new(3, 3);
        draw_sparkline(
            &mut buf,
            Rect::new(0, 0, 3, 3),
            &[1.0, 2.0, 3.0],
            SparklineSummary::Max,
            Color::WHITE,
        );
        assert_eq!(buf.row_text(0).trim_end(), "");
        assert!(!buf.row_text(1).trim_end().is_empty());
    }
}
