//! Rectangle math: splitting the dashboard area into grid tracks and
//! resolving a widget's span into screen coordinates.

use mirador_core::WidgetSpec;

/// An axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row.
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink by `margin` cells on every side (saturating).
    #[must_use]
    pub const fn inner(&self, margin: u16) -> Self {
        let shrink = margin.saturating_mul(2);
        Self {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            width: self.width.saturating_sub(shrink),
            height: self.height.saturating_sub(shrink),
        }
    }
}

/// Split `total` cells starting at `origin` into `count` tracks.
///
/// The remainder is distributed one cell at a time to the leading tracks,
/// so track sizes differ by at most one and always sum to `total`.
#[must_use]
pub fn tracks(origin: u16, total: u16, count: u16) -> Vec<(u16, u16)> {
    if count == 0 {
        return Vec::new();
    }
    let base = total / count;
    let remainder = total % count;
    let mut result = Vec::with_capacity(usize::from(count));
    let mut offset = origin;
    for index in 0..count {
        let size = base + u16::from(index < remainder);
        result.push((offset, size));
        offset = offset.saturating_add(size);
    }
    result
}

/// Screen rectangle for a widget's span inside `area`.
///
/// Spans reaching past the grid are clipped to it, mirroring the placement
/// algorithm's behavior for out-of-range rectangles.
#[must_use]
pub fn span_rect(area: Rect, grid_rows: u16, grid_columns: u16, spec: &WidgetSpec) -> Rect {
    if spec.row >= grid_rows || spec.column >= grid_columns {
        return Rect::default();
    }
    let rows = tracks(area.y, area.height, grid_rows);
    let columns = tracks(area.x, area.width, grid_columns);

    let row_end =
        usize::from(spec.row.saturating_add(spec.row_span.max(1)).min(grid_rows)) - 1;
    let col_end = usize::from(
        spec.column
            .saturating_add(spec.column_span.max(1))
            .min(grid_columns),
    ) - 1;

    let (top, _) = rows[usize::from(spec.row)];
    let (left, _) = columns[usize::from(spec.column)];
    let (last_top, last_height) = rows[row_end];
    let (last_left, last_width) = columns[col_end];

    Rect {
        x: left,
        y: top,
        width: (last_left + last_width).saturating_sub(left),
        height: (last_top + last_height).saturating_sub(top),
    }
}
