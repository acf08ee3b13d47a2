//! Deterministic widget placement onto a 2-D cell grid.
//!
//! The grid is computed once per dashboard at construction time and never
//! changes afterwards: widgets do not move. The rendering layer consults it
//! to decide, per cell, whether to draw a widget's root element or nothing.

use crate::config::WidgetSpec;

/// State of one grid cell after placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GridCell {
    /// No widget claims this cell.
    #[default]
    Empty,
    /// Inside some widget's rectangle, but not its top-left cell.
    Occupied,
    /// Top-left cell of the widget with this spec index; the widget's
    /// root element renders here with its full span.
    Primary(usize),
}

/// A placed `rows x columns` grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u16,
    columns: u16,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Place `specs` onto a `rows x columns` grid.
    ///
    /// Each spec claims the rectangle `[row, row + row_span) x
    /// [column, column + column_span)`. Cells outside the grid are skipped
    /// silently (out-of-range specs are clipped, never rejected). There is
    /// no overlap detection: a later spec overwrites an earlier spec's
    /// claim on a shared cell, so placement is last-writer-wins in input
    /// order.
    #[must_use]
    pub fn place(rows: u16, columns: u16, specs: &[WidgetSpec]) -> Self {
        let mut cells = vec![GridCell::Empty; usize::from(rows) * usize::from(columns)];

        for (index, spec) in specs.iter().enumerate() {
            let row_end = spec.row.saturating_add(spec.row_span);
            let col_end = spec.column.saturating_add(spec.column_span);
            for r in spec.row..row_end.min(rows) {
                for c in spec.column..col_end.min(columns) {
                    let cell = if r == spec.row && c == spec.column {
                        GridCell::Primary(index)
                    } else {
                        GridCell::Occupied
                    };
                    cells[usize::from(r) * usize::from(columns) + usize::from(c)] = cell;
                }
            }
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Cell state at `(row, column)`; out-of-bounds coordinates read as
    /// `Empty`.
    #[must_use]
    pub fn cell(&self, row: u16, column: u16) -> GridCell {
        if row >= self.rows || column >= self.columns {
            return GridCell::Empty;
        }
        self.cells[usize::from(row) * usize::from(self.columns) + usize::from(column)]
    }

    /// Iterate cells in row-major order as `(row, column, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, GridCell)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let row = (i / usize::from(columns)) as u16;
            let column = (i % usize::from(columns)) as u16;
            (row, column, *cell)
        })
    }

    /// Spec indices that own a primary cell, in row-major order.
    pub fn primaries(&self) -> impl Iterator<Item = (u16, u16, usize)> + '_ {
        self.iter().filter_map(|(r, c, cell)| match cell {
            GridCell::Primary(index) => Some((r, c, index)),
            _ => None,
        })
    }
}
