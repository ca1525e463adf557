/// Maps the logical field onto the terminal's character grid.
///
/// Rows 0 (HUD) and 1 (top border) and the last two rows (bottom border,
/// hint) are reserved; the field fills the cells inside the border.

use crate::entities::Rect;

/// Rows above the playfield: HUD line and top border.
pub const TOP_ROWS: u16 = 2;
/// Rows below the playfield: bottom border and controls hint.
pub const BOTTOM_ROWS: u16 = 2;

/// A rectangle of terminal cells, inclusive start, exclusive end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub term_width: u16,
    pub term_height: u16,
    field_width: i32,
    field_height: i32,
}

impl Viewport {
    pub fn new(term_width: u16, term_height: u16, field_width: i32, field_height: i32) -> Self {
        Viewport {
            term_width,
            term_height,
            field_width: field_width.max(1),
            field_height: field_height.max(1),
        }
    }

    /// Columns available to the field (inside the side walls).
    pub fn inner_cols(&self) -> u16 {
        self.term_width.saturating_sub(2).max(1)
    }

    /// Rows available to the field (between the borders).
    pub fn inner_rows(&self) -> u16 {
        self.term_height.saturating_sub(TOP_ROWS + BOTTOM_ROWS).max(1)
    }

    fn col_of(&self, x: i32) -> u16 {
        let x = i64::from(x.clamp(0, self.field_width - 1));
        (x * i64::from(self.inner_cols()) / i64::from(self.field_width)) as u16 + 1
    }

    fn row_of(&self, y: i32) -> u16 {
        let y = i64::from(y.clamp(0, self.field_height - 1));
        (y * i64::from(self.inner_rows()) / i64::from(self.field_height)) as u16 + TOP_ROWS
    }

    /// Map a field point to a cell, or `None` when it lies off the field.
    pub fn point(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.field_width || y >= self.field_height {
            return None;
        }
        Some((self.col_of(x), self.row_of(y)))
    }

    /// Map a field rectangle to the cells it covers, clipped to the field.
    /// Any visible rectangle covers at least one cell.
    pub fn rect(&self, r: &Rect) -> Option<CellRect> {
        if r.right() <= 0 || r.bottom() <= 0 || r.x >= self.field_width || r.y >= self.field_height
        {
            return None;
        }
        let col = self.col_of(r.x);
        let row = self.row_of(r.y);
        let end_col = self.col_of(r.right() - 1).max(col);
        let end_row = self.row_of(r.bottom() - 1).max(row);
        Some(CellRect {
            col,
            row,
            cols: end_col - col + 1,
            rows: end_row - row + 1,
        })
    }
}
