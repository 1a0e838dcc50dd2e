//! Grid snapshots for front ends.
//!
//! A [`GridView`] is what a renderer needs to draw a block of the grid:
//! column labels, row numbers and the stored text of every visible cell.

use super::Document;
use cellgrid_engine::engine::{CellRange, CellRef, column_label};

/// A rectangular snapshot of the grid with its headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    /// Top-left cell of the snapshot.
    pub origin: CellRef,
    /// Column labels (`A`, `B`, ...), one per visible column.
    pub column_headers: Vec<String>,
    /// One-based row numbers, one per visible row.
    pub row_headers: Vec<String>,
    /// `cells[r][c]` is the text at `origin + (c, r)`; empty cells are `""`.
    pub cells: Vec<Vec<String>>,
}

impl GridView {
    fn empty() -> GridView {
        GridView {
            origin: CellRef::new(0, 0),
            column_headers: Vec::new(),
            row_headers: Vec::new(),
            cells: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.column_headers.len()
    }

    pub fn height(&self) -> usize {
        self.row_headers.len()
    }

    /// Text shown at an absolute cell position, if it is inside the snapshot.
    pub fn get(&self, cell: &CellRef) -> Option<&str> {
        let r = cell.row.checked_sub(self.origin.row)?;
        let c = cell.col.checked_sub(self.origin.col)?;
        self.cells.get(r)?.get(c).map(String::as_str)
    }
}

impl Document {
    /// Rebuild the full grid view (`rows` x `cols`), placing every stored
    /// value inside the grid at its position.
    pub fn regenerate(&self) -> GridView {
        if self.rows() == 0 || self.cols() == 0 {
            return GridView::empty();
        }
        let full = CellRange::new(
            CellRef::new(0, 0),
            CellRef::new(self.cols() - 1, self.rows() - 1),
        );
        self.view(&full)
    }

    /// Snapshot of `range`, clipped to the grid dimensions.
    pub fn view(&self, range: &CellRange) -> GridView {
        if !self.in_bounds(&range.start) {
            return GridView::empty();
        }
        let end = CellRef::new(
            range.end.col.min(self.cols() - 1),
            range.end.row.min(self.rows() - 1),
        );

        let column_headers = (range.start.col..=end.col)
            .map(|col| column_label(col + 1))
            .collect();
        let row_headers = (range.start.row..=end.row)
            .map(|row| (row + 1).to_string())
            .collect();
        let cells = (range.start.row..=end.row)
            .map(|row| {
                (range.start.col..=end.col)
                    .map(|col| self.grid.get(row, col).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        GridView {
            origin: range.start,
            column_headers,
            row_headers,
            cells,
        }
    }

    /// Smallest range covering every stored cell inside the grid.
    pub fn occupied_range(&self) -> Option<CellRange> {
        let mut cells = self
            .grid
            .iter()
            .map(|(cell, _)| cell)
            .filter(|cell| self.in_bounds(cell));
        let first = cells.next()?;
        let (min_col, max_col, max_row) = cells.fold(
            (first.col, first.col, first.row),
            |(min_col, max_col, max_row), cell| {
                (min_col.min(cell.col), max_col.max(cell.col), max_row.max(cell.row))
            },
        );
        // Row-major iteration: the first cell has the smallest row.
        Some(CellRange::new(
            CellRef::new(min_col, first.row),
            CellRef::new(max_col, max_row),
        ))
    }
}
