//! Sparse grid storage.
//!
//! Cells hold the raw text the user typed (or the formatted result written
//! back by a commit). A row's column map is created on the first write to that
//! row; a missing row or column is simply an empty cell.

use std::collections::BTreeMap;

use super::cell_ref::{CellRange, CellRef};

/// Sparse `row -> col -> text` storage.
///
/// Iteration is in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridStore {
    rows: BTreeMap<usize, BTreeMap<usize, String>>,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text at `(row, col)`, or `None` for an empty cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(&row)?.get(&col).map(String::as_str)
    }

    pub fn get_ref(&self, cell: &CellRef) -> Option<&str> {
        self.get(cell.row, cell.col)
    }

    /// Store text at `(row, col)`, returning the previous text.
    pub fn set(&mut self, row: usize, col: usize, text: impl Into<String>) -> Option<String> {
        self.rows.entry(row).or_default().insert(col, text.into())
    }

    pub fn set_ref(&mut self, cell: &CellRef, text: impl Into<String>) -> Option<String> {
        self.set(cell.row, cell.col, text)
    }

    /// Remove the cell at `(row, col)`. Rows left without cells are dropped.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<String> {
        let cols = self.rows.get_mut(&row)?;
        let old = cols.remove(&col);
        if cols.is_empty() {
            self.rows.remove(&row);
        }
        old
    }

    pub fn remove_ref(&mut self, cell: &CellRef) -> Option<String> {
        self.remove(cell.row, cell.col)
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stored cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &str)> + '_ {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter().map(move |(&col, text)| (CellRef::new(col, row), text.as_str()))
        })
    }

    /// Stored cells inside `range`, in row-major order.
    ///
    /// Only stored cells are visited, so the cost does not depend on the
    /// size of the block.
    pub fn iter_range(&self, range: &CellRange) -> impl Iterator<Item = (CellRef, &str)> + '_ {
        let (first_col, last_col) = (range.start.col, range.end.col);
        self.rows
            .range(range.start.row..=range.end.row)
            .flat_map(move |(&row, cols)| {
                cols.range(first_col..=last_col)
                    .map(move |(&col, text)| (CellRef::new(col, row), text.as_str()))
            })
    }
}

impl<S: Into<String>> FromIterator<(CellRef, S)> for GridStore {
    fn from_iter<I: IntoIterator<Item = (CellRef, S)>>(iter: I) -> Self {
        let mut store = GridStore::new();
        for (cell, text) in iter {
            store.set_ref(&cell, text);
        }
        store
    }
}
