//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "A1", "B2", "AA100") and zero-indexed column/row coordinates.
//!
//! Column letters form a bijective base-26 numeral: there is no zero digit,
//! `A` is 1 and `Z` is 26, so `AA` follows `Z` directly.
//!
//! # Examples
//!
//! ```
//! use cellgrid_engine::engine::CellRef;
//!
//! let cell = CellRef::parse("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{FormulaError, FormulaResult};

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "B2", "AA10").
    ///
    /// Column letters must be uppercase. Row `0` and column/row values that
    /// overflow `usize` are rejected.
    pub fn parse(label: &str) -> FormulaResult<CellRef> {
        let malformed = || FormulaError::MalformedReference(label.to_string());
        let caps = a1_re().captures(label).ok_or_else(malformed)?;
        let letters = &caps["letters"];
        let numbers = &caps["numbers"];

        let mut col_acc = 0usize;
        for c in letters.bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc
                .checked_mul(26)
                .and_then(|acc| acc.checked_add(digit))
                .ok_or_else(malformed)?;
        }
        // At least one letter matched, so col_acc >= 1.
        let col = col_acc - 1;

        let row = numbers
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(malformed)?;

        Ok(CellRef::new(col, row))
    }

    /// Convert a zero-based column index to letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        label_from(col as u128 + 1)
    }
}

/// Letters for a one-based column number (1 -> A, 26 -> Z, 27 -> AA).
///
/// Returns an empty string for `0`, which has no label.
pub fn column_label(col: usize) -> String {
    label_from(col as u128)
}

fn label_from(mut col: u128) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let remainder = match col % 26 {
            0 => 26,
            r => r,
        };
        letters.push(b'A' + (remainder - 1) as u8);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Z]+)(?<numbers>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

impl std::str::FromStr for CellRef {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row as u128 + 1)
    }
}

/// A rectangular block of cells.
///
/// Corners are normalized on construction: `start` holds the smallest row and
/// column, `end` the largest, whatever order they were written in.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn new(a: CellRef, b: CellRef) -> CellRange {
        CellRange {
            start: CellRef::new(a.col.min(b.col), a.row.min(b.row)),
            end: CellRef::new(a.col.max(b.col), a.row.max(b.row)),
        }
    }

    /// Parse `A1:B3` (either corner order).
    pub fn parse(text: &str) -> FormulaResult<CellRange> {
        let Some((a, b)) = text.split_once(':') else {
            return Err(FormulaError::MalformedRange(text.to_string()));
        };
        Ok(CellRange::new(CellRef::parse(a.trim())?, CellRef::parse(b.trim())?))
    }

    pub fn rows(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    pub fn cols(&self) -> usize {
        self.end.col - self.start.col + 1
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
