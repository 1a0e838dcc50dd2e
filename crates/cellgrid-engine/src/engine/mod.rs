//! Formula engine API.
//!
//! - [`GridStore`] - Sparse per-cell text storage
//! - [`CellRef`], [`CellRange`], [`column_label`] - A1 notation ↔ row/col indices
//! - [`tokenize`], [`Token`] - Formula text to tokens
//! - [`aggregate`], [`Aggregate`] - sum/average/max/min over a range
//! - [`evaluate`] - Left-to-right formula evaluation
//! - [`coerce_number`], [`format_number`] - Cell text ↔ numbers

mod aggregate;
mod cell_ref;
mod eval;
mod format;
mod grid;
mod lexer;

pub use aggregate::{Aggregate, aggregate};
pub use cell_ref::{CellRange, CellRef, column_label};
pub use eval::{combine, evaluate, evaluate_tokens};
pub use format::{coerce_number, format_number};
pub use grid::GridStore;
pub use lexer::{Operator, Token, tokenize};
