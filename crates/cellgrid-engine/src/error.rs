//! Formula error types.

use thiserror::Error;

/// Errors raised while tokenizing or evaluating a formula.
///
/// Absent or non-numeric cell content is never an error: it coerces to zero
/// (see [`crate::engine::coerce_number`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Reference text does not have the `<letters><digits>` shape.
    #[error("Malformed reference: {0}")]
    MalformedReference(String),

    /// No tokens could be extracted from the formula body.
    #[error("Formula is empty")]
    EmptyFormula,

    /// A range argument is not exactly `<CELL>:<CELL>`.
    #[error("Malformed range: {0}")]
    MalformedRange(String),
}

pub type FormulaResult<T> = std::result::Result<T, FormulaError>;
