//! Error types for cellgrid core.

use cellgrid_engine::FormulaError;
use thiserror::Error;

/// Errors that can occur in the cellgrid editor session
#[derive(Error, Debug)]
pub enum CellgridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No file path set")]
    NoFilePath,

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

pub type Result<T> = std::result::Result<T, CellgridError>;
