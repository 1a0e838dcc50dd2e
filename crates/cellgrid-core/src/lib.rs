//! cellgrid-core - UI-agnostic editor session + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{CommitOutcome, Document, GridView, SessionOptions};
pub use error::{CellgridError, Result};

pub use cellgrid_engine::engine::{CellRange, CellRef, GridStore};
