use crate::error::Result;
use cellgrid_engine::engine::{CellRef, GridStore};
use std::path::PathBuf;

/// Default grid height when regenerating the view.
pub const DEFAULT_ROWS: usize = 100;
/// Default grid width when regenerating the view.
pub const DEFAULT_COLS: usize = 100;
pub const DEFAULT_FORMULA_MARKER: char = '=';
pub const DEFAULT_ERROR_TOKEN: &str = "Error";

/// Session settings supplied by the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Number of rows shown by [`Document::regenerate`].
    pub rows: usize,
    /// Number of columns shown by [`Document::regenerate`].
    pub cols: usize,
    /// Leading character that marks input as a formula.
    pub formula_marker: char,
    /// Text shown in place of a formula that failed to evaluate.
    pub error_token: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            formula_marker: DEFAULT_FORMULA_MARKER,
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
        }
    }
}

/// UI-agnostic editor session for the grid.
pub struct Document {
    /// Raw cell text, owned by the session and lent to the evaluator.
    pub grid: GridStore,
    pub options: SessionOptions,
    /// Current file path
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified since the last load/save
    pub modified: bool,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new(options: SessionOptions) -> Self {
        Document {
            grid: GridStore::new(),
            options,
            file_path: None,
            modified: false,
        }
    }

    /// Create a new document and load a file if provided.
    ///
    /// A path that does not exist yet becomes the save target.
    pub fn with_file(path: Option<PathBuf>, options: SessionOptions) -> Result<Self> {
        let mut doc = Self::new(options);

        if let Some(p) = path {
            if p.exists() {
                doc.load_file(&p)?;
            } else {
                doc.file_path = Some(p);
                doc.modified = false;
            }
        }
        Ok(doc)
    }

    pub fn rows(&self) -> usize {
        self.options.rows
    }

    pub fn cols(&self) -> usize {
        self.options.cols
    }

    /// Whether `cell` lies inside the regenerated grid.
    pub fn in_bounds(&self, cell: &CellRef) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
