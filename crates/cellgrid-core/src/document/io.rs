use super::Document;
use crate::error::{CellgridError, Result};
use crate::storage::{parse_grd, write_grd};
use std::path::{Path, PathBuf};
use tracing::info;

impl Document {
    /// Save to current file path.
    /// Returns the path saved to.
    pub fn save_file(&mut self) -> Result<PathBuf> {
        let Some(path) = &self.file_path else {
            return Err(CellgridError::NoFilePath);
        };

        write_grd(path, &self.grid)?;
        info!(path = %path.display(), cells = self.grid.len(), "saved grid");
        self.modified = false;
        Ok(path.clone())
    }

    /// Save to `path` and make it the current file path.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        write_grd(path, &self.grid)?;
        info!(path = %path.display(), cells = self.grid.len(), "saved grid");
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(path.to_path_buf())
    }

    /// Load from file, replacing the whole grid.
    ///
    /// The file is parsed completely before anything is replaced, so a parse
    /// error leaves the document untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let grid = parse_grd(path)?;
        info!(path = %path.display(), cells = grid.len(), "loaded grid");

        self.grid = grid;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}
