//! Writer for .grd file format

use crate::error::Result;
use cellgrid_engine::engine::GridStore;
use std::fs;
use std::path::Path;

/// Write a GridStore to a .grd file
pub fn write_grd(path: &Path, grid: &GridStore) -> Result<()> {
    let content = write_grd_content(grid);
    fs::write(path, content)?;
    Ok(())
}

/// Write a GridStore to a .grd format string (cells in row-major order)
pub fn write_grd_content(grid: &GridStore) -> String {
    let mut lines = vec!["# Cellgrid Spreadsheet".to_string()];

    for (cell_ref, text) in grid.iter() {
        lines.push(format!("{}: {}", cell_ref, escape_grd_text(text)));
    }

    lines.join("\n") + "\n"
}

fn escape_grd_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
