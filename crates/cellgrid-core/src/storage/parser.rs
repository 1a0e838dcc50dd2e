//! Parser for .grd file format

use crate::error::{CellgridError, Result};
use cellgrid_engine::engine::{CellRef, GridStore};
use std::fs;
use std::path::Path;

/// Parse a .grd file and return a GridStore
pub fn parse_grd(path: &Path) -> Result<GridStore> {
    let content = fs::read_to_string(path)?;
    parse_grd_content(&content)
}

/// Parse .grd content from a string
pub fn parse_grd_content(content: &str) -> Result<GridStore> {
    let mut grid = GridStore::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse "CELLREF: TEXT" format
        let Some((cell_ref_str, value_str)) = line.split_once(':') else {
            return Err(CellgridError::Parse {
                line: line_num + 1,
                message: "Expected 'CELLREF: TEXT' format".to_string(),
            });
        };

        let cell_ref_str = cell_ref_str.trim();
        let cell_ref = CellRef::parse(cell_ref_str).map_err(|_| CellgridError::Parse {
            line: line_num + 1,
            message: format!("Invalid cell reference: {}", cell_ref_str),
        })?;

        let text = unescape_grd_text(value_str.trim()).map_err(|message| CellgridError::Parse {
            line: line_num + 1,
            message,
        })?;
        if !text.is_empty() {
            grid.set_ref(&cell_ref, text);
        }
    }

    Ok(grid)
}

fn unescape_grd_text(input: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some(other) => return Err(format!("Unknown escape sequence: \\{}", other)),
            None => return Err("Trailing backslash".to_string()),
        }
    }
    Ok(out)
}
