use super::Document;
use crate::error::Result;
use cellgrid_engine::engine::{CellRef, evaluate, format_number};
use cellgrid_engine::error::FormulaError;
use tracing::{debug, warn};

/// Result of pressing Enter on a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CommitOutcome {
    /// The formula evaluated; `display` was written back into the cell.
    Evaluated { value: f64, display: String },
    /// The formula failed; the cell shows `display` (the error token) while
    /// its stored text is left as typed.
    Failed { error: FormulaError, display: String },
    /// The input does not start with the formula marker; nothing was evaluated.
    MissingMarker,
}

impl CommitOutcome {
    /// Text the cell should show after the commit, if it changed.
    pub fn display(&self) -> Option<&str> {
        match self {
            CommitOutcome::Evaluated { display, .. } | CommitOutcome::Failed { display, .. } => {
                Some(display)
            }
            CommitOutcome::MissingMarker => None,
        }
    }
}

impl Document {
    /// Store the text of an edited cell (trimmed). Empty input clears the cell.
    pub fn update_cell(&mut self, cell: CellRef, input: &str) {
        let value = input.trim();
        let changed = if value.is_empty() {
            self.grid.remove_ref(&cell).is_some()
        } else {
            self.grid.set_ref(&cell, value).as_deref() != Some(value)
        };
        if changed {
            debug!(%cell, value, "cell updated");
            self.modified = true;
        }
    }

    /// The formula body of `input`, if it starts with the formula marker.
    pub fn strip_marker<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.trim().strip_prefix(self.options.formula_marker)
    }

    /// Enter-key handling: store `input`, then evaluate it if it is a formula.
    ///
    /// On success the formatted result replaces the stored formula text.
    /// On failure nothing beyond the typed text is stored.
    pub fn commit_input(&mut self, cell: CellRef, input: &str) -> CommitOutcome {
        self.update_cell(cell, input);

        let Some(formula) = self.strip_marker(input) else {
            return CommitOutcome::MissingMarker;
        };

        match evaluate(&self.grid, formula) {
            Ok(value) => {
                let display = format_number(value);
                self.grid.set_ref(&cell, display.clone());
                self.modified = true;
                CommitOutcome::Evaluated { value, display }
            }
            Err(error) => {
                warn!(%cell, formula, %error, "formula evaluation failed");
                CommitOutcome::Failed {
                    error,
                    display: self.options.error_token.clone(),
                }
            }
        }
    }

    /// Evaluate a formula body (no marker) against the current grid.
    pub fn evaluate_formula(&self, formula: &str) -> Result<f64> {
        Ok(evaluate(&self.grid, formula)?)
    }

    /// Stored text of a cell.
    pub fn cell_text(&self, cell: &CellRef) -> Option<&str> {
        self.grid.get_ref(cell)
    }

    /// Clear the specified cell. Returns whether anything was removed.
    pub fn clear_cell(&mut self, cell: &CellRef) -> bool {
        let removed = self.grid.remove_ref(cell).is_some();
        if removed {
            debug!(%cell, "cell cleared");
            self.modified = true;
        }
        removed
    }
}
