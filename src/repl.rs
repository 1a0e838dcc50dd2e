//! Line-oriented editor.
//!
//! Each input line either edits a cell (`B2 =sum A1:A3`) or runs a `:` command.

use crate::render::render_table;
use cellgrid_core::{CellRange, CellRef, CommitOutcome, Document};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "cellgrid> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type `input` into a cell and press Enter.
    Set { cell: CellRef, input: String },
    Get(CellRef),
    Clear(CellRef),
    Show(Option<CellRange>),
    Write(Option<PathBuf>),
    Edit { path: PathBuf, force: bool },
    Refresh,
    Help,
    Quit { force: bool },
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(':') {
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        return match (name, arg) {
            ("q" | "quit", "") => Ok(Command::Quit { force: false }),
            ("q!" | "quit!", "") => Ok(Command::Quit { force: true }),
            ("w" | "write", "") => Ok(Command::Write(None)),
            ("w" | "write", path) => Ok(Command::Write(Some(PathBuf::from(path)))),
            ("e" | "edit", "") | ("e!" | "edit!", "") => Err("Usage: :e <file>".to_string()),
            ("e" | "edit", path) => Ok(Command::Edit {
                path: PathBuf::from(path),
                force: false,
            }),
            ("e!" | "edit!", path) => Ok(Command::Edit {
                path: PathBuf::from(path),
                force: true,
            }),
            ("show", "") => Ok(Command::Show(None)),
            ("show", range) => CellRange::parse(range)
                .map(|r| Command::Show(Some(r)))
                .map_err(|e| e.to_string()),
            ("get", cell) => parse_cell(cell).map(Command::Get),
            ("clear", cell) => parse_cell(cell).map(Command::Clear),
            ("refresh", "") => Ok(Command::Refresh),
            ("help" | "h", _) => Ok(Command::Help),
            _ => Err(format!("Unknown command: :{}", rest)),
        };
    }

    let (label, input) = match line.split_once(char::is_whitespace) {
        Some((label, input)) => (label, input.trim()),
        None => (line, ""),
    };
    let cell = parse_cell(label)?;
    if input.is_empty() {
        Ok(Command::Get(cell))
    } else {
        Ok(Command::Set {
            cell,
            input: input.to_string(),
        })
    }
}

fn parse_cell(label: &str) -> Result<CellRef, String> {
    CellRef::parse(label.trim()).map_err(|e| e.to_string())
}

/// Run the editor until `:q` or end of input.
pub fn run<R: BufRead, W: Write>(
    doc: &mut Document,
    column_width: usize,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse_command(&line) {
                Ok(command) => {
                    debug!(?command, "repl command");
                    if execute(doc, column_width, command, out)? {
                        return Ok(());
                    }
                }
                Err(message) => writeln!(out, "Error: {message}")?,
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Execute one command. Returns true when the editor should exit.
fn execute<W: Write>(
    doc: &mut Document,
    column_width: usize,
    command: Command,
    out: &mut W,
) -> anyhow::Result<bool> {
    match command {
        Command::Set { cell, input } => {
            if !doc.in_bounds(&cell) {
                writeln!(
                    out,
                    "Error: {} is outside the {}x{} grid",
                    cell,
                    doc.rows(),
                    doc.cols()
                )?;
                return Ok(false);
            }
            match doc.commit_input(cell, &input) {
                CommitOutcome::Evaluated { display, .. } => writeln!(out, "{cell} = {display}")?,
                CommitOutcome::Failed { error, display } => {
                    writeln!(out, "{cell}: {display} ({error})")?
                }
                CommitOutcome::MissingMarker => writeln!(
                    out,
                    "{cell}: stored (please put {} before formula)",
                    doc.options.formula_marker
                )?,
            }
        }
        Command::Get(cell) => match doc.cell_text(&cell) {
            Some(text) => writeln!(out, "{cell}: {text}")?,
            None => writeln!(out, "{cell}: (empty)")?,
        },
        Command::Clear(cell) => {
            if doc.clear_cell(&cell) {
                writeln!(out, "{cell} cleared")?;
            }
        }
        Command::Show(range) => match range.or_else(|| doc.occupied_range()) {
            Some(range) => write!(out, "{}", render_table(&doc.view(&range), column_width))?,
            None => writeln!(out, "(empty grid)")?,
        },
        Command::Refresh => {
            write!(out, "{}", render_table(&doc.regenerate(), column_width))?;
        }
        Command::Write(path) => {
            let saved = match path {
                Some(path) => doc.save_as(&path),
                None => doc.save_file(),
            };
            match saved {
                Ok(path) => writeln!(out, "Saved to {}", path.display())?,
                Err(e) => writeln!(out, "Error: {e}")?,
            }
        }
        Command::Edit { path, force } => {
            if doc.modified && !force {
                writeln!(out, "Error: unsaved changes (use :e! to discard them)")?;
                return Ok(false);
            }
            match doc.load_file(&path) {
                Ok(()) => {
                    writeln!(out, "Loaded {} ({} cells)", path.display(), doc.grid.len())?
                }
                Err(e) => writeln!(out, "Error: {e}")?,
            }
        }
        Command::Help => write!(out, "{HELP}")?,
        Command::Quit { force } => {
            if doc.modified && !force {
                writeln!(out, "Error: unsaved changes (use :w to save or :q! to quit)")?;
                return Ok(false);
            }
            return Ok(true);
        }
    }
    Ok(false)
}

const HELP: &str = "\
Cells:
  A1 <text>        store text in A1
  A1 =<formula>    store and evaluate a formula, e.g. B3 =sum A1:A5 or C1 =A1*2
  A1               show the stored text of A1
Commands:
  :get A1          show the stored text of A1
  :clear A1        clear A1
  :show [A1:D10]   print a block of the grid (default: every stored cell)
  :refresh         print the whole grid
  :w [file]        save
  :e[!] file       open a file
  :q[!]            quit
Formulas run left to right with no precedence: =10-2*3 is 24.
";
