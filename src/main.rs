//! Cellgrid - a small spreadsheet editor with left-to-right formulas

mod config;
mod render;
mod repl;

use anyhow::Context;
use cellgrid_core::Document;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellgrid", version, about = "A small spreadsheet editor")]
struct Cli {
    /// Spreadsheet file to open (.grd)
    file: Option<PathBuf>,

    /// Evaluate a formula against FILE, print the result and exit
    #[arg(short = 'c', long = "command", value_name = "FORMULA", allow_hyphen_values = true)]
    command: Option<String>,

    /// Print every stored cell as a table and exit
    #[arg(long, conflicts_with = "command")]
    print: bool,

    /// Settings file (default: <config dir>/cellgrid/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Debug logging on stderr (RUST_LOG also works)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cellgrid=debug,cellgrid_core=debug,cellgrid_engine=debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (mut settings, warnings) = config::load_settings(cli.config.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    if let Some(rows) = cli.rows {
        settings.rows = rows;
    }
    if let Some(cols) = cli.cols {
        settings.cols = cols;
    }
    debug!(?settings, "settings loaded");

    let mut doc = Document::with_file(cli.file.clone(), settings.session_options())
        .with_context(|| match &cli.file {
            Some(path) => format!("failed to open {}", path.display()),
            None => "failed to create document".to_string(),
        })?;

    if let Some(formula) = cli.command {
        // A leading marker is optional on the command line.
        let body = doc.strip_marker(&formula).unwrap_or(formula.as_str());
        let value = doc.evaluate_formula(body)?;
        println!("{}", cellgrid_engine::engine::format_number(value));
        return Ok(());
    }

    if cli.print {
        if let Some(range) = doc.occupied_range() {
            print!("{}", render::render_table(&doc.view(&range), settings.column_width));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("cellgrid: type :help for commands");
    }
    let mut stdout = io::stdout();
    repl::run(&mut doc, settings.column_width, stdin.lock(), &mut stdout)
}
