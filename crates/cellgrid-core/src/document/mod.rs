//! Document state and logic (UI-agnostic).

mod io;
mod ops;
mod state;
mod view;

pub use ops::CommitOutcome;
pub use state::{
    DEFAULT_COLS, DEFAULT_ERROR_TOKEN, DEFAULT_FORMULA_MARKER, DEFAULT_ROWS, Document,
    SessionOptions,
};
pub use view::GridView;
