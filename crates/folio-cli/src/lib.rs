//! # folio-cli
//!
//! Console output for headless page runs, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{ConsolePresenter, Verbosity};
