//! Terminal User Interface for the sheetql session.
//!
//! One interactive session: enter a credential, open a spreadsheet,
//! review the preview and inferred schema, ask a question, and read the
//! generated query. Built with ratatui for terminal rendering.

#![forbid(unsafe_code)]

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, Focus, StatusLevel};
pub use events::{Event, EventHandler};
pub use runner::{GeneratorFactory, dispatch_generation, run_tui};
