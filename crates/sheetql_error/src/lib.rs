//! Error types for the sheetql workspace.
//!
//! This crate provides the foundation error types used throughout sheetql.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use sheetql_error::{SheetqlResult, GeminiError, GeminiErrorKind};
//!
//! fn load_credential() -> SheetqlResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
//! }
//!
//! match load_credential() {
//!     Ok(key) => println!("Got credential ({} chars)", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod gemini;
mod tui;
mod workbook;

pub use error::{SheetqlError, SheetqlErrorKind, SheetqlResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use workbook::{WorkbookError, WorkbookErrorKind};
