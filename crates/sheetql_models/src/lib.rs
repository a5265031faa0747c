//! Generation service backends for sheetql.
//!
//! Currently a single backend: Google Gemini via the `gemini-rust` SDK.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{DEFAULT_MODEL, GeminiClient};
