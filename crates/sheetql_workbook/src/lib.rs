//! Spreadsheet loading for sheetql.
//!
//! Decoding is delegated to the calamine library; this crate turns the
//! first sheet of an `.xlsx` workbook into the in-memory [`Table`] model:
//! header row → unique column names, data cells → one inferred primitive
//! type per column, first rows → display preview.
//!
//! [`Table`]: sheetql_core::Table

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod infer;
mod loader;

pub use infer::infer_column_type;
pub use loader::{PREVIEW_ROWS, load_workbook};
