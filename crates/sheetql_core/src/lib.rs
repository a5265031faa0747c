//! Core data types for the sheetql query generator.
//!
//! This crate provides the pure logical core: the in-memory table model,
//! schema extraction, prompt construction, and response post-processing.
//! Everything here is side-effect free; I/O lives in the workbook, models,
//! and tui crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod prompt;
mod response;
mod schema;
mod table;

pub use prompt::{QueryRequest, build_prompt};
pub use response::strip_sql_fences;
pub use schema::{SchemaDescription, SqlType, sql_type_for};
pub use table::{Column, ColumnType, Table, sanitize_table_name};
