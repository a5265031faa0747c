//! In-memory table model for a loaded spreadsheet sheet.

use serde::{Deserialize, Serialize};

/// Primitive type inferred for a whole column.
///
/// The closed set matches what the spreadsheet decoder can report for a
/// column of cells. `Unknown` covers anything outside the closed set
/// (error cells, durations); schema extraction maps it to TEXT.
///
/// # Examples
///
/// ```
/// use sheetql_core::ColumnType;
///
/// assert_eq!(format!("{}", ColumnType::Real), "real");
/// assert_ne!(ColumnType::Integer, ColumnType::Boolean);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Whole numbers
    #[display("integer")]
    Integer,
    /// Floating-point numbers
    #[display("real")]
    Real,
    /// Text strings
    #[display("text")]
    Text,
    /// Dates and timestamps
    #[display("datetime")]
    DateTime,
    /// True/false values
    #[display("boolean")]
    Boolean,
    /// Anything outside the closed set
    #[display("unknown")]
    Unknown,
}

/// A named column with its inferred primitive type.
///
/// Column names are unique within a [`Table`]; the workbook loader
/// disambiguates duplicates at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header row
    pub name: String,
    /// Inferred primitive type for the whole column
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// The in-memory representation of one loaded sheet.
///
/// Exists only for the duration of a session; replaced wholesale when a
/// new file is loaded.
///
/// # Examples
///
/// ```
/// use sheetql_core::{Column, ColumnType, Table};
///
/// let table = Table::new(
///     vec![
///         Column::new("region", ColumnType::Text),
///         Column::new("sales", ColumnType::Real),
///     ],
///     vec![vec!["West".to_string(), "1200.5".to_string()]],
///     10,
/// );
/// assert_eq!(table.columns.len(), 2);
/// assert_eq!(table.row_count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Table {
    /// Ordered columns with inferred types
    pub columns: Vec<Column>,
    /// First data rows, rendered as display strings
    pub preview: Vec<Vec<String>>,
    /// Total number of data rows in the sheet
    pub row_count: usize,
}

impl Table {
    /// Create a new table.
    pub fn new(columns: Vec<Column>, preview: Vec<Vec<String>>, row_count: usize) -> Self {
        Self {
            columns,
            preview,
            row_count,
        }
    }

    /// True when the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Derive a default SQL table name from an uploaded file name.
///
/// Takes the file stem (text before the first dot), replaces spaces with
/// underscores, and lowercases. Falls back to `data_table` when nothing
/// usable remains.
///
/// # Examples
///
/// ```
/// use sheetql_core::sanitize_table_name;
///
/// assert_eq!(sanitize_table_name("Q3 Sales Report.xlsx"), "q3_sales_report");
/// assert_eq!(sanitize_table_name(""), "data_table");
/// ```
pub fn sanitize_table_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or("");
    let name = stem.trim().replace(' ', "_").to_lowercase();
    if name.is_empty() {
        "data_table".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_extension_and_lowercases() {
        assert_eq!(sanitize_table_name("Sales Data.xlsx"), "sales_data");
        assert_eq!(sanitize_table_name("inventory.xlsx"), "inventory");
    }

    #[test]
    fn sanitize_uses_text_before_first_dot() {
        assert_eq!(sanitize_table_name("report.2024.xlsx"), "report");
    }

    #[test]
    fn sanitize_falls_back_on_empty_stem() {
        assert_eq!(sanitize_table_name(""), "data_table");
        assert_eq!(sanitize_table_name(".xlsx"), "data_table");
    }

    #[test]
    fn empty_table_reports_empty() {
        assert!(Table::default().is_empty());
        let table = Table::new(vec![Column::new("a", ColumnType::Text)], vec![], 0);
        assert!(!table.is_empty());
    }
}
