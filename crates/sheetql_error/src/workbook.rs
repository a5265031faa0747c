//! Spreadsheet loading error types.

/// Workbook error kind variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum WorkbookErrorKind {
    /// Failed to open the workbook file
    #[display("Failed to open workbook: {}", _0)]
    Open(String),
    /// The workbook contains no sheets
    #[display("Workbook contains no sheets")]
    NoSheets,
    /// Failed to read a sheet range
    #[display("Failed to read sheet '{}': {}", sheet, message)]
    Read {
        /// Sheet name
        sheet: String,
        /// Underlying error message
        message: String,
    },
    /// The sheet has no header row to derive column names from
    #[display("Sheet '{}' has no header row", _0)]
    MissingHeader(String),
}

/// Workbook error with source location tracking.
///
/// # Examples
///
/// ```
/// use sheetql_error::{WorkbookError, WorkbookErrorKind};
///
/// let err = WorkbookError::new(WorkbookErrorKind::NoSheets);
/// assert!(format!("{}", err).contains("no sheets"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Workbook Error: {} at line {} in {}", kind, line, file)]
pub struct WorkbookError {
    /// The kind of error that occurred
    pub kind: WorkbookErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WorkbookError {
    /// Create a new WorkbookError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkbookErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
