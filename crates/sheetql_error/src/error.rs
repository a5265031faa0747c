//! Top-level error wrapper types.

use crate::{GeminiError, TuiError, WorkbookError};

/// The foundation error enum for sheetql operations.
///
/// # Examples
///
/// ```
/// use sheetql_error::{SheetqlError, WorkbookError, WorkbookErrorKind};
///
/// let workbook_err = WorkbookError::new(WorkbookErrorKind::NoSheets);
/// let err: SheetqlError = workbook_err.into();
/// assert!(format!("{}", err).contains("Workbook Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SheetqlErrorKind {
    /// Workbook loading error
    #[from(WorkbookError)]
    Workbook(WorkbookError),
    /// Gemini generation error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// TUI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// Sheetql error with kind discrimination.
///
/// # Examples
///
/// ```
/// use sheetql_error::{SheetqlResult, GeminiError, GeminiErrorKind};
///
/// fn might_fail() -> SheetqlResult<()> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sheetql Error: {}", _0)]
pub struct SheetqlError(Box<SheetqlErrorKind>);

impl SheetqlError {
    /// Create a new error from a kind.
    pub fn new(kind: SheetqlErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SheetqlErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SheetqlErrorKind
impl<T> From<T> for SheetqlError
where
    T: Into<SheetqlErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for sheetql operations.
///
/// # Examples
///
/// ```
/// use sheetql_error::{SheetqlResult, GeminiError, GeminiErrorKind};
///
/// fn load_key() -> SheetqlResult<String> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
/// ```
pub type SheetqlResult<T> = std::result::Result<T, SheetqlError>;
