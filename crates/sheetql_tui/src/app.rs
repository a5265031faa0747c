//! Application state and core TUI types.

use sheetql_core::Table;

/// Which input field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    /// Masked credential input
    ApiKey,
    /// Path of the spreadsheet to load
    FilePath,
    /// SQL table name used in the generated query
    TableName,
    /// The natural-language question
    Question,
}

impl Focus {
    /// Next field in tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::ApiKey => Focus::FilePath,
            Focus::FilePath => Focus::TableName,
            Focus::TableName => Focus::Question,
            Focus::Question => Focus::ApiKey,
        }
    }

    /// Previous field in tab order.
    pub fn previous(self) -> Self {
        match self {
            Focus::ApiKey => Focus::Question,
            Focus::FilePath => Focus::ApiKey,
            Focus::TableName => Focus::FilePath,
            Focus::Question => Focus::TableName,
        }
    }
}

/// Severity of the status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusLevel {
    /// Neutral information
    Info,
    /// A completed action
    Success,
    /// Precondition not met, nothing was attempted
    Warning,
    /// An attempted action failed
    Error,
}

/// Per-session state.
///
/// Created on session start and dropped at session end; the loaded
/// table, credential, and last result live nowhere else. Loading a new
/// file replaces the table wholesale and clears the previous result.
pub struct App {
    /// Field with input focus
    pub focus: Focus,
    /// Credential text (rendered masked)
    pub api_key: String,
    /// Whether a generator was successfully built for the current credential
    pub generator_ready: bool,
    /// Spreadsheet path input
    pub file_path: String,
    /// Currently loaded table, if any
    pub table: Option<Table>,
    /// User-editable SQL table name
    pub table_name: String,
    /// The user's question
    pub question: String,
    /// Last generated query, post-processed
    pub result: Option<String>,
    /// True while a generation call is outstanding
    pub busy: bool,
    /// Status line message
    pub status: String,
    /// Status line severity
    pub status_level: StatusLevel,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new session with empty state.
    pub fn new() -> Self {
        Self {
            focus: Focus::ApiKey,
            api_key: String::new(),
            generator_ready: false,
            file_path: String::new(),
            table: None,
            table_name: String::new(),
            question: String::new(),
            result: None,
            busy: false,
            status: String::from("Enter your Gemini API key, then press Enter to validate"),
            status_level: StatusLevel::Info,
            should_quit: false,
        }
    }

    /// Set the status line.
    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = message.into();
        self.status_level = level;
    }

    /// Replace the loaded table and reset everything derived from the
    /// previous one.
    pub fn set_table(&mut self, table: Table, default_name: String) {
        self.table = Some(table);
        self.table_name = default_name;
        self.result = None;
    }

    /// Drop the loaded table so no stale data survives a failed load.
    pub fn clear_table(&mut self) {
        self.table = None;
        self.table_name.clear();
        self.result = None;
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Append a character to the focused input.
    pub fn input_char(&mut self, c: char) {
        self.focused_input_mut().push(c);
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&mut self) {
        self.focused_input_mut().pop();
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::ApiKey => &mut self.api_key,
            Focus::FilePath => &mut self.file_path,
            Focus::TableName => &mut self.table_name,
            Focus::Question => &mut self.question,
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
