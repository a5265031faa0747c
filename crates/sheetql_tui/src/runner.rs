//! TUI runner - main loop, input handling, and generation dispatch.

use crate::{App, Event, EventHandler, Focus, StatusLevel};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sheetql_core::{
    QueryRequest, SchemaDescription, build_prompt, sanitize_table_name, strip_sql_fences,
};
use sheetql_error::{SheetqlResult, TuiError, TuiErrorKind, TuiResult};
use sheetql_interface::QueryGenerator;
use sheetql_workbook::load_workbook;
use std::io;
use std::path::Path;
use tokio::runtime::Handle;

/// Builds a validated generator from a credential string.
///
/// Called once per credential value; failure is a hard stop for
/// generation until a different credential is submitted.
pub type GeneratorFactory = dyn Fn(&str) -> SheetqlResult<Box<dyn QueryGenerator>> + Send + Sync;

/// Run the interactive session.
///
/// The whole flow is synchronous from the session's point of view: one
/// user action at a time, at most one generation call in flight, no input
/// accepted while it is outstanding.
///
/// # Arguments
///
/// * `factory` - Builds a generator from a submitted credential
/// * `handle` - Runtime handle for the blocking generation call
/// * `initial_key` - Environment-sourced credential fallback, used once
pub fn run_tui(
    factory: &GeneratorFactory,
    handle: Handle,
    initial_key: Option<String>,
) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {e}"
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {e}"
        )))
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {e}"
        )))
    })?;

    // Create session state
    let mut app = App::new();
    let mut generator: Option<Box<dyn QueryGenerator>> = None;

    // Credential gate: seed from the environment on first load only.
    if let Some(key) = initial_key {
        app.api_key = key;
        generator = apply_credential(&mut app, factory);
        if generator.is_some() {
            app.set_status(StatusLevel::Info, "API key loaded from environment variable");
        }
    }

    let events = EventHandler::new(250);

    // Main loop
    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {e}"))))?;

        if let Ok(Some(event)) = events.next() {
            handle_event(&mut app, &mut generator, factory, &handle, &mut terminal, event)?;
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {e}"
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {e}"
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {e}"
        )))
    })?;

    Ok(())
}

/// Handle a single event.
fn handle_event(
    app: &mut App,
    generator: &mut Option<Box<dyn QueryGenerator>>,
    factory: &GeneratorFactory,
    handle: &Handle,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    event: Event,
) -> TuiResult<()> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let Event::Key(key) = event else {
        return Ok(());
    };

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => match app.focus {
            Focus::ApiKey => {
                *generator = apply_credential(app, factory);
            }
            Focus::FilePath => load_file(app),
            Focus::TableName => app.focus_next(),
            Focus::Question => {
                // Busy indicator: draw once before the blocking call; the
                // session accepts no further input until it returns.
                app.busy = true;
                terminal.draw(|f| crate::ui::draw(f, app)).map_err(|e| {
                    TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {e}")))
                })?;
                dispatch_generation(app, generator.as_deref(), handle);
                app.busy = false;
            }
        },
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }

    Ok(())
}

/// Validate the current credential by constructing a generator for it.
///
/// Returns the generator on success. On failure, generation stays blocked
/// and the user is told to supply a different credential.
fn apply_credential(app: &mut App, factory: &GeneratorFactory) -> Option<Box<dyn QueryGenerator>> {
    let key = app.api_key.trim().to_string();
    if key.is_empty() {
        app.generator_ready = false;
        app.set_status(
            StatusLevel::Warning,
            "Please enter your Gemini API key to use the generator",
        );
        return None;
    }
    match factory(&key) {
        Ok(generator) => {
            app.generator_ready = true;
            app.set_status(
                StatusLevel::Success,
                format!("Gemini model ready ({})", generator.model_name()),
            );
            Some(generator)
        }
        Err(e) => {
            app.generator_ready = false;
            tracing::error!(error = %e, "credential validation failed");
            app.set_status(
                StatusLevel::Error,
                format!("Failed to initialize Gemini model: {e}. Check your API key."),
            );
            None
        }
    }
}

/// Load the spreadsheet at the current file path input.
fn load_file(app: &mut App) {
    let path_input = app.file_path.trim().to_string();
    if path_input.is_empty() {
        app.set_status(StatusLevel::Warning, "Enter a path to an .xlsx file");
        return;
    }
    let path = Path::new(&path_input);
    match load_workbook(path) {
        Ok(table) => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let columns = table.columns.len();
            let rows = table.row_count;
            app.set_table(table, sanitize_table_name(&file_name));
            app.set_status(
                StatusLevel::Success,
                format!("Loaded '{file_name}': {columns} columns, {rows} rows"),
            );
        }
        Err(e) => {
            // Reset table state so no stale data is used.
            app.clear_table();
            tracing::error!(error = %e, "workbook load failed");
            app.set_status(
                StatusLevel::Error,
                format!("Error reading file: {e}. Ensure it is a valid .xlsx file."),
            );
        }
    }
}

/// Run one generation request against the current session state.
///
/// Checks the preconditions in order (validated credential, loaded table,
/// non-empty question); when one fails, no call is made and a warning is
/// surfaced. A failed call produces a single error message and no partial
/// result.
pub fn dispatch_generation(app: &mut App, generator: Option<&dyn QueryGenerator>, handle: &Handle) {
    let Some(generator) = generator else {
        app.set_status(
            StatusLevel::Warning,
            "Please enter your Gemini API key to use the generator",
        );
        return;
    };
    let Some(schema) = app.table.as_ref().map(SchemaDescription::from_table) else {
        app.set_status(StatusLevel::Warning, "Load a spreadsheet before generating");
        return;
    };
    if app.question.trim().is_empty() {
        app.set_status(
            StatusLevel::Warning,
            "Please enter a question to generate a SQL query",
        );
        return;
    }

    let table_name = if app.table_name.trim().is_empty() {
        "data_table".to_string()
    } else {
        app.table_name.trim().to_string()
    };
    let request = QueryRequest::new(table_name, schema, app.question.trim());
    let prompt = build_prompt(&request);

    match handle.block_on(generator.generate_query(&prompt)) {
        Ok(raw) => {
            app.result = Some(strip_sql_fences(&raw));
            app.set_status(StatusLevel::Success, "SQL query generated");
        }
        Err(e) => {
            tracing::error!(error = %e, "generation request failed");
            app.set_status(
                StatusLevel::Error,
                format!("Error generating SQL query: {e}. Try rephrasing or check your API key."),
            );
        }
    }
}
