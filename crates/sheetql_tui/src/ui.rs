//! UI rendering for TUI.

use crate::app::{App, Focus, StatusLevel};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // API key
            Constraint::Length(3), // File path
            Constraint::Length(3), // Table name
            Constraint::Min(7),    // Preview + schema
            Constraint::Length(3), // Question
            Constraint::Length(6), // Generated SQL
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);

    let masked = "\u{2022}".repeat(app.api_key.chars().count());
    let key_title = if app.generator_ready {
        "Gemini API Key (validated)"
    } else {
        "Gemini API Key (Enter to validate)"
    };
    draw_input(f, chunks[1], key_title, &masked, app.focus == Focus::ApiKey);
    draw_input(
        f,
        chunks[2],
        "Spreadsheet path (.xlsx)",
        &app.file_path,
        app.focus == Focus::FilePath,
    );
    draw_input(
        f,
        chunks[3],
        "SQL table name",
        &app.table_name,
        app.focus == Focus::TableName,
    );

    draw_data_area(f, app, chunks[4]);

    draw_input(f, chunks[5], "Question", &app.question, app.focus == Focus::Question);
    draw_result(f, app, chunks[6]);
    draw_status_bar(f, app, chunks[7]);
}

/// Draw the header.
fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("sheetql - Spreadsheet to SQL Query Generator")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw a single-line input field.
fn draw_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let input = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

/// Draw the data preview and inferred schema side by side.
fn draw_data_area(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    match &app.table {
        Some(table) => {
            draw_preview(f, halves[0], table);
            draw_schema(f, halves[1], table);
        }
        None => {
            let placeholder = Paragraph::new("No spreadsheet loaded")
                .block(Block::default().borders(Borders::ALL).title("Data"))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(placeholder, area);
        }
    }
}

/// Draw the first-rows preview of the loaded table.
fn draw_preview(f: &mut Frame, area: Rect, table: &sheetql_core::Table) {
    let header = Row::new(
        table
            .columns
            .iter()
            .map(|col| col.name.clone())
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = table
        .preview
        .iter()
        .map(|row| Row::new(row.clone()))
        .collect();

    let width_count = table.columns.len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, width_count); table.columns.len().max(1)];

    let preview = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Preview ({} rows total)", table.row_count)),
    );
    f.render_widget(preview, area);
}

/// Draw the (column name, inferred type) table.
fn draw_schema(f: &mut Frame, area: Rect, table: &sheetql_core::Table) {
    let header = Row::new(vec!["Column", "Inferred Type"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = table
        .columns
        .iter()
        .map(|col| Row::new(vec![col.name.clone(), col.column_type.to_string()]))
        .collect();

    let schema = Table::new(
        rows,
        [Constraint::Percentage(60), Constraint::Percentage(40)],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Schema"));
    f.render_widget(schema, area);
}

/// Draw the generated query as a code-styled block.
fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.busy {
        (
            "Generating SQL query...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else {
        match &app.result {
            Some(sql) => (sql.clone(), Style::default().fg(Color::Green)),
            None => (String::new(), Style::default()),
        }
    };

    let result = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Generated SQL"));
    f.render_widget(result, area);
}

/// Draw the status bar with help text.
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let style = match app.status_level {
        StatusLevel::Info => Style::default().fg(Color::Gray),
        StatusLevel::Success => Style::default().fg(Color::Green),
        StatusLevel::Warning => Style::default().fg(Color::Yellow),
        StatusLevel::Error => Style::default().fg(Color::Red),
    };

    let help = "Tab: Next field | Enter: Submit field | Esc: Quit";
    let status = Paragraph::new(format!("{} | {}", app.status, help))
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(status, area);
}
