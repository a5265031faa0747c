// Session-level tests for generation dispatch, using a mock generator
// so no network calls are made.

use async_trait::async_trait;
use sheetql_core::{Column, ColumnType, Table};
use sheetql_error::{GeminiError, GeminiErrorKind, SheetqlResult};
use sheetql_interface::QueryGenerator;
use sheetql_tui::{App, StatusLevel, dispatch_generation};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock backend that records calls and returns a canned response.
struct MockGenerator {
    response: Result<String, GeminiErrorKind>,
    calls: AtomicUsize,
}

impl MockGenerator {
    fn success(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failure(kind: GeminiErrorKind) -> Self {
        Self {
            response: Err(kind),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryGenerator for MockGenerator {
    async fn generate_query(&self, _prompt: &str) -> SheetqlResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

fn app_with_table() -> App {
    let mut app = App::new();
    let table = Table::new(
        vec![
            Column::new("region", ColumnType::Text),
            Column::new("sales", ColumnType::Real),
        ],
        vec![],
        3,
    );
    app.set_table(table, "sales_data".to_string());
    app
}

#[test]
fn whitespace_question_makes_no_call() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mock = MockGenerator::success("SELECT 1;");
    let mut app = app_with_table();
    app.question = "   \t ".to_string();

    dispatch_generation(&mut app, Some(&mock), rt.handle());

    assert_eq!(mock.call_count(), 0);
    assert_eq!(app.status_level, StatusLevel::Warning);
    assert!(app.result.is_none());
    Ok(())
}

#[test]
fn missing_generator_gates_generation_off() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut app = app_with_table();
    app.question = "total sales by region".to_string();

    dispatch_generation(&mut app, None, rt.handle());

    assert_eq!(app.status_level, StatusLevel::Warning);
    assert!(app.status.contains("API key"));
    assert!(app.result.is_none());
    Ok(())
}

#[test]
fn missing_table_gates_generation_off() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mock = MockGenerator::success("SELECT 1;");
    let mut app = App::new();
    app.question = "total sales by region".to_string();

    dispatch_generation(&mut app, Some(&mock), rt.handle());

    assert_eq!(mock.call_count(), 0);
    assert_eq!(app.status_level, StatusLevel::Warning);
    Ok(())
}

#[test]
fn fenced_response_is_cleaned_before_display() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mock = MockGenerator::success("```sql\nSELECT 1;\n```");
    let mut app = app_with_table();
    app.question = "total sales by region".to_string();

    dispatch_generation(&mut app, Some(&mock), rt.handle());

    assert_eq!(mock.call_count(), 1);
    assert_eq!(app.result.as_deref(), Some("SELECT 1;"));
    assert_eq!(app.status_level, StatusLevel::Success);
    Ok(())
}

#[test]
fn failed_call_surfaces_one_error_and_no_partial_result() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mock = MockGenerator::failure(GeminiErrorKind::Http {
        status_code: 503,
        message: "Service unavailable".to_string(),
    });
    let mut app = app_with_table();
    app.question = "total sales by region".to_string();

    dispatch_generation(&mut app, Some(&mock), rt.handle());

    assert_eq!(mock.call_count(), 1);
    assert_eq!(app.status_level, StatusLevel::Error);
    assert!(app.status.contains("Error generating SQL query"));
    assert!(app.result.is_none());
    Ok(())
}

#[test]
fn empty_table_name_falls_back_to_default() -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let mock = MockGenerator::success("SELECT 1;");
    let mut app = app_with_table();
    app.table_name = String::new();
    app.question = "anything".to_string();

    dispatch_generation(&mut app, Some(&mock), rt.handle());

    assert_eq!(mock.call_count(), 1);
    assert_eq!(app.result.as_deref(), Some("SELECT 1;"));
    Ok(())
}
