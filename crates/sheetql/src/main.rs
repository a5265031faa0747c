//! sheetql binary.
//!
//! Launches one interactive session: credential gate, spreadsheet load,
//! question entry, query generation. There is no command-line surface;
//! all inputs are collected inside the session.

use sheetql_error::SheetqlResult;
use sheetql_interface::QueryGenerator;
use sheetql_models::GeminiClient;
use sheetql_tui::run_tui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present, then initialize logging. Logs go to stderr so
    // they do not fight the terminal UI on stdout.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Environment fallback for the credential, consumed on first load only.
    let initial_key = GeminiClient::api_key_from_env();

    let factory = |api_key: &str| -> SheetqlResult<Box<dyn QueryGenerator>> {
        let client = GeminiClient::new(api_key)?;
        tracing::info!(model = client.model_name(), "gemini client ready");
        Ok(Box::new(client))
    };

    // The TUI event loop is blocking; run it off the async workers and
    // hand it a runtime handle for the one in-flight generation call.
    let handle = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || run_tui(&factory, handle, initial_key)).await??;

    Ok(())
}
