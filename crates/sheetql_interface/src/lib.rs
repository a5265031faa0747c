//! Trait definitions for generation service backends.
//!
//! The single seam between the session logic and the hosted text
//! generation model. Real backends live in `sheetql_models`; tests
//! substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use sheetql_error::SheetqlResult;

/// A generation service backend: one prompt in, one completion out.
///
/// The contract with the service is best-effort natural-language-to-SQL
/// text, not guaranteed-valid SQL; callers do not validate the result
/// against a grammar.
#[async_trait]
pub trait QueryGenerator: Send + Sync {
    /// Send one assembled prompt and return the raw completion text.
    ///
    /// A single call per invocation: no retry, no streaming, no timeout
    /// beyond the client library's default.
    async fn generate_query(&self, prompt: &str) -> SheetqlResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-1.5-flash").
    fn model_name(&self) -> &str;
}
