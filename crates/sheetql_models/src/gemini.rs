//! Google Gemini backend.
//!
//! One client per credential value: construction validates the key once,
//! and a failed construction blocks all downstream generation until a new
//! credential is supplied. Each request is a single blocking call with no
//! retry and no streaming.

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use sheetql_error::{GeminiError, GeminiErrorKind, SheetqlResult};
use sheetql_interface::QueryGenerator;
use std::env;
use tracing::instrument;

/// Model used for query generation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable consulted for the credential fallback.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Client for the Google Gemini API.
pub struct GeminiClient {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for the given API key, using [`DEFAULT_MODEL`].
    ///
    /// Fails when the key is empty or the SDK rejects it; the caller
    /// treats either as a hard stop for generation.
    #[instrument(name = "gemini_client_new", skip(api_key))]
    pub fn new(api_key: &str) -> SheetqlResult<Self> {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a client for the given API key and model name.
    #[instrument(name = "gemini_client_with_model", skip(api_key))]
    pub fn with_model(api_key: &str, model_name: &str) -> SheetqlResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }
        let client = Gemini::with_model(api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        Ok(Self {
            client,
            model_name: model_name.to_string(),
        })
    }

    /// Read the credential from the `GEMINI_API_KEY` environment variable,
    /// if present and non-empty.
    pub fn api_key_from_env() -> Option<String> {
        env::var(API_KEY_VAR).ok().filter(|key| !key.trim().is_empty())
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Known names map to their enum variants; anything else becomes
    /// Model::Custom with the "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError
    /// with HTTP status codes when available. The session surfaces all
    /// of these uniformly; the structure is for logs and tests.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::Http {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl QueryGenerator for GeminiClient {
    #[instrument(name = "gemini_generate_query", skip(self, prompt))]
    async fn generate_query(&self, prompt: &str) -> SheetqlResult<String> {
        let response = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .execute()
            .await
            .map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into());
        }
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
