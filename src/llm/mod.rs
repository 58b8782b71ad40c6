//! LLM provider abstraction for recipe generation.
//!
//! A trait-based seam over the external chat-completion API so handlers can
//! run against a deterministic fake in tests.

mod fake;
mod openai;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Default chat-completions model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Error type for completion calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for chat-completion providers.
///
/// Implementations should be stateless and thread-safe. The provider makes a
/// single blocking round trip per invocation; there is no retry or streaming.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's raw text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Build the provider selected by environment variables.
///
/// - `RECETARIO_PROVIDER`: "openai" | "fake" (default: "openai")
/// - `OPENAI_API_KEY`: API key, required for the openai provider
/// - `RECETARIO_MODEL`: model name (default: "gpt-4o-mini")
/// - `RECETARIO_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
/// - `RECETARIO_MAX_TOKENS`: completion token budget (default: 500)
pub fn create_provider_from_env() -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("RECETARIO_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "fake" => Ok(Arc::new(FakeProvider::default())),
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;
            let model =
                std::env::var("RECETARIO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            let base_url = std::env::var("RECETARIO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
            let max_tokens = std::env::var("RECETARIO_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS);
            Ok(Arc::new(OpenAiProvider::new(
                api_key, model, base_url, max_tokens,
            )))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
