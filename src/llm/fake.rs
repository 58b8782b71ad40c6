//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests and
//! offline runs never touch the network.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::RwLock;

/// A fake chat-completion provider.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, the default response is returned, or an
/// error when none is set.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Number of `complete` calls made so far
    calls: AtomicU32,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some(
                "Receta de ejemplo$ingredientes de ejemplo$Mezcla todo y sirve.".to_string(),
            ),
            calls: AtomicU32::new(0),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    ///
    /// Unmatched prompts error, which makes this the provider to use when a
    /// test needs a completion failure.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            calls: AtomicU32::new(0),
        }
    }

    /// Create a FakeProvider answering prompts that contain a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider with standard responses for the three prompt
    /// families the server renders.
    pub fn with_recipe_responses() -> Self {
        let mut provider = Self::new();

        // Generation prompt
        provider.add_response(
            "Imprime una receta",
            "Arroz con pollo$pollo, arroz, cebolla$Sofríe la cebolla, añade el pollo y el arroz y cocina veinte minutos.",
        );

        // Modification prompt
        provider.add_response(
            "Modifica la siguiente receta",
            "Arroz con pollo y queso$pollo, arroz, cebolla, queso$Sofríe la cebolla, añade el pollo y el arroz, cocina veinte minutos y gratina con queso.",
        );

        // Similar-recipe prompt for the history endpoint
        provider.add_response(
            "receta similar",
            "Arroz a la cubana$arroz, huevo, plátano$Cocina el arroz, fríe el huevo y sirve con plátano frito.",
        );

        provider
    }

    /// Number of `complete` calls made against this provider.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hola", "mundo");
        let result = provider.complete("Di hola al usuario").await.unwrap();
        assert_eq!(result, "mundo");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HOLA", "mundo");
        let result = provider.complete("hola qué tal").await.unwrap();
        assert_eq!(result, "mundo");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.complete("prompt sin respuesta").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_default_response() {
        let provider = FakeProvider::new().with_default_response("por defecto");
        let result = provider.complete("prompt sin respuesta").await.unwrap();
        assert_eq!(result, "por defecto");
    }

    #[tokio::test]
    async fn test_fake_provider_counts_calls() {
        let provider = FakeProvider::default();
        assert_eq!(provider.call_count(), 0);

        provider.complete("uno").await.unwrap();
        provider.complete("dos").await.unwrap();

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_recipe_responses() {
        let provider = FakeProvider::with_recipe_responses();

        let result = provider
            .complete("Imprime una receta española vegetariana de dificultad baja y 30 minutos.")
            .await
            .unwrap();
        assert!(result.contains("Arroz con pollo"));

        let result = provider
            .complete("Muestrame una receta similar a estas: Arroz con pollo.")
            .await
            .unwrap();
        assert!(result.contains("Arroz a la cubana"));
    }
}
