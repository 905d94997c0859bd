//! Unified generation client

use crate::config::LlmSettings;
use crate::error::{RecallError, RecallResult};
use crate::llm::backends::{BackendInstance, GeminiBackend, LlmBackend, OllamaBackend};
use crate::llm::types::{BackendKind, GenerationRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for making generation requests to the configured backend.
///
/// Owns the HTTP client with the configured timeouts and dispatches to
/// the selected backend implementation.
pub struct LlmClient {
    backend: BackendKind,
    model: String,
    instance: BackendInstance,
}

impl LlmClient {
    /// Create a client from the LLM section of the configuration.
    pub fn from_settings(settings: &LlmSettings) -> RecallResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| {
                RecallError::llm_with_backend(
                    format!("failed to create HTTP client: {}", e),
                    settings.backend.name(),
                )
            })?;

        debug!(
            backend = %settings.backend,
            connect_timeout_secs = settings.connect_timeout_secs,
            request_timeout_secs = settings.request_timeout_secs,
            "created LLM client"
        );

        let model_settings = settings.active().clone();
        let model = model_settings.model.clone();
        let instance = match settings.backend {
            BackendKind::Gemini => {
                BackendInstance::Gemini(GeminiBackend::new(model_settings, http_client))
            }
            BackendKind::Ollama => {
                BackendInstance::Ollama(OllamaBackend::new(model_settings, http_client))
            }
        };

        Ok(Self {
            backend: settings.backend,
            model,
            instance,
        })
    }

    /// The backend this client talks to.
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// The model name configured for this client.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmBackend for LlmClient {
    async fn generate(&self, request: &GenerationRequest) -> RecallResult<String> {
        self.instance.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmSettings;

    #[test]
    fn client_reports_the_active_model() {
        let mut settings = LlmSettings::default();
        settings.backend = BackendKind::Ollama;
        settings.ollama.model = "codellama".to_string();

        let client = LlmClient::from_settings(&settings).unwrap();
        assert_eq!(client.backend(), BackendKind::Ollama);
        assert_eq!(client.model(), "codellama");
    }
}
