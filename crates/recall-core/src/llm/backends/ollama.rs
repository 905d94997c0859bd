//! Local Ollama backend
//!
//! Talks to Ollama through its OpenAI-compatible chat completions
//! endpoint, so the same code path works against any server speaking
//! that dialect.

use crate::config::ModelSettings;
use crate::error::{RecallError, RecallResult};
use crate::llm::backends::LlmBackend;
use crate::llm::types::GenerationRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama backend handler
pub struct OllamaBackend {
    settings: ModelSettings,
    http_client: Client,
}

impl OllamaBackend {
    /// Create a new Ollama backend
    pub fn new(settings: ModelSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(json!({"role": "system", "content": system}));
        }
        messages.push(json!({"role": "user", "content": request.prompt}));

        let mut body = json!({
            "model": self.settings.model,
            "messages": messages,
        });

        if let Some(temperature) = request.options.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = request.options.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    async fn generate(&self, request: &GenerationRequest) -> RecallResult<String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.settings.base_url_or(DEFAULT_BASE_URL)
        );

        let request_body = self.request_body(request);

        let response = self
            .http_client
            .post(&url)
            .header(
                "Authorization",
                format!(
                    "Bearer {}",
                    self.settings
                        .api_key
                        .clone()
                        .unwrap_or_else(|| "ollama".to_string())
                ),
            )
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                RecallError::llm_with_backend(format!("request failed: {}", e), "ollama")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RecallError::llm_with_backend(
                format!("API error (status {}): {}", status, error_text),
                "ollama",
            ));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RecallError::llm_with_backend(format!("failed to parse response: {}", e), "ollama")
        })?;

        tracing::debug!(
            "Ollama API response: {}",
            serde_json::to_string_pretty(&response_json).unwrap_or_default()
        );

        parse_chat_response(&response_json)
    }
}

/// Extract the content of the first choice.
fn parse_chat_response(response: &Value) -> RecallResult<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.to_string())
        .ok_or_else(|| RecallError::llm_with_backend("no message content in response", "ollama"))
}
