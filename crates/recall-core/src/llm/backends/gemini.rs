//! Hosted Gemini backend

use crate::config::ModelSettings;
use crate::error::{RecallError, RecallResult};
use crate::llm::backends::LlmBackend;
use crate::llm::types::GenerationRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini backend handler
pub struct GeminiBackend {
    settings: ModelSettings,
    http_client: Client,
}

impl GeminiBackend {
    /// Create a new Gemini backend
    pub fn new(settings: ModelSettings, http_client: Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}],
            }],
        });

        if let Some(system) = &request.system {
            body["systemInstruction"] = json!({
                "parts": [{"text": system}],
            });
        }

        let mut generation_config = json!({});
        if let Some(temperature) = request.options.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = request.options.max_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }
        if generation_config
            .as_object()
            .map_or(false, |obj| !obj.is_empty())
        {
            body["generationConfig"] = generation_config;
        }

        body
    }
}

#[async_trait]
impl LlmBackend for GeminiBackend {
    async fn generate(&self, request: &GenerationRequest) -> RecallResult<String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RecallError::llm_with_backend("API key not provided", "gemini"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.settings.base_url_or(DEFAULT_BASE_URL),
            self.settings.model,
            api_key
        );

        let request_body = self.request_body(request);

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                RecallError::llm_with_backend(format!("request failed: {}", e), "gemini")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RecallError::llm_with_backend(
                format!("API error (status {}): {}", status, error_text),
                "gemini",
            ));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RecallError::llm_with_backend(format!("failed to parse response: {}", e), "gemini")
        })?;

        tracing::debug!(
            "Gemini API response: {}",
            serde_json::to_string_pretty(&response_json).unwrap_or_default()
        );

        parse_generate_response(&response_json)
    }
}

/// Extract the text of the first candidate.
fn parse_generate_response(response: &Value) -> RecallResult<String> {
    let candidates = response["candidates"]
        .as_array()
        .ok_or_else(|| RecallError::llm_with_backend("no candidates in response", "gemini"))?;

    if candidates.is_empty() {
        return Err(RecallError::llm_with_backend(
            "empty candidates array in response",
            "gemini",
        ));
    }

    let parts = candidates[0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| RecallError::llm_with_backend("no content parts in response", "gemini"))?;

    let mut content = String::new();
    for part in parts {
        if let Some(text) = part["text"].as_str() {
            content.push_str(text);
        }
    }

    if content.is_empty() {
        return Err(RecallError::llm_with_backend(
            "response contained no text",
            "gemini",
        ));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> GeminiBackend {
        GeminiBackend::new(
            ModelSettings {
                model: "gemini-2.5-flash".to_string(),
                api_key: Some("test-key".to_string()),
                base_url: None,
            },
            Client::new(),
        )
    }

    #[test]
    fn body_carries_system_instruction_and_config() {
        // 0.5 survives the f32-to-f64 widening inside json! exactly
        let request = GenerationRequest::new("hello")
            .with_system("be brief")
            .with_temperature(0.5);

        let body = backend().request_body(&request);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn body_omits_empty_generation_config() {
        let body = backend().request_body(&GenerationRequest::new("hello"));
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn first_candidate_text_is_returned() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "## Summary\n"}, {"text": "done"}]
                }
            }]
        });

        assert_eq!(parse_generate_response(&response).unwrap(), "## Summary\ndone");
    }

    #[test]
    fn missing_candidates_is_an_error() {
        let err = parse_generate_response(&json!({"promptFeedback": {}})).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn textless_parts_are_an_error() {
        let response = json!({
            "candidates": [{"content": {"parts": [{"inlineData": {}}]}}]
        });
        let err = parse_generate_response(&response).unwrap_err();
        assert!(err.to_string().contains("no text"));
    }
}
