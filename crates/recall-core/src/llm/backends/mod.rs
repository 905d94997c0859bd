//! Backend implementations and unified dispatch

mod gemini;
mod ollama;

pub use gemini::GeminiBackend;
pub use ollama::OllamaBackend;

use crate::error::RecallResult;
use crate::llm::types::GenerationRequest;
use async_trait::async_trait;

/// Unified trait for generation backends
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Run a single-turn generation request and return the model's text.
    async fn generate(&self, request: &GenerationRequest) -> RecallResult<String>;
}

/// Unified backend enum that wraps all backend implementations
pub enum BackendInstance {
    Gemini(GeminiBackend),
    Ollama(OllamaBackend),
}

#[async_trait]
impl LlmBackend for BackendInstance {
    async fn generate(&self, request: &GenerationRequest) -> RecallResult<String> {
        match self {
            Self::Gemini(b) => b.generate(request).await,
            Self::Ollama(b) => b.generate(request).await,
        }
    }
}
