//! Summarization gateway
//!
//! Turns a sanitized context plus the user's stated next step into the
//! compacted recall note, and optionally proposes a next step from the
//! context alone. The gateway absorbs model failures: both operations
//! always return usable text, falling back to a deterministic note when
//! the model is unconfigured or unreachable.

mod prompts;

pub use prompts::{COMPACTOR_SYSTEM, SUGGESTOR_SYSTEM, compaction_prompt, suggestion_prompt};

use crate::capture::RawContext;
use crate::config::Config;
use crate::error::RecallResult;
use crate::llm::{BackendKind, GenerationRequest, LlmBackend, LlmClient};
use std::sync::Arc;
use tracing::{info, warn};

/// Sampling temperature for compaction requests.
const COMPACTION_TEMPERATURE: f32 = 0.1;
/// Sampling temperature for suggestion requests.
const SUGGESTION_TEMPERATURE: f32 = 0.3;

/// Gateway between captured context and the language model.
pub struct Summarizer {
    backend: Option<Arc<dyn LlmBackend>>,
}

impl Summarizer {
    /// Create a gateway over an existing backend.
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Create a gateway with no model behind it. Every operation falls
    /// back to its deterministic text.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Build the gateway from configuration.
    ///
    /// A hosted backend without an API key yields a disabled gateway
    /// rather than an error, so a credential-less run still works.
    pub fn from_config(config: &Config) -> RecallResult<Self> {
        let hosted_without_key = config.llm.backend == BackendKind::Gemini
            && config
                .llm
                .gemini
                .api_key
                .as_deref()
                .map_or(true, str::is_empty);

        if hosted_without_key {
            warn!("no Gemini API key configured, summarization disabled");
            return Ok(Self::disabled());
        }

        let client = LlmClient::from_settings(&config.llm)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Whether a model is available behind this gateway.
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Compact a paused context into the recall note stored with the session.
    ///
    /// Never fails. Without a model the note is a stub that still carries
    /// the user's next step; a model error is folded into the note text.
    pub async fn compact(&self, context: &RawContext, next_step: &str) -> String {
        let Some(backend) = &self.backend else {
            return format!(
                "## Context Compaction Summary (FALLBACK - LLM Disabled)\nYour saved next step: {}",
                next_step
            );
        };

        info!(project = %context.project_name, "compacting paused context");

        let request = GenerationRequest::new(compaction_prompt(context, next_step))
            .with_system(COMPACTOR_SYSTEM)
            .with_temperature(COMPACTION_TEMPERATURE);

        match backend.generate(&request).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "compaction request failed, storing fallback note");
                format!(
                    "## Context Compaction Summary (API FAILURE)\nCould not reach the LLM. Error: {}",
                    e
                )
            }
        }
    }

    /// Propose the most logical next step from the captured context.
    ///
    /// Never fails; the error texts are shown to the user as-is so they
    /// know to type the step themselves.
    pub async fn suggest(&self, context: &RawContext) -> String {
        let Some(backend) = &self.backend else {
            return "ERROR: LLM not available for suggestion. Please type the next step manually."
                .to_string();
        };

        info!("requesting a next-step suggestion");

        let request = GenerationRequest::new(suggestion_prompt(context))
            .with_system(SUGGESTOR_SYSTEM)
            .with_temperature(SUGGESTION_TEMPERATURE);

        match backend.generate(&request).await {
            Ok(suggestion) => suggestion.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "suggestion request failed");
                format!(
                    "ERROR: Could not generate suggestion ({}). Please type the step manually.",
                    e
                )
            }
        }
    }
}
