//! Environment variable-based configuration overrides
//!
//! Variables with a RECALL_ prefix cover general settings; credentials use
//! the names the underlying services document (GEMINI_API_KEY,
//! SLACK_BOT_TOKEN), so existing shells keep working.

use crate::config::model::Config;
use crate::error::{RecallError, RecallResult};
use std::env;
use std::path::PathBuf;

/// Apply environment variable overrides on top of a loaded configuration.
pub fn apply_env_overrides(config: &mut Config) -> RecallResult<()> {
    if let Ok(backend) = env::var("RECALL_BACKEND") {
        config.llm.backend = backend.parse().map_err(|_| {
            RecallError::config(format!(
                "Invalid RECALL_BACKEND value '{}' (expected 'gemini' or 'ollama')",
                backend
            ))
        })?;
    }

    // Gemini (hosted) backend
    if let Ok(api_key) = env::var("GEMINI_API_KEY") {
        config.llm.gemini.api_key = Some(api_key);
    }
    if let Ok(model) = env::var("GEMINI_MODEL") {
        config.llm.gemini.model = model;
    }
    if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
        config.llm.gemini.base_url = Some(base_url);
    }

    // Ollama (local) backend
    if let Ok(model) = env::var("OLLAMA_MODEL") {
        config.llm.ollama.model = model;
    }
    if let Ok(base_url) = env::var("OLLAMA_BASE_URL") {
        config.llm.ollama.base_url = Some(base_url);
    }

    // Slack
    if let Ok(token) = env::var("SLACK_BOT_TOKEN") {
        config.slack.bot_token = Some(token);
    }
    if let Ok(channel) = env::var("RECALL_SLACK_CHANNEL") {
        config.slack.default_channel = Some(channel);
    }

    // Capture caps
    if let Ok(count) = env::var("RECALL_MESSAGE_COUNT") {
        config.capture.message_count = count
            .parse()
            .map_err(|_| RecallError::config("Invalid RECALL_MESSAGE_COUNT value"))?;
    }
    if let Ok(max) = env::var("RECALL_MAX_WINDOWS") {
        config.capture.max_windows = max
            .parse()
            .map_err(|_| RecallError::config("Invalid RECALL_MAX_WINDOWS value"))?;
    }

    // Session store
    if let Ok(dir) = env::var("RECALL_SESSION_DIR") {
        config.sessions.dir = PathBuf::from(dir);
    }

    Ok(())
}
