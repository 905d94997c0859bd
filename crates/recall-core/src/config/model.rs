//! Configuration data models

use crate::capture::SanitizeRules;
use crate::error::{RecallError, RecallResult};
use crate::llm::BackendKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the recall assistant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language model backend selection and per-backend settings
    pub llm: LlmSettings,
    /// Slack access settings
    pub slack: SlackSettings,
    /// Capture caps and sanitize rules
    pub capture: CaptureSettings,
    /// Session store settings
    pub sessions: SessionSettings,
}

/// Settings for the language model layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Which backend handles generation requests
    pub backend: BackendKind,
    /// Hosted Gemini backend settings
    pub gemini: ModelSettings,
    /// Local Ollama backend settings
    pub ollama: ModelSettings,
    /// TCP connect timeout for model calls, seconds
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for model calls, seconds
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::Gemini,
            gemini: ModelSettings {
                model: "gemini-2.5-flash".to_string(),
                api_key: None,
                base_url: None,
            },
            ollama: ModelSettings {
                model: "llama3.2".to_string(),
                api_key: None,
                base_url: None,
            },
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}

impl LlmSettings {
    /// Settings for the currently selected backend.
    pub fn active(&self) -> &ModelSettings {
        match self.backend {
            BackendKind::Gemini => &self.gemini,
            BackendKind::Ollama => &self.ollama,
        }
    }
}

/// Per-backend model settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Model name/ID
    pub model: String,
    /// API key (hosted backends; optional for local servers)
    pub api_key: Option<String>,
    /// Base URL override; each backend has a sensible default
    pub base_url: Option<String>,
}

impl ModelSettings {
    /// Base URL for this backend, falling back to the given default.
    pub fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Slack access settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    /// Bot token; without it the fetcher reports itself unconfigured
    pub bot_token: Option<String>,
    /// Channel used when the caller does not name one
    pub default_channel: Option<String>,
    /// TCP connect timeout, seconds
    pub connect_timeout_secs: u64,
    /// Whole-request timeout, seconds
    pub request_timeout_secs: u64,
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            default_channel: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

/// Capture caps and sanitize rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Maximum window titles kept per capture
    pub max_windows: usize,
    /// Recent messages requested from the channel
    pub message_count: usize,
    /// Keyword lists applied by the sanitizer
    pub sanitize: SanitizeRules,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            max_windows: 5,
            message_count: 10,
            sanitize: SanitizeRules::default(),
        }
    }
}

/// Session store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Directory session files are written to; created on demand
    pub dir: PathBuf,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("sessions"),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> RecallResult<()> {
        if self.llm.active().model.is_empty() {
            return Err(RecallError::config(format!(
                "Model name for backend '{}' cannot be empty",
                self.llm.backend.name()
            )));
        }

        if self.llm.request_timeout_secs == 0 {
            return Err(RecallError::config(
                "llm.request_timeout_secs must be greater than zero",
            ));
        }

        if self.slack.request_timeout_secs == 0 {
            return Err(RecallError::config(
                "slack.request_timeout_secs must be greater than zero",
            ));
        }

        if self.capture.message_count == 0 {
            return Err(RecallError::config(
                "capture.message_count must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_backend_is_gemini() {
        let config = Config::default();
        assert_eq!(config.llm.backend, BackendKind::Gemini);
        assert_eq!(config.llm.active().model, "gemini-2.5-flash");
    }

    #[test]
    fn empty_model_fails_validation() {
        let mut config = Config::default();
        config.llm.gemini.model.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_message_count_fails_validation() {
        let mut config = Config::default();
        config.capture.message_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn session_dir_defaults_to_relative_sessions() {
        let config = Config::default();
        assert_eq!(config.sessions.dir, PathBuf::from("sessions"));
    }
}
