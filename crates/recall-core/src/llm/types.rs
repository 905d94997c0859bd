//! Backend selection and generation request types

use crate::error::RecallError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported language model backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Hosted Gemini API
    #[default]
    Gemini,
    /// Local Ollama server, spoken to over its OpenAI-compatible endpoint
    Ollama,
}

impl BackendKind {
    /// Stable lowercase name, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BackendKind {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "ollama" | "local" => Ok(Self::Ollama),
            other => Err(RecallError::config(format!("unknown backend '{}'", other))),
        }
    }
}

/// Sampling parameters for a generation request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodingOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// A single-turn generation request.
///
/// Covers everything this assistant needs from a model: one optional
/// system instruction and one user prompt, no conversation history.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System instruction framing the model's role
    pub system: Option<String>,
    /// The user-turn prompt
    pub prompt: String,
    /// Sampling parameters
    pub options: DecodingOptions,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            options: DecodingOptions::default(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.options.max_tokens = Some(max_tokens);
        self
    }
}
