//! CLI command implementations

pub mod config;
pub mod pause;
pub mod resume;
pub mod sessions;
pub mod suggest;

use dialoguer::{theme::ColorfulTheme, Input};
use recall_core::error::{RecallError, RecallResult};
use recall_core::Config;

/// Prompt for one line of input, optionally pre-filled with editable text.
pub(crate) fn prompt_line(prompt: &str, initial: &str) -> RecallResult<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    input
        .interact_text()
        .map_err(|e| RecallError::io(format!("Failed to read input: {}", e)))
}

/// Channel comes from the flag, then the config default, then a prompt.
pub(crate) fn resolve_channel(flag: Option<String>, config: &Config) -> RecallResult<String> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if let Some(value) = &config.slack.default_channel {
        return Ok(value.clone());
    }
    prompt_line("Slack channel ID", "")
}

/// Date portion of an RFC 3339 timestamp.
pub(crate) fn date_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Shorten text for one-line display, marking the cut with an ellipsis.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}
