//! Slack channel capture
//!
//! Fetches recent messages from a channel through the Slack Web API
//! (`conversations.history`). Auth and timeouts come from
//! [`SlackSettings`]; a missing bot token surfaces as a collaborator
//! error so the orchestrator can degrade instead of aborting.

use crate::capture::types::RawMessage;
use crate::config::SlackSettings;
use crate::error::{RecallError, RecallResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Source of recent channel messages.
#[async_trait]
pub trait MessageFetcher: Send + Sync {
    /// Fetch up to `count` recent messages from `channel_id`, newest first.
    async fn fetch_recent(&self, channel_id: &str, count: usize) -> RecallResult<Vec<RawMessage>>;
}

/// Wire shape of a `conversations.history` response.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<RawMessage>,
}

/// Message fetcher backed by the Slack Web API.
pub struct SlackFetcher {
    settings: SlackSettings,
    base_url: String,
    http_client: Client,
}

impl SlackFetcher {
    /// Build a fetcher from Slack settings.
    pub fn from_settings(settings: &SlackSettings) -> RecallResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| {
                RecallError::collaborator("slack", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            settings: settings.clone(),
            base_url: SLACK_API_BASE.to_string(),
            http_client,
        })
    }

    /// Point the fetcher at a different API root. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl MessageFetcher for SlackFetcher {
    async fn fetch_recent(&self, channel_id: &str, count: usize) -> RecallResult<Vec<RawMessage>> {
        let token = self
            .settings
            .bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RecallError::collaborator("slack", "bot token not configured"))?;

        let url = format!("{}/conversations.history", self.base_url);
        debug!(channel = channel_id, count = count, "fetching channel history");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(&[("channel", channel_id), ("limit", &count.to_string())])
            .send()
            .await
            .map_err(|e| {
                RecallError::collaborator("slack", format!("history request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RecallError::http_with_status(
                format!("Slack API error: {}", error_text.trim()),
                status.as_u16(),
            ));
        }

        let body: HistoryResponse = response.json().await.map_err(|e| {
            RecallError::collaborator("slack", format!("failed to parse history response: {}", e))
        })?;

        if !body.ok {
            let reason = body.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(RecallError::collaborator(
                "slack",
                format!("history request rejected: {}", reason),
            ));
        }

        Ok(body.messages)
    }
}
