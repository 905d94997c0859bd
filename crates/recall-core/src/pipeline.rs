//! Pause/resume pipeline
//!
//! The orchestrator behind the CLI commands. A pause run is strictly
//! sequential: validate the request, capture and sanitize context,
//! compact it through the summarization gateway, then persist the
//! snapshot. Capture failures degrade to empty sections so a pause
//! always produces a session; only invalid input and storage failures
//! abort the run.

use crate::capture::{
    DesktopWindowLister, MessageFetcher, RawContext, SlackFetcher, WindowLister,
};
use crate::config::{CaptureSettings, Config};
use crate::error::{RecallError, RecallResult};
use crate::session::{
    ContextSnapshot, FileSessionStore, SessionId, SessionStore, SessionSummary, new_session_id,
};
use crate::summarize::Summarizer;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Project name used when capturing context for a suggestion request.
const SUGGESTION_PROJECT: &str = "Suggestion Task";

/// Input to a pause run
#[derive(Debug, Clone)]
pub struct PauseRequest {
    /// Name of the task being paused; becomes part of the session ID
    pub project_name: String,
    /// Channel whose recent history goes into the context
    pub channel_id: String,
    /// The user's stated next step
    pub next_step: String,
}

/// What a completed pause run produced
#[derive(Debug, Clone)]
pub struct PauseOutcome {
    /// ID the snapshot was stored under
    pub session_id: SessionId,
    /// The persisted snapshot
    pub snapshot: ContextSnapshot,
    /// The sanitized context that went into the model
    pub context: RawContext,
}

/// The pause/resume orchestrator.
pub struct Pipeline {
    windows: Arc<dyn WindowLister>,
    messages: Arc<dyn MessageFetcher>,
    summarizer: Summarizer,
    store: Arc<dyn SessionStore>,
    capture: CaptureSettings,
}

impl Pipeline {
    /// Assemble a pipeline from its parts.
    pub fn new(
        windows: Arc<dyn WindowLister>,
        messages: Arc<dyn MessageFetcher>,
        summarizer: Summarizer,
        store: Arc<dyn SessionStore>,
        capture: CaptureSettings,
    ) -> Self {
        Self {
            windows,
            messages,
            summarizer,
            store,
            capture,
        }
    }

    /// Build the production pipeline from configuration: desktop window
    /// capture, the Slack Web API, the configured model backend, and
    /// file-based session storage.
    pub fn from_config(config: &Config) -> RecallResult<Self> {
        let windows: Arc<dyn WindowLister> = Arc::new(DesktopWindowLister::new());
        let messages: Arc<dyn MessageFetcher> =
            Arc::new(SlackFetcher::from_settings(&config.slack)?);
        let summarizer = Summarizer::from_config(config)?;
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.sessions.dir.clone()));

        Ok(Self::new(
            windows,
            messages,
            summarizer,
            store,
            config.capture.clone(),
        ))
    }

    /// Whether the summarization gateway has a model behind it.
    pub fn summarizer_enabled(&self) -> bool {
        self.summarizer.is_enabled()
    }

    /// Pause a task: capture, sanitize, compact, persist.
    #[instrument(skip(self, request), fields(project = %request.project_name))]
    pub async fn pause(&self, request: &PauseRequest) -> RecallResult<PauseOutcome> {
        validate_request(request)?;

        let project_name = request.project_name.trim();
        let channel_id = request.channel_id.trim();
        let next_step = request.next_step.trim();

        info!("pausing task");

        let context = self.capture_context(project_name, channel_id).await;
        let summary = self.summarizer.compact(&context, next_step).await;
        let snapshot = ContextSnapshot::new(project_name, next_step, summary);

        let session_id = self.reserve_session_id(new_session_id(project_name)).await?;
        self.store.save(&session_id, &snapshot).await?;

        info!(session = %session_id, "task paused");

        Ok(PauseOutcome {
            session_id,
            snapshot,
            context,
        })
    }

    /// Propose a next step from freshly captured context.
    ///
    /// Infallible by construction: capture degrades and the gateway folds
    /// its own failures into the returned text.
    #[instrument(skip(self))]
    pub async fn suggest_next_step(&self, channel_id: &str) -> String {
        let context = self.capture_context(SUGGESTION_PROJECT, channel_id.trim()).await;
        self.summarizer.suggest(&context).await
    }

    /// Load the snapshot stored under `session_id`.
    #[instrument(skip(self))]
    pub async fn resume(&self, session_id: &str) -> RecallResult<ContextSnapshot> {
        self.store.load(&session_id.to_string()).await?.ok_or_else(|| {
            RecallError::not_found(format!("session '{}' not found", session_id))
        })
    }

    /// List stored sessions, most recent first.
    pub async fn list_sessions(&self) -> RecallResult<Vec<SessionSummary>> {
        self.store.list().await
    }

    /// Capture both context sources, degrading each to empty on failure.
    async fn capture_context(&self, project_name: &str, channel_id: &str) -> RawContext {
        let windows = match self.windows.active_windows(self.capture.max_windows).await {
            Ok(titles) => titles,
            Err(e) => {
                warn!(error = %e, "window capture failed, continuing without window titles");
                Vec::new()
            }
        };

        let messages = match self
            .messages
            .fetch_recent(channel_id, self.capture.message_count)
            .await
        {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, "message capture failed, continuing without channel history");
                Vec::new()
            }
        };

        self.capture
            .sanitize
            .sanitize(project_name, windows, messages)
    }

    /// Find a free ID, suffixing `-2`, `-3`, ... if the base is taken.
    async fn reserve_session_id(&self, base: SessionId) -> RecallResult<SessionId> {
        if !self.store.exists(&base).await? {
            return Ok(base);
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.store.exists(&candidate).await? {
                warn!(base = %base, reserved = %candidate, "session ID collision");
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

fn validate_request(request: &PauseRequest) -> RecallResult<()> {
    let project = request.project_name.trim();
    if project.is_empty() {
        return Err(RecallError::invalid_input_field(
            "Project name is required",
            "project_name",
        ));
    }
    if project.contains(['/', '\\']) || project == "." || project == ".." {
        return Err(RecallError::invalid_input_field(
            "Project name cannot contain path separators",
            "project_name",
        ));
    }
    if request.channel_id.trim().is_empty() {
        return Err(RecallError::invalid_input_field(
            "Channel ID is required",
            "channel_id",
        ));
    }
    if request.next_step.trim().is_empty() {
        return Err(RecallError::invalid_input_field(
            "Next step is required",
            "next_step",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::RawMessage;
    use crate::error::RecallError;
    use crate::llm::{GenerationRequest, LlmBackend};
    use crate::session::MemorySessionStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticLister(Vec<String>);

    #[async_trait]
    impl WindowLister for StaticLister {
        async fn active_windows(&self, max: usize) -> RecallResult<Vec<String>> {
            Ok(self.0.iter().take(max).cloned().collect())
        }
    }

    struct FailingLister;

    #[async_trait]
    impl WindowLister for FailingLister {
        async fn active_windows(&self, _max: usize) -> RecallResult<Vec<String>> {
            Err(RecallError::collaborator("window lister", "no display"))
        }
    }

    struct StaticFetcher(Vec<RawMessage>);

    #[async_trait]
    impl MessageFetcher for StaticFetcher {
        async fn fetch_recent(
            &self,
            _channel_id: &str,
            count: usize,
        ) -> RecallResult<Vec<RawMessage>> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl MessageFetcher for FailingFetcher {
        async fn fetch_recent(
            &self,
            _channel_id: &str,
            _count: usize,
        ) -> RecallResult<Vec<RawMessage>> {
            Err(RecallError::collaborator("slack", "token rejected"))
        }
    }

    struct ScriptedBackend {
        reply: String,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedBackend {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmBackend for ScriptedBackend {
        async fn generate(&self, request: &GenerationRequest) -> RecallResult<String> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    fn request() -> PauseRequest {
        PauseRequest {
            project_name: "Demo".to_string(),
            channel_id: "C123".to_string(),
            next_step: "finish the report".to_string(),
        }
    }

    fn pipeline_with(
        windows: Arc<dyn WindowLister>,
        messages: Arc<dyn MessageFetcher>,
        summarizer: Summarizer,
        store: Arc<dyn SessionStore>,
    ) -> Pipeline {
        Pipeline::new(windows, messages, summarizer, store, CaptureSettings::default())
    }

    #[tokio::test]
    async fn pause_produces_a_stored_session() {
        let backend = ScriptedBackend::new("## Summary\nresume here");
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let pipeline = pipeline_with(
            Arc::new(StaticLister(vec![
                "Editor - report.md".to_string(),
                "PopupHost".to_string(),
            ])),
            Arc::new(StaticFetcher(vec![
                RawMessage::new("U1", "draft looks good", "2.0"),
                RawMessage::new("USLACKBOT", "@eve has joined the channel", "1.0"),
            ])),
            Summarizer::new(backend.clone()),
            store.clone(),
        );

        let outcome = pipeline.pause(&request()).await.unwrap();

        // ID shape: project name, dash, 14-digit local timestamp
        let digits = outcome.session_id.strip_prefix("Demo-").unwrap();
        assert_eq!(digits.len(), 14);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));

        // Snapshot persisted under that ID
        let stored = store.load(&outcome.session_id).await.unwrap().unwrap();
        assert_eq!(stored, outcome.snapshot);
        assert_eq!(stored.compacted_summary, "## Summary\nresume here");
        assert_eq!(stored.user_next_step, "finish the report");

        // Sanitizer ran before the model saw anything
        assert_eq!(outcome.context.active_windows, vec!["Editor - report.md"]);
        assert_eq!(outcome.context.slack_messages.len(), 1);
        let requests = backend.requests.lock().unwrap();
        assert!(!requests[0].prompt.contains("PopupHost"));
        assert!(!requests[0].prompt.contains("has joined the channel"));
    }

    #[tokio::test]
    async fn fetcher_failure_degrades_to_empty_messages() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let pipeline = pipeline_with(
            Arc::new(StaticLister(vec!["Editor".to_string()])),
            Arc::new(FailingFetcher),
            Summarizer::disabled(),
            store.clone(),
        );

        let outcome = pipeline.pause(&request()).await.unwrap();
        assert!(outcome.context.slack_messages.is_empty());
        assert_eq!(outcome.context.active_windows, vec!["Editor"]);
        assert!(store.exists(&outcome.session_id).await.unwrap());
    }

    #[tokio::test]
    async fn lister_failure_degrades_to_empty_windows() {
        let pipeline = pipeline_with(
            Arc::new(FailingLister),
            Arc::new(StaticFetcher(vec![RawMessage::new("U1", "hi", "1.0")])),
            Summarizer::disabled(),
            Arc::new(MemorySessionStore::new()),
        );

        let outcome = pipeline.pause(&request()).await.unwrap();
        assert!(outcome.context.active_windows.is_empty());
        assert_eq!(outcome.context.slack_messages.len(), 1);
    }

    #[tokio::test]
    async fn disabled_gateway_still_saves_the_next_step() {
        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(FailingFetcher),
            Summarizer::disabled(),
            Arc::new(MemorySessionStore::new()),
        );

        let outcome = pipeline.pause(&request()).await.unwrap();
        assert!(outcome
            .snapshot
            .compacted_summary
            .contains("FALLBACK - LLM Disabled"));
        assert!(outcome.snapshot.compacted_summary.contains("finish the report"));
    }

    #[tokio::test]
    async fn empty_project_name_is_rejected() {
        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(FailingFetcher),
            Summarizer::disabled(),
            Arc::new(MemorySessionStore::new()),
        );

        let mut bad = request();
        bad.project_name = "   ".to_string();

        let err = pipeline.pause(&bad).await.unwrap_err();
        assert!(matches!(err, RecallError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn project_name_with_separator_is_rejected() {
        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(FailingFetcher),
            Summarizer::disabled(),
            Arc::new(MemorySessionStore::new()),
        );

        let mut bad = request();
        bad.project_name = "../escape".to_string();

        assert!(pipeline.pause(&bad).await.is_err());
    }

    #[tokio::test]
    async fn max_windows_cap_is_applied() {
        let titles: Vec<String> = (0..12).map(|i| format!("window {}", i)).collect();
        let pipeline = pipeline_with(
            Arc::new(StaticLister(titles)),
            Arc::new(StaticFetcher(Vec::new())),
            Summarizer::disabled(),
            Arc::new(MemorySessionStore::new()),
        );

        let outcome = pipeline.pause(&request()).await.unwrap();
        assert_eq!(outcome.context.active_windows.len(), 5);
    }

    #[tokio::test]
    async fn resume_round_trips_the_snapshot() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(StaticFetcher(Vec::new())),
            Summarizer::disabled(),
            store,
        );

        let outcome = pipeline.pause(&request()).await.unwrap();
        let resumed = pipeline.resume(&outcome.session_id).await.unwrap();
        assert_eq!(resumed, outcome.snapshot);
    }

    #[tokio::test]
    async fn resume_missing_session_is_not_found() {
        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(StaticFetcher(Vec::new())),
            Summarizer::disabled(),
            Arc::new(MemorySessionStore::new()),
        );

        let err = pipeline.resume("ghost-20250101120000").await.unwrap_err();
        assert!(matches!(err, RecallError::NotFound { .. }));
    }

    #[tokio::test]
    async fn taken_ids_get_a_numeric_suffix() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let snapshot = ContextSnapshot::new("Demo", "step", "note");
        store
            .save(&"Demo-20250101120000".to_string(), &snapshot)
            .await
            .unwrap();
        store
            .save(&"Demo-20250101120000-2".to_string(), &snapshot)
            .await
            .unwrap();

        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(StaticFetcher(Vec::new())),
            Summarizer::disabled(),
            store,
        );

        let reserved = pipeline
            .reserve_session_id("Demo-20250101120000".to_string())
            .await
            .unwrap();
        assert_eq!(reserved, "Demo-20250101120000-3");
    }

    #[tokio::test]
    async fn suggestion_capture_uses_its_own_project_name() {
        let backend = ScriptedBackend::new("Reply to the review thread.");
        let pipeline = pipeline_with(
            Arc::new(StaticLister(vec!["Editor".to_string()])),
            Arc::new(StaticFetcher(Vec::new())),
            Summarizer::new(backend.clone()),
            Arc::new(MemorySessionStore::new()),
        );

        let suggestion = pipeline.suggest_next_step("C123").await;
        assert_eq!(suggestion, "Reply to the review thread.");

        let requests = backend.requests.lock().unwrap();
        assert!(requests[0].prompt.contains("Suggestion Task"));
    }

    #[tokio::test]
    async fn list_sessions_reports_stored_snapshots() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let pipeline = pipeline_with(
            Arc::new(StaticLister(Vec::new())),
            Arc::new(StaticFetcher(Vec::new())),
            Summarizer::disabled(),
            store,
        );

        let outcome = pipeline.pause(&request()).await.unwrap();
        let sessions = pipeline.list_sessions().await.unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, outcome.session_id);
        assert_eq!(sessions[0].project_name, "Demo");
    }
}
