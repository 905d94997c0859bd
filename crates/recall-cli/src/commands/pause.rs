//! Pause command: capture live context, compact it, store a session

use crate::commands::{prompt_line, resolve_channel};
use crate::console::CliConsole;
use colored::Colorize;
use recall_core::config::load_config;
use recall_core::error::RecallResult;
use recall_core::{PauseRequest, Pipeline};
use std::path::Path;

/// Flag values collected from the command line. Anything left `None` is
/// prompted for interactively.
#[derive(Default)]
pub struct PauseArgs {
    pub project: Option<String>,
    pub channel: Option<String>,
    pub next_step: Option<String>,
    pub suggest: bool,
}

/// Run the pause flow end to end.
pub async fn execute(
    config_path: Option<&Path>,
    verbose: bool,
    args: PauseArgs,
) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    let config = load_config(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;

    if !pipeline.summarizer_enabled() {
        console.warn("No LLM configured; the recall note will be a plain fallback.");
    }

    let project = match args.project {
        Some(value) => value,
        None => prompt_line("Project name", "")?,
    };
    let channel = resolve_channel(args.channel, &config)?;
    let next_step = match args.next_step {
        Some(value) => value,
        None => {
            let draft = if args.suggest {
                draft_next_step(&pipeline, &channel, &console).await
            } else {
                String::new()
            };
            prompt_line("Your absolute next step", &draft)?
        }
    };

    let spinner = console.spinner("Capturing context and compacting...");
    let outcome = pipeline
        .pause(&PauseRequest {
            project_name: project,
            channel_id: channel,
            next_step,
        })
        .await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    console.success("Task paused successfully.");
    println!();
    println!(
        "  {} {}",
        "Session ID:".bold(),
        outcome.session_id.bright_cyan()
    );
    println!(
        "  {}",
        format!(
            "captured {} window title(s) and {} message(s)",
            outcome.context.active_windows.len(),
            outcome.context.slack_messages.len()
        )
        .dimmed()
    );
    println!();
    println!("{}", "Context summary for resume:".bold());
    println!("{}", outcome.snapshot.compacted_summary);
    Ok(())
}

/// Ask the model for a next-step draft. Failures degrade to an empty draft
/// so the prompt still appears.
async fn draft_next_step(pipeline: &Pipeline, channel: &str, console: &CliConsole) -> String {
    let spinner = console.spinner("Drafting a next step from live context...");
    let suggestion = pipeline.suggest_next_step(channel).await;
    spinner.finish_and_clear();

    if suggestion.starts_with("ERROR") {
        console.warn(&suggestion);
        return String::new();
    }
    console.info("Suggestion drafted; edit it or accept as-is.");
    suggestion
}
