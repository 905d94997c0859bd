//! Suggest command: ask the model for the most logical next step

use crate::commands::resolve_channel;
use crate::console::CliConsole;
use colored::Colorize;
use recall_core::config::load_config;
use recall_core::error::RecallResult;
use recall_core::Pipeline;
use std::path::Path;

pub async fn execute(
    config_path: Option<&Path>,
    verbose: bool,
    channel: Option<String>,
) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    let config = load_config(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;

    let channel = resolve_channel(channel, &config)?;

    let spinner = console.spinner("Capturing context and asking the model...");
    let suggestion = pipeline.suggest_next_step(&channel).await;
    spinner.finish_and_clear();

    // Suggestion failures come back as ERROR-prefixed text, not as Err
    if suggestion.starts_with("ERROR") {
        console.error(&suggestion);
        return Ok(());
    }

    console.print_header("Suggested next step");
    println!("{}", suggestion.bright_white());
    Ok(())
}
