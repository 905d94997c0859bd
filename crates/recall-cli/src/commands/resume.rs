//! Resume command: restore a stored session snapshot

use crate::commands::{date_of, preview};
use crate::console::CliConsole;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use recall_core::config::load_config;
use recall_core::error::{RecallError, RecallResult};
use recall_core::session::SessionSummary;
use recall_core::{ContextSnapshot, Pipeline};
use std::path::Path;

pub async fn execute(
    config_path: Option<&Path>,
    verbose: bool,
    session_id: Option<String>,
) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    let config = load_config(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;
    console.info("Loading stored sessions");

    let session_id = match session_id {
        Some(id) => id,
        None => match select_session(&pipeline).await? {
            Some(id) => id,
            None => return Ok(()),
        },
    };

    let snapshot = pipeline.resume(&session_id).await?;
    print_snapshot(&session_id, &snapshot);
    Ok(())
}

/// Interactive session picker. Returns `None` when cancelled or when nothing
/// is stored yet.
async fn select_session(pipeline: &Pipeline) -> RecallResult<Option<String>> {
    let sessions = pipeline.list_sessions().await?;
    if sessions.is_empty() {
        println!("{}", "No stored sessions found.".yellow());
        println!("{}", "Run 'recall pause' to create one.".dimmed());
        return Ok(None);
    }

    let mut items: Vec<String> = sessions.iter().map(display_item).collect();
    items.push("Cancel".dimmed().to_string());

    println!();
    println!("{}", "Select a session to resume:".bold());
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .items(&items)
        .default(0)
        .highlight_matches(true)
        .interact_opt()
        .map_err(|e| RecallError::io(format!("Failed to read selection: {}", e)))?;

    match selection {
        Some(index) if index < sessions.len() => Ok(Some(sessions[index].id.clone())),
        _ => {
            println!("{}", "Resume cancelled.".dimmed());
            Ok(None)
        }
    }
}

/// One picker line: session id, date, and a short next-step preview.
fn display_item(session: &SessionSummary) -> String {
    format!(
        "{}  {}  {}",
        session.id.bright_cyan(),
        date_of(&session.timestamp).dimmed(),
        preview(&session.user_next_step, 48)
    )
}

/// Print the stored snapshot in the recall block format.
fn print_snapshot(session_id: &str, snapshot: &ContextSnapshot) {
    println!();
    println!("{}", "--- YOUR CONTEXTUAL RECALL SNAPSHOT ---".bold());
    println!(
        "{} {}",
        "Project:".bold(),
        snapshot.project_name.bright_white()
    );
    println!("{} {}", "Paused:".bold(), date_of(&snapshot.timestamp));
    println!("{} {}", "Session:".bold(), session_id.bright_cyan());
    println!();
    println!(
        "{} {}",
        "🎯 IMMEDIATE NEXT STEP:".yellow().bold(),
        snapshot.user_next_step.bright_white()
    );
    println!();
    println!("{}", snapshot.compacted_summary);
    println!("{}", "---------------------------------------".dimmed());
}
