//! Sessions command: list stored sessions

use crate::commands::{date_of, preview};
use crate::console::CliConsole;
use colored::Colorize;
use recall_core::config::load_config;
use recall_core::error::RecallResult;
use recall_core::Pipeline;
use std::path::Path;

pub async fn execute(config_path: Option<&Path>, verbose: bool, limit: usize) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    let config = load_config(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;

    let mut sessions = pipeline.list_sessions().await?;
    let total = sessions.len();
    sessions.truncate(limit);

    if sessions.is_empty() {
        println!("{}", "No stored sessions.".yellow());
        println!("{}", "Run 'recall pause' to create one.".dimmed());
        return Ok(());
    }

    console.print_header("Sessions");
    println!(
        "{}",
        format!("Showing {} of {} session(s)", sessions.len(), total).dimmed()
    );
    println!();
    for session in &sessions {
        println!(
            "  {}  {}",
            session.id.bright_cyan(),
            session.project_name.bright_white()
        );
        println!(
            "     {}  {}",
            date_of(&session.timestamp).dimmed(),
            preview(&session.user_next_step, 60).italic().dimmed()
        );
    }
    println!();
    println!(
        "{}",
        "Use 'recall resume <session_id>' to restore one.".dimmed()
    );
    Ok(())
}
