//! Configuration management commands

use crate::args::ConfigAction;
use crate::console::CliConsole;
use colored::Colorize;
use recall_core::config::load_config;
use recall_core::error::{RecallError, RecallResult};
use recall_core::Config;
use std::path::Path;

/// Dispatch a config subcommand.
pub async fn execute(config_file: &str, verbose: bool, action: ConfigAction) -> RecallResult<()> {
    match action {
        ConfigAction::Show => show(config_file, verbose).await,
        ConfigAction::Validate => validate(config_file, verbose).await,
        ConfigAction::Init { force } => init(config_file, force, verbose).await,
    }
}

async fn show(config_file: &str, verbose: bool) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    console.print_header("Configuration");

    let path = Path::new(config_file);
    if !path.exists() {
        console.warn(&format!(
            "Configuration file '{}' not found; showing defaults plus environment overrides.",
            config_file
        ));
    }

    let config = load_config(path.exists().then_some(path))?;
    print_config(&config);
    Ok(())
}

async fn validate(config_file: &str, verbose: bool) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    let path = Path::new(config_file);
    if !path.exists() {
        console.error(&format!("Configuration file '{}' not found", config_file));
        return Err(RecallError::config(format!(
            "configuration file '{}' not found",
            config_file
        )));
    }

    match load_config(Some(path)) {
        Ok(config) => {
            console.success(&format!("Configuration file '{}' is valid", config_file));
            console.info(&format!(
                "Backend: {} ({})",
                config.llm.backend,
                config.llm.active().model
            ));
            Ok(())
        }
        Err(e) => {
            console.error(&format!(
                "Configuration file '{}' is invalid: {}",
                config_file, e
            ));
            Err(e)
        }
    }
}

async fn init(config_file: &str, force: bool, verbose: bool) -> RecallResult<()> {
    let console = CliConsole::new(verbose);
    let path = Path::new(config_file);
    if path.exists() && !force {
        console.error(&format!(
            "Configuration file '{}' already exists",
            config_file
        ));
        console.info("Use --force to overwrite");
        return Err(RecallError::config(format!(
            "configuration file '{}' already exists",
            config_file
        )));
    }

    let template = serde_json::to_string_pretty(&Config::default())?;
    tokio::fs::write(path, template).await.map_err(|e| {
        RecallError::io_with_path(
            format!("Failed to write configuration file: {}", e),
            config_file,
        )
    })?;

    console.success(&format!("Created configuration file: {}", config_file));
    console.info(
        "Fill in llm.gemini.api_key and slack.bot_token, or export GEMINI_API_KEY / SLACK_BOT_TOKEN",
    );
    Ok(())
}

fn print_config(config: &Config) {
    println!("  {} {}", "Backend:".bold(), config.llm.backend);
    println!("  {} {}", "Model:".bold(), config.llm.active().model);
    println!(
        "  {} {}",
        "Gemini API key:".bold(),
        mask(config.llm.gemini.api_key.as_deref())
    );
    println!(
        "  {} {}",
        "Ollama base URL:".bold(),
        config.llm.ollama.base_url.as_deref().unwrap_or("default")
    );
    println!(
        "  {} {}",
        "Slack bot token:".bold(),
        mask(config.slack.bot_token.as_deref())
    );
    println!(
        "  {} {}",
        "Default channel:".bold(),
        config.slack.default_channel.as_deref().unwrap_or("-")
    );
    println!(
        "  {} {}",
        "Session directory:".bold(),
        config.sessions.dir.display()
    );
    println!(
        "  {} {} window titles, {} messages",
        "Capture limits:".bold(),
        config.capture.max_windows,
        config.capture.message_count
    );
}

/// Mask a secret: report presence and length only.
fn mask(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("set ({} chars)", v.len()),
        _ => "not set".to_string(),
    }
}
