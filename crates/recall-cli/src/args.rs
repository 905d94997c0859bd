//! CLI argument definitions using clap
//!
//! Command layout:
//! - recall                     # Pause flow with interactive prompts (default)
//! - recall pause               # Same, with flags for scripted use
//! - recall resume [<id>]       # Restore a session (picker when id omitted)
//! - recall sessions            # List stored sessions
//! - recall suggest             # Ask the model for a next step, nothing stored
//! - recall config              # Manage configuration files

use clap::{Parser, Subcommand};

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "recall_config.json";

#[derive(Parser)]
#[command(name = "recall")]
#[command(about = "Recall - pause work with a compact context snapshot, resume it later")]
#[command(
    long_about = r#"Recall - pause work with a compact context snapshot, resume it later

USAGE:
  recall                                  # Pause interactively (prompts for anything missing)
  recall pause -P Migration -n "rerun CI" # Pause without prompts
  recall pause --suggest                  # Let the model draft your next step
  recall resume                           # Pick a stored session to restore
  recall resume <session_id>              # Restore a specific session
  recall sessions                         # List stored sessions

UTILITY COMMANDS:
  recall config init                      # Create config file
  recall config show                      # Show current config
  recall suggest                          # Suggest a next step from live context

For detailed help: recall --help"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pause the current task: capture context, compact it, store a session
    Pause {
        /// Project name for the session
        #[arg(long, short = 'P')]
        project: Option<String>,

        /// Slack channel ID to pull recent messages from
        #[arg(long, short = 'C')]
        channel: Option<String>,

        /// Your next step, stored verbatim with the session
        #[arg(long, short = 'n')]
        next_step: Option<String>,

        /// Ask the model to draft the next step before prompting
        #[arg(long)]
        suggest: bool,
    },

    /// Restore a stored session snapshot
    Resume {
        /// Session ID to restore (omit to pick interactively)
        session_id: Option<String>,
    },

    /// List stored sessions, newest first
    Sessions {
        /// Maximum number of sessions to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Suggest a next step from live context without storing anything
    Suggest {
        /// Slack channel ID to pull recent messages from
        #[arg(long, short = 'C')]
        channel: Option<String>,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display current configuration settings
    Show,

    /// Validate configuration file for errors
    Validate,

    /// Create a new configuration file with default settings
    Init {
        /// Overwrite existing file without asking
        #[arg(long)]
        force: bool,
    },
}
