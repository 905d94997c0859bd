//! Recall CLI application
//!
//! Pause work with a compact, model-written context snapshot and resume it
//! later. The pause flow captures desktop window titles and recent Slack
//! messages, strips noise and obvious secrets, asks the configured model for
//! a short recall note, and stores the result as a session file on disk.
//!
//! # Usage
//!
//! ```bash
//! recall                        # pause interactively
//! recall pause --suggest        # let the model draft the next step
//! recall resume                 # pick a stored session to restore
//! recall sessions               # list stored sessions
//! recall config init            # write a starter config file
//! ```
//!
//! Set `RUST_LOG=debug` for verbose logging.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use recall_core::error::RecallResult;

#[tokio::main]
async fn main() -> RecallResult<()> {
    // Initialize logging with environment-based filtering
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = args::Cli::parse();
    router::route(cli).await
}
