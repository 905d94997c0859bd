//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::pause::PauseArgs;
use recall_core::error::RecallResult;
use std::path::PathBuf;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> RecallResult<()> {
    let config_path = resolve_config_path(&cli.config_file);
    tracing::debug!("Resolved configuration path: {:?}", config_path);

    match cli.command {
        Some(Commands::Pause {
            project,
            channel,
            next_step,
            suggest,
        }) => {
            commands::pause::execute(
                config_path.as_deref(),
                cli.verbose,
                PauseArgs {
                    project,
                    channel,
                    next_step,
                    suggest,
                },
            )
            .await
        }
        Some(Commands::Resume { session_id }) => {
            commands::resume::execute(config_path.as_deref(), cli.verbose, session_id).await
        }
        Some(Commands::Sessions { limit }) => {
            commands::sessions::execute(config_path.as_deref(), cli.verbose, limit).await
        }
        Some(Commands::Suggest { channel }) => {
            commands::suggest::execute(config_path.as_deref(), cli.verbose, channel).await
        }
        Some(Commands::Config { action }) => {
            commands::config::execute(&cli.config_file, cli.verbose, action).await
        }
        // Bare `recall` runs the pause flow with interactive prompts
        None => {
            commands::pause::execute(config_path.as_deref(), cli.verbose, PauseArgs::default())
                .await
        }
    }
}

/// Pick the configuration file to load: the given path when it exists, then
/// the per-user fallback at ~/.recall/config.json, else none (defaults plus
/// environment overrides).
fn resolve_config_path(config_file: &str) -> Option<PathBuf> {
    let explicit = PathBuf::from(config_file);
    if explicit.exists() {
        return Some(explicit);
    }
    dirs::home_dir()
        .map(|home| home.join(".recall").join("config.json"))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_path_wins_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recall_config.json");
        std::fs::write(&path, "{}").unwrap();

        let resolved = resolve_config_path(path.to_str().unwrap());
        assert_eq!(resolved, Some(path));
    }
}
