//! Layered configuration loading: file first, environment on top

use crate::config::env_loader::apply_env_overrides;
use crate::config::file_loader::load_from_file;
use crate::config::model::Config;
use crate::error::RecallResult;
use std::path::Path;
use tracing::debug;

/// Load the effective configuration.
///
/// Reads the config file when a path is given (missing file falls back to
/// defaults), applies environment overrides, and validates the result.
pub fn load_config(path: Option<&Path>) -> RecallResult<Config> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            load_from_file(path)?
        }
        None => Config::default(),
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_values_survive_when_no_env_is_set() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("recall.json");
        fs::write(
            &config_path,
            r#"{"capture": {"max_windows": 2, "message_count": 4}}"#,
        )
        .unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        assert_eq!(config.capture.max_windows, 2);
        assert_eq!(config.capture.message_count, 4);
    }

    #[test]
    fn no_path_yields_validated_defaults() {
        let config = load_config(None).unwrap();
        assert!(config.validate().is_ok());
    }
}
