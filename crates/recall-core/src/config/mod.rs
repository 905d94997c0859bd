//! Configuration loading and data models
//!
//! Configuration comes from an optional config file (JSON, TOML, or YAML,
//! decided by extension) with environment-variable overrides applied on
//! top. Everything the components need (backend selection, credentials,
//! capture caps, sanitize keyword lists, the session directory) lives in
//! one explicit [`Config`] value that gets passed down; there is no global
//! state.

mod env_loader;
mod file_loader;
mod loader;
mod model;

pub use env_loader::apply_env_overrides;
pub use file_loader::load_from_file;
pub use loader::load_config;
pub use model::{CaptureSettings, Config, LlmSettings, ModelSettings, SessionSettings, SlackSettings};
