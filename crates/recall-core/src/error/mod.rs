//! Error types for recall
//!
//! A single error enum shared across the workspace. Failures below the
//! pipeline (window lister, chat fetcher, model backend) are normally
//! converted into degraded data before they reach a caller; the variants
//! here cover the cases that are allowed to surface: configuration and
//! validation problems, store I/O, and corrupt session files.

mod constructors;
mod conversions;
mod types;

pub use types::{RecallError, RecallResult};
