//! Context capture: collaborators and sanitization
//!
//! Capture pulls two things from the outside world: the titles of the
//! user's open desktop windows and the most recent messages of a Slack
//! channel. Both collaborators sit behind traits so the pipeline can be
//! exercised without a desktop or a network. Raw captured data passes
//! through the sanitizer before any of it reaches a language model.

mod sanitize;
mod slack;
mod types;
mod windows;

pub use sanitize::SanitizeRules;
pub use slack::{MessageFetcher, SlackFetcher};
pub use types::{ChannelMessage, RawContext, RawMessage};
pub use windows::{DesktopWindowLister, WindowLister};
