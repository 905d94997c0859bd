//! Desktop window capture
//!
//! Lists the titles of currently open windows by shelling out to the
//! platform's own tooling. Titles are normalized before they leave this
//! module: trimmed, deduplicated in order, stripped of shell surfaces
//! like the taskbar, and capped at the configured maximum.

use crate::error::{RecallError, RecallResult};
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::process::Command;

/// Exact window names belonging to the desktop shell itself.
const SHELL_WINDOWS: [&str; 10] = [
    "Program Manager",
    "Desktop",
    "Taskbar",
    "Settings",
    "Cortana",
    "Search",
    "Start",
    "Running applications",
    "Windows Security",
    "Calculator",
];

/// Titles shorter than this are discarded as noise.
const MIN_TITLE_LEN: usize = 3;

#[cfg(target_os = "macos")]
const MACOS_SCRIPT: &str = r#"tell application "System Events"
    set out to ""
    repeat with proc in (every process whose visible is true)
        repeat with win in (every window of proc)
            set out to out & (name of win) & linefeed
        end repeat
    end repeat
    out
end tell"#;

#[cfg(target_os = "windows")]
const POWERSHELL_SCRIPT: &str =
    "Get-Process | Where-Object { $_.MainWindowTitle } | ForEach-Object { $_.MainWindowTitle }";

/// Source of open window titles.
#[async_trait]
pub trait WindowLister: Send + Sync {
    /// Return up to `max` normalized window titles, most relevant first.
    async fn active_windows(&self, max: usize) -> RecallResult<Vec<String>>;
}

/// Window lister backed by the host desktop environment.
#[derive(Debug, Default, Clone)]
pub struct DesktopWindowLister;

impl DesktopWindowLister {
    pub fn new() -> Self {
        Self
    }

    async fn run_capture(program: &str, args: &[&str]) -> RecallResult<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                RecallError::collaborator(
                    "window lister",
                    format!("failed to run {}: {}", program, e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecallError::collaborator(
                "window lister",
                format!("{} exited with {}: {}", program, output.status, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    #[cfg(target_os = "linux")]
    async fn capture_titles() -> RecallResult<Vec<String>> {
        let raw = Self::run_capture("wmctrl", &["-l"]).await?;
        Ok(parse_wmctrl_output(&raw))
    }

    #[cfg(target_os = "macos")]
    async fn capture_titles() -> RecallResult<Vec<String>> {
        let raw = Self::run_capture("osascript", &["-e", MACOS_SCRIPT]).await?;
        Ok(parse_title_lines(&raw))
    }

    #[cfg(target_os = "windows")]
    async fn capture_titles() -> RecallResult<Vec<String>> {
        let raw =
            Self::run_capture("powershell", &["-NoProfile", "-Command", POWERSHELL_SCRIPT]).await?;
        Ok(parse_title_lines(&raw))
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    async fn capture_titles() -> RecallResult<Vec<String>> {
        Err(RecallError::collaborator(
            "window lister",
            "no window capture available on this platform",
        ))
    }
}

#[async_trait]
impl WindowLister for DesktopWindowLister {
    async fn active_windows(&self, max: usize) -> RecallResult<Vec<String>> {
        let titles = Self::capture_titles().await?;
        Ok(normalize_titles(titles, max))
    }
}

/// Parse `wmctrl -l` output: window id, desktop number, host, then title.
#[cfg(any(target_os = "linux", test))]
fn parse_wmctrl_output(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            let mut rest = line.trim_start();
            for _ in 0..3 {
                let split = rest.find(char::is_whitespace)?;
                rest = rest[split..].trim_start();
            }
            let title = rest.trim();
            (!title.is_empty()).then(|| title.to_string())
        })
        .collect()
}

/// Parse one-title-per-line output from osascript or powershell.
#[cfg(any(target_os = "macos", target_os = "windows", test))]
fn parse_title_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim, drop shell surfaces and tiny titles, dedup in order, cap at `max`.
fn normalize_titles(titles: Vec<String>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .map(|title| title.trim().to_string())
        .filter(|title| title.len() >= MIN_TITLE_LEN)
        .filter(|title| !SHELL_WINDOWS.contains(&title.as_str()))
        .filter(|title| seen.insert(title.clone()))
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wmctrl_lines_keep_the_full_title() {
        let raw = "0x03400003  0 devbox main.rs - recall - VS Code\n\
                   0x03600002 -1 devbox Desktop\n\
                   0x04a00001  1 devbox Firefox  -  api docs\n";

        let titles = parse_wmctrl_output(raw);
        assert_eq!(
            titles,
            vec![
                "main.rs - recall - VS Code".to_string(),
                "Desktop".to_string(),
                "Firefox  -  api docs".to_string(),
            ]
        );
    }

    #[test]
    fn malformed_wmctrl_lines_are_skipped() {
        let raw = "garbage\n0x01 0 host Editor window\n";
        assert_eq!(parse_wmctrl_output(raw), vec!["Editor window".to_string()]);
    }

    #[test]
    fn title_lines_drop_blanks() {
        let raw = "Terminal\n\n  Slack - #general  \n";
        assert_eq!(
            parse_title_lines(raw),
            vec!["Terminal".to_string(), "Slack - #general".to_string()]
        );
    }

    #[test]
    fn normalize_drops_shell_windows_and_dedups_in_order() {
        let titles = vec![
            "Program Manager".to_string(),
            "Editor".to_string(),
            "Taskbar".to_string(),
            "Editor".to_string(),
            "ok".to_string(),
            "Browser".to_string(),
        ];

        let cleaned = normalize_titles(titles, 10);
        assert_eq!(cleaned, vec!["Editor".to_string(), "Browser".to_string()]);
    }

    #[test]
    fn normalize_caps_at_max() {
        let titles = (0..8).map(|i| format!("window {}", i)).collect();
        let cleaned = normalize_titles(titles, 3);
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned[0], "window 0");
    }
}
