//! Presentation-level configuration
//!
//! Settings for the interactive terminal.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Terminal REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Replay the boot sequence and banner on start
    pub show_boot: bool,
    /// Per-character delay of the typing effect
    pub typing_delay: Duration,
    /// Path to history file; `None` uses the platform data dir
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_boot: true,
            typing_delay: Duration::from_millis(5),
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Resolved history path. A leading `~/` is expanded.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|p| p.join("folio").join("history.txt")),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
