//! Terminal configuration from TOML (`[terminal]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw terminal REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTerminalConfig {
    /// Pause before `experiences` / `projects` output (0 = none)
    pub fetch_delay_ms: u64,
    /// Per-character delay of the boot typing effect (0 = print at once)
    pub typing_delay_ms: u64,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileTerminalConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 0,
            typing_delay_ms: 5,
            history_file: None,
        }
    }
}

impl FileTerminalConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}
