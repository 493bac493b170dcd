//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application settings
//! at the composition root.

mod output;
mod provider;
mod router;
mod server;
mod terminal;

pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use router::FileRouterConfig;
pub use server::FileServerConfig;
pub use terminal::FileTerminalConfig;

use folio_application::RouterSettings;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("router.models cannot be empty")]
    EmptyModelList,

    #[error("router.models[{0}]: model name cannot be empty")]
    EmptyModelName(usize),

    #[error("server.bind: '{0}' is not a valid socket address")]
    InvalidBindAddress(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Fallback chain
    pub router: FileRouterConfig,
    /// Terminal REPL settings
    pub terminal: FileTerminalConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.router.models.is_empty() {
            return Err(ConfigValidationError::EmptyModelList);
        }

        for (index, model) in self.router.models.iter().enumerate() {
            if model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName(index));
            }
        }

        self.bind_address()?;

        Ok(())
    }

    /// Parsed `server.bind`
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigValidationError::InvalidBindAddress(self.server.bind.clone()))
    }

    /// Fallback chain settings for the chat router
    pub fn router_settings(&self) -> RouterSettings {
        RouterSettings::default()
            .with_models(self.router.parse_models())
            .with_max_tokens(self.provider.max_tokens)
            .with_temperature(self.provider.temperature)
            .with_attempt_timeout(Some(Duration::from_secs(self.provider.timeout_seconds)))
    }
}
