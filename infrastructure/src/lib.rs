//! Infrastructure layer for folio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileProviderConfig,
    FileRouterConfig, FileServerConfig, FileTerminalConfig,
};
pub use providers::openrouter::{OpenRouterGateway, extract_content};
