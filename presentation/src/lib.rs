//! Presentation layer for folio
//!
//! This crate contains the CLI definitions, the HTTP API, the interactive
//! visitor terminal, output formatters and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod server;
pub mod terminal;

// Re-export commonly used types
pub use cli::commands::{Cli, Commands};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{FallbackSpinner, SimpleProgress};
pub use server::{AppState, serve};
pub use terminal::TerminalRepl;
