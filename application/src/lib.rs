//! Application layer for folio
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RouterSettings;
pub use ports::{
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{FallbackProgress, NoProgress},
};
pub use use_cases::respond_to_visitor::{
    AttemptRecord, ReplySource, RespondError, RespondToVisitorUseCase, VisitorReply,
};
pub use use_cases::run_command::RunCommandUseCase;
