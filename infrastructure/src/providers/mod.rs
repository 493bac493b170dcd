//! Completion provider adapters
//!
//! Implementations of the [`CompletionGateway`](folio_application::CompletionGateway)
//! port.

pub mod openrouter;
