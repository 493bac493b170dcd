//! Progress notification port
//!
//! Defines the interface for reporting progress while the chat router walks
//! its fallback chain.

use crate::ports::completion_gateway::GatewayError;
use crate::use_cases::respond_to_visitor::ReplySource;
use folio_domain::Model;

/// Callback for progress updates during a routed chat reply
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, ...)
pub trait FallbackProgress: Send + Sync {
    /// Called before each model attempt (`index` is zero-based)
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize);

    /// Called when an attempt fails and the chain advances
    fn on_attempt_failed(&self, model: &Model, error: &GatewayError);

    /// Called once a reply is available
    fn on_answered(&self, source: &ReplySource);

    /// Called when every model in the chain has failed
    fn on_exhausted(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FallbackProgress for NoProgress {
    fn on_attempt_start(&self, _model: &Model, _index: usize, _total: usize) {}
    fn on_attempt_failed(&self, _model: &Model, _error: &GatewayError) {}
    fn on_answered(&self, _source: &ReplySource) {}
}
