//! Progress reporting for the chat fallback chain

pub mod reporter;
