//! Application-level configuration.
//!
//! - [`RouterSettings`]: fallback chain, generation parameters and attempt timeout

pub mod router_settings;

pub use router_settings::RouterSettings;
