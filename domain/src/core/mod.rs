//! Core domain concepts shared across subdomains.
//!
//! - [`model::Model`]: hosted completion models tried by the chat router
//! - [`message::VisitorMessage`]: a validated visitor chat message

pub mod message;
pub mod model;
pub mod string;
