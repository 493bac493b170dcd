//! Prompt domain
//!
//! The assistant persona sent as the system turn of every completion request.

mod template;

pub use template::{PERSONA_PROMPT, PromptTemplate};
