//! Domain layer for folio
//!
//! This crate contains the portfolio's static content, the terminal command
//! vocabulary and the value objects shared by the chat router.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Terminal
//!
//! A closed vocabulary of single-word commands (`whois`, `experiences`, ...)
//! rendered as plain text blocks. Unknown input is a normal outcome, not an
//! error.
//!
//! ## Chat
//!
//! Visitor messages are answered from a canned question table first, then by
//! a prioritized chain of hosted [`Model`]s prompted with the assistant
//! persona.

pub mod content;
pub mod core;
pub mod prompt;
pub mod terminal;

// Re-export commonly used types
pub use content::{
    canned::{CHAT_GREETING, CannedAnswer, canned_answers, find_canned_answer},
    experience::{Experience, ExperienceKind, experiences},
    profile,
    project::{Project, ProjectKind, projects},
    SkillTag,
};
pub use crate::core::{message::VisitorMessage, model::Model, string::truncate};
pub use prompt::{PERSONA_PROMPT, PromptTemplate};
pub use terminal::{
    command::{Command, CommandLine, UnknownCommand},
    outcome::CommandOutcome,
};
