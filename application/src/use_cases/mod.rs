//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod respond_to_visitor;
pub mod run_command;
