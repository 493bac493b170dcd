//! Interactive visitor terminal
//!
//! A reedline line editor over the command interpreter, with the boot
//! sequence replayed on start and Tab completion of command names.

pub mod completer;
pub mod prompt;
pub mod repl;
pub mod typing;

pub use completer::CommandCompleter;
pub use prompt::VisitorPrompt;
pub use repl::TerminalRepl;
pub use typing::TypingEffect;
