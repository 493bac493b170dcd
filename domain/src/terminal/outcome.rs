//! Result of running one terminal command

/// What a command produced
///
/// `Clear` carries no text: the caller is expected to drop whatever it has
/// displayed so far. The interpreter owns no display history itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Output(String),
    Clear,
}

impl CommandOutcome {
    pub fn text(&self) -> &str {
        match self {
            CommandOutcome::Output(text) => text,
            CommandOutcome::Clear => "",
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, CommandOutcome::Clear)
    }
}

impl From<String> for CommandOutcome {
    fn from(text: String) -> Self {
        CommandOutcome::Output(text)
    }
}

impl From<&str> for CommandOutcome {
    fn from(text: &str) -> Self {
        CommandOutcome::Output(text.to_string())
    }
}
