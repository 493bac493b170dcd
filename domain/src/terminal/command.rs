//! Command vocabulary and line parsing

use thiserror::Error;

/// A recognized terminal command
///
/// The vocabulary is closed. [`Command::ALL`] fixes the enumeration order
/// used by `help` and by tab completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Whois,
    Experiences,
    Projects,
    Social,
    Banner,
    Clear,
    Help,
    Su,
    Cv,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Whois,
        Command::Experiences,
        Command::Projects,
        Command::Social,
        Command::Banner,
        Command::Clear,
        Command::Help,
        Command::Su,
        Command::Cv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Whois => "whois",
            Command::Experiences => "experiences",
            Command::Projects => "projects",
            Command::Social => "social",
            Command::Banner => "banner",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Su => "su",
            Command::Cv => "cv",
        }
    }

    /// Every command whose name starts with `prefix`, in vocabulary order
    pub fn matching(prefix: &str) -> impl Iterator<Item = Command> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |cmd| cmd.as_str().starts_with(prefix))
    }

    /// Tab completion: the first command starting with `prefix`
    ///
    /// A blank prefix completes to nothing.
    pub fn complete(prefix: &str) -> Option<Command> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return None;
        }
        Self::matching(prefix).next()
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Command {
    type Err = UnknownCommand;

    /// Case-sensitive: `Help` is not `help`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// One parsed line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// First whitespace-separated token, empty for a blank line
    pub name: String,
    /// Remaining tokens; accepted but not interpreted by any command
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn parse(input: &str) -> Self {
        let mut tokens = input.split_whitespace().map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        Self {
            name,
            args: tokens.collect(),
        }
    }

    /// Resolve the command name against the vocabulary
    pub fn command(&self) -> Result<Command, UnknownCommand> {
        self.name.parse()
    }
}
