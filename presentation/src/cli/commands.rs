//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for folio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Personal portfolio backend: chat assistant and visitor terminal")]
#[command(long_about = r#"
Folio serves the portfolio's chat assistant and visitor terminal.

The chat assistant answers a fixed set of questions directly and forwards
anything else to a chain of hosted models, stopping at the first answer.

Configuration files are loaded from (in priority order):
1. FOLIO_* environment variables   e.g. FOLIO_SERVER__BIND=0.0.0.0:8080
2. --config <path>                 Explicit config file
3. ./folio.toml                    Project-level config
4. ~/.config/folio/config.toml     Global config

Example:
  folio serve --bind 0.0.0.0:3000
  folio terminal
  folio ask "What's your tech stack?"
  folio run experiences
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Serve the chat and terminal HTTP API
    Serve {
        /// Listen address, overrides `server.bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Start the interactive visitor terminal (default)
    Terminal {
        /// Skip the boot sequence and banner
        #[arg(long)]
        no_boot: bool,
    },

    /// Ask the chat assistant one question
    Ask {
        /// The message (words are joined with spaces)
        #[arg(required = true, value_name = "MESSAGE")]
        message: Vec<String>,

        /// Suppress progress indicators
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run one terminal command and print its output
    Run {
        /// The command line, e.g. `experiences`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "LINE")]
        line: Vec<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Terminal { no_boot: false }
    }
}
