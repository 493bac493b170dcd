//! Console output formatter for chat replies and terminal output

use colored::Colorize;
use folio_application::{AttemptRecord, ReplySource, RespondError, VisitorReply};
use folio_domain::CommandOutcome;
use folio_domain::terminal::render::BULLET;

/// Formats replies and command output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a chat reply with a dimmed source line
    pub fn format_reply(reply: &VisitorReply) -> String {
        let source = match &reply.source {
            ReplySource::Canned => "canned answer".to_string(),
            ReplySource::Model(model) => {
                format!("{} after {} attempt(s)", model, reply.attempts.len())
            }
        };

        format!(
            "{} {}\n\n{}\n",
            "Karen:".cyan().bold(),
            reply.text,
            format!("-- {}", source).dimmed()
        )
    }

    /// Format a router failure, including per-model detail when available
    pub fn format_error(err: &RespondError) -> String {
        let mut output = format!("{} {}\n", "Error:".red().bold(), err);

        if let RespondError::AllProvidersExhausted { attempts } = err {
            output.push_str(&Self::format_attempts(attempts));
        }

        output
    }

    /// One line per attempt, in chain order
    pub fn format_attempts(attempts: &[AttemptRecord]) -> String {
        attempts
            .iter()
            .map(|attempt| match &attempt.error {
                None => format!("  {} {}\n", "v".green(), attempt.model),
                Some(e) => format!("  {} {}: {}\n", "x".red(), attempt.model, e),
            })
            .collect()
    }

    /// Terminal output with record titles highlighted
    pub fn format_outcome(outcome: &CommandOutcome) -> String {
        outcome
            .text()
            .lines()
            .map(|line| {
                if line.starts_with(BULLET) {
                    line.cyan().bold().to_string()
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
