//! Tab completion of command names

use folio_domain::Command;
use reedline::{Completer, Span, Suggestion};

/// Completes the command name under the cursor to the first vocabulary
/// entry starting with it. Arguments are never completed.
#[derive(Debug, Clone, Default)]
pub struct CommandCompleter;

impl Completer for CommandCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let before = &line[..pos.min(line.len())];
        let start = before.len() - before.trim_start().len();
        let word = &before[start..];

        if word.contains(char::is_whitespace) {
            return Vec::new();
        }

        Command::complete(word)
            .map(|command| Suggestion {
                value: command.as_str().to_string(),
                span: Span::new(start, before.len()),
                append_whitespace: true,
                ..Default::default()
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(line: &str) -> Vec<String> {
        CommandCompleter
            .complete(line, line.len())
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    #[test]
    fn test_first_match_in_vocabulary_order() {
        assert_eq!(complete("e"), vec!["experiences"]);
        assert_eq!(complete("s"), vec!["social"]);
        assert_eq!(complete("c"), vec!["clear"]);
        assert_eq!(complete("cv"), vec!["cv"]);
    }

    #[test]
    fn test_no_match_or_blank() {
        assert!(complete("x").is_empty());
        assert!(complete("").is_empty());
        assert!(complete("   ").is_empty());
    }

    #[test]
    fn test_arguments_are_not_completed() {
        assert!(complete("help e").is_empty());
    }

    #[test]
    fn test_span_skips_leading_whitespace() {
        let suggestions = CommandCompleter.complete("  pro", 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "projects");
        assert_eq!(suggestions[0].span, Span::new(2, 5));
    }
}
