//! Run Command use case
//!
//! Interprets one line typed into the visitor terminal. Every input yields an
//! outcome; unknown commands produce the "not found" text instead of an error.

use folio_domain::terminal::render::{
    FETCHING_EXPERIENCES, FETCHING_PROJECTS, render_experiences, render_projects,
};
use folio_domain::terminal::screens::{BANNER, NOT_FOUND, SU_MESSAGE, help_text};
use folio_domain::{Command, CommandLine, CommandOutcome, experiences, profile, projects};
use std::time::Duration;
use tracing::debug;

/// Use case for the terminal command interpreter
#[derive(Debug, Clone, Default)]
pub struct RunCommandUseCase {
    /// Cosmetic pause before listing experiences or projects
    fetch_delay: Duration,
}

impl RunCommandUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }

    /// Execute one raw input line
    pub async fn execute(&self, input: &str) -> CommandOutcome {
        let line = CommandLine::parse(input);

        let command = match line.command() {
            Ok(command) => command,
            Err(unknown) => {
                debug!("{}", unknown);
                return CommandOutcome::from(NOT_FOUND);
            }
        };

        if !line.args.is_empty() {
            debug!("Ignoring arguments for {}: {:?}", command, line.args);
        }

        match command {
            Command::Whois => profile::WHOIS.into(),
            Command::Experiences => {
                self.simulate_fetch().await;
                format!("{}{}", FETCHING_EXPERIENCES, render_experiences(experiences())).into()
            }
            Command::Projects => {
                self.simulate_fetch().await;
                format!("{}{}", FETCHING_PROJECTS, render_projects(projects())).into()
            }
            Command::Social => profile::social_links().into(),
            Command::Banner => BANNER.into(),
            Command::Clear => CommandOutcome::Clear,
            Command::Help => help_text().into(),
            Command::Su => SU_MESSAGE.into(),
            Command::Cv => profile::CV_URL.into(),
        }
    }

    async fn simulate_fetch(&self) {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let outcome = RunCommandUseCase::new().execute("help").await;
        assert_eq!(
            outcome.text(),
            "Available commands: whois, experiences, projects, social, banner, clear, help, su, cv"
        );
    }

    #[tokio::test]
    async fn test_unknown_command_is_not_an_error() {
        let uc = RunCommandUseCase::new();
        for input in ["ls", "HELP", "", "   ", "sudo su"] {
            assert_eq!(uc.execute(input).await, CommandOutcome::from(NOT_FOUND));
        }
    }

    #[tokio::test]
    async fn test_clear_signals_the_caller() {
        let outcome = RunCommandUseCase::new().execute("  clear  ").await;
        assert!(outcome.is_clear());
        assert_eq!(outcome.text(), "");
    }

    #[tokio::test]
    async fn test_trailing_arguments_are_ignored() {
        let uc = RunCommandUseCase::new();
        assert_eq!(uc.execute("social --verbose").await, uc.execute("social").await);
        assert_eq!(
            uc.execute("social").await.text(),
            "LinkedIn: https://linkedin.com/in/dhanuwardhana\nGitHub: https://github.com/Dhanuwrdhn"
        );
    }

    #[tokio::test]
    async fn test_experiences_lists_every_record() {
        let outcome = RunCommandUseCase::new().execute("experiences").await;
        let text = outcome.text();

        assert!(text.starts_with("Fetching experiences...\n\n[ • ] "));
        for exp in experiences() {
            assert!(text.contains(&format!("[ • ] {} at {}", exp.title, exp.organization)));
            assert!(text.contains(&format!("Type: {}", exp.kind)));
        }
    }

    #[tokio::test]
    async fn test_projects_lists_every_record() {
        let outcome = RunCommandUseCase::new().execute("projects").await;
        let text = outcome.text();

        assert!(text.starts_with("Fetching projects...\n"));
        assert_eq!(text.matches("[ • ]").count(), projects().len());
    }

    #[tokio::test]
    async fn test_fixed_texts() {
        let uc = RunCommandUseCase::new();
        assert_eq!(uc.execute("banner").await.text(), BANNER);
        assert_eq!(uc.execute("su").await.text(), SU_MESSAGE);
        assert_eq!(uc.execute("whois").await.text(), profile::WHOIS);
        assert!(uc.execute("cv").await.text().starts_with("https://drive.google.com/"));
    }

    #[tokio::test]
    async fn test_fetch_delay_only_applies_to_listings() {
        let uc = RunCommandUseCase::new().with_fetch_delay(Duration::from_millis(50));

        let start = Instant::now();
        uc.execute("projects").await;
        assert!(start.elapsed() >= Duration::from_millis(50));

        let start = Instant::now();
        uc.execute("help").await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_default_has_no_delay() {
        let uc = RunCommandUseCase::new();
        assert!(uc.fetch_delay().is_zero());

        let start = Instant::now();
        uc.execute("experiences").await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
