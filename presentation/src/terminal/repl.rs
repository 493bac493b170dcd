//! REPL (Read-Eval-Print Loop) for the visitor terminal

use super::{CommandCompleter, TypingEffect, VisitorPrompt};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use folio_application::RunCommandUseCase;
use folio_domain::terminal::screens::{BANNER, BOOT_SEQUENCE};
use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::time::Duration;
use tracing::{debug, warn};

const COMPLETION_MENU: &str = "completion_menu";
const HISTORY_CAPACITY: usize = 500;
/// Pause between the boot log and the banner
const BOOT_PAUSE: Duration = Duration::from_secs(1);

/// Interactive visitor terminal
pub struct TerminalRepl {
    use_case: RunCommandUseCase,
    config: ReplConfig,
}

impl TerminalRepl {
    pub fn new(use_case: RunCommandUseCase) -> Self {
        Self {
            use_case,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.build_editor();
        let prompt = VisitorPrompt;

        if self.config.show_boot {
            self.boot(&mut editor).await?;
        } else {
            println!("{}", BANNER);
        }

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    let outcome = self.use_case.execute(&line).await;
                    if outcome.is_clear() {
                        editor.clear_screen()?;
                        continue;
                    }

                    println!("{}", ConsoleFormatter::format_outcome(&outcome));
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn build_editor(&self) -> Reedline {
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut editor = Reedline::create()
            .with_completer(Box::new(CommandCompleter))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => {
                    debug!("History file: {}", path.display());
                    editor = editor.with_history(Box::new(history));
                }
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        editor
    }

    /// Replay the boot log, then clear and show the banner
    async fn boot(&self, editor: &mut Reedline) -> std::io::Result<()> {
        let typing = TypingEffect::new(self.config.typing_delay);
        let mut stdout = std::io::stdout();

        typing.type_out(BOOT_SEQUENCE, &mut stdout).await?;
        if !typing.is_instant() {
            tokio::time::sleep(BOOT_PAUSE).await;
        }

        editor.clear_screen()?;
        typing.type_out(BANNER, &mut stdout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_editor_with_completion_menu() {
        let history = std::env::temp_dir().join("folio-repl-test").join("history.txt");
        let repl = TerminalRepl::new(RunCommandUseCase::new()).with_config(ReplConfig {
            show_boot: false,
            typing_delay: Duration::ZERO,
            history_file: Some(history),
        });
        let _editor = repl.build_editor();
    }
}
