//! Progress reporting while the chat router walks its fallback chain

use colored::Colorize;
use folio_application::{FallbackProgress, GatewayError, ReplySource};
use folio_domain::Model;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports progress with a spinner that names the model being tried
pub struct FallbackSpinner {
    bar: ProgressBar,
}

impl FallbackSpinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

/// Clears the spinner on paths that never reach a terminal callback
impl Drop for FallbackSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl Default for FallbackSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackProgress for FallbackSpinner {
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize) {
        self.bar.set_prefix(format!("[{}/{}]", index + 1, total));
        self.bar.set_message(format!("Asking {}...", model));
    }

    fn on_attempt_failed(&self, model: &Model, error: &GatewayError) {
        self.bar
            .println(format!("  {} {} ({})", "x".red(), model, error));
    }

    fn on_answered(&self, _source: &ReplySource) {
        self.bar.finish_and_clear();
    }

    fn on_exhausted(&self) {
        self.bar.finish_and_clear();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl FallbackProgress for SimpleProgress {
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize) {
        println!("{} [{}/{}] {}", "->".cyan(), index + 1, total, model);
    }

    fn on_attempt_failed(&self, model: &Model, error: &GatewayError) {
        println!("  {} {} ({})", "x".red(), model, error);
    }

    fn on_answered(&self, source: &ReplySource) {
        match source {
            ReplySource::Canned => println!("  {} canned answer", "v".green()),
            ReplySource::Model(model) => println!("  {} {}", "v".green(), model),
        }
    }
}
