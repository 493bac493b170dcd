//! CLI entrypoint for folio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use folio_application::{
    CompletionGateway, FallbackProgress, NoProgress, RespondToVisitorUseCase, RunCommandUseCase,
};
use folio_infrastructure::{ConfigLoader, FileConfig, OpenRouterGateway};
use folio_presentation::{
    AppState, Cli, Commands, ConsoleFormatter, FallbackSpinner, ReplConfig, SimpleProgress,
    TerminalRepl,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Subscriber, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        if !cli.no_config {
            ConfigLoader::print_config_sources(cli.config.as_ref());
            println!();
        }
        println!("{}", toml::to_string_pretty(&redacted(&config))?);
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    let command = cli.command.unwrap_or_default();
    init_tracing(cli.verbose, &command);

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting folio {}", env!("CARGO_PKG_VERSION"));

    let run_command =
        RunCommandUseCase::new().with_fetch_delay(config.terminal.fetch_delay());

    match command {
        Commands::Serve { bind } => {
            let addr: SocketAddr = match bind {
                Some(bind) => bind
                    .parse()
                    .with_context(|| format!("Invalid --bind address '{}'", bind))?,
                None => config.bind_address()?,
            };

            let state = AppState::new(build_responder(&config), run_command);
            folio_presentation::serve(state, addr).await?;
        }
        Commands::Terminal { no_boot } => {
            let repl_config = ReplConfig {
                show_boot: !no_boot,
                typing_delay: config.terminal.typing_delay(),
                history_file: config.terminal.history_file.as_ref().map(PathBuf::from),
            };
            TerminalRepl::new(run_command)
                .with_config(repl_config)
                .run()
                .await?;
        }
        Commands::Ask { message, quiet } => {
            let responder = build_responder(&config);
            let message = message.join(" ");

            let progress: Box<dyn FallbackProgress> = if quiet {
                Box::new(NoProgress)
            } else if cli.verbose > 0 {
                Box::new(SimpleProgress)
            } else {
                Box::new(FallbackSpinner::new())
            };

            let result = responder
                .execute_with_progress(&message, progress.as_ref())
                .await;
            // Spinner must be gone before anything is printed
            drop(progress);

            match result {
                Ok(reply) => println!("{}", ConsoleFormatter::format_reply(&reply)),
                Err(e) => {
                    eprint!("{}", ConsoleFormatter::format_error(&e));
                    std::process::exit(1);
                }
            }
        }
        Commands::Run { line } => {
            let outcome = run_command.execute(&line.join(" ")).await;
            if !outcome.is_clear() {
                println!("{}", ConsoleFormatter::format_outcome(&outcome));
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins if set.
fn init_tracing(verbose: u8, command: &Commands) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, command)));

    log_subscriber(filter, std::io::stderr).init();
}

fn log_level(verbose: u8, command: &Commands) -> &'static str {
    // The server logs requests by default
    let floor = match command {
        Commands::Serve { .. } => 1,
        _ => 0,
    };

    match verbose.max(floor) {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Log lines go to `writer` so that stdout carries only replies
fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Wire the OpenRouter gateway into the chat router
fn build_responder(config: &FileConfig) -> RespondToVisitorUseCase {
    let gateway = OpenRouterGateway::from_config(&config.provider);
    if !gateway.has_credential() {
        warn!(
            "No API key found in ${}; only canned answers will work",
            config.provider.api_key_env
        );
    }
    RespondToVisitorUseCase::new(Arc::new(gateway), config.router_settings())
}

/// Copy of the config safe to print
fn redacted(config: &FileConfig) -> FileConfig {
    let mut config = config.clone();
    if config.provider.api_key.is_some() {
        config.provider.api_key = Some("********".to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_level_floor_for_serve() {
        let serve = Commands::Serve { bind: None };
        let ask = Commands::Ask {
            message: vec!["hi".to_string()],
            quiet: false,
        };

        assert_eq!(log_level(0, &serve), "info");
        assert_eq!(log_level(0, &ask), "warn");
        assert_eq!(log_level(2, &ask), "debug");
        assert_eq!(log_level(5, &serve), "trace");
    }

    #[test]
    fn test_logs_go_to_the_given_writer() {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = log_subscriber(EnvFilter::new("warn"), move || sink.clone());

        tracing::subscriber::with_default(subscriber, || {
            info!("hidden");
            warn!("Model A failed");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Model A failed"));
        assert!(!output.contains("hidden"));
    }
}
