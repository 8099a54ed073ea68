use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use catprint::cli::{self, Cli};
use catprint::config::Settings;
use catprint::models;

/// Initializes tracing from the logging settings.
///
/// With a log directory configured, events go to a daily rolling file;
/// otherwise they go to stderr so stdout stays clean for command output.
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(settings: &Settings) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.to_lowercase()));

    match &settings.logging.directory {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "catprint");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                // Disable ANSI colors for cleaner log files
                .with_ansi(false)
                .with_line_number(true)
                .with_file(true)
                .with_thread_ids(true)
                .with_target(false)
                .with_env_filter(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_env_filter(filter)
                .init();
            None
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let settings = Settings::load(&args.config_dir)
        .with_context(|| format!("Failed to load settings from {}", args.config_dir.display()))?;

    let guard = init_logging(&settings);
    debug!("catprint starting up");
    debug!("Settings loaded: {:?}", settings);

    let registry = models::registry();
    debug!("Model registry ready with {} models", registry.len());

    let outcome = cli::run(&args.command, &settings, registry)?;

    // Flush the file writer before exiting
    drop(guard);
    std::process::exit(outcome.exit_code());
}
