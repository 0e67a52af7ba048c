//! sage-theme binary entrypoint kept minimal. The pipeline lives in the library.

use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use sage_theme::args::{Args, determine_log_level, process_args};
use tracing_subscriber::fmt::time::UtcTime;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing for this run.
///
/// Inputs:
/// - `args`: Parsed arguments; `--log-file`, `--log-level`, `--verbose` and `--no-color` apply.
///
/// Output:
/// - Installs the global subscriber.
///
/// Details:
/// - `RUST_LOG` overrides the computed level.
/// - With `--log-file` logs are appended through a non-blocking writer whose
///   guard lives in [`LOG_GUARD`]; if the file cannot be opened logging falls
///   back to stderr.
fn init_logging(args: &Args) {
    let level = determine_log_level(args);
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level))
    };

    let file_error = match &args.log_file {
        Some(log_path) => match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(UtcTime::rfc_3339())
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
                return;
            }
            Err(e) => Some(e),
        },
        None => None,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_ansi(!args.no_color)
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .init();
    if let Some(e) = file_error {
        tracing::warn!(error = %e, "failed to open log file; using stderr");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sage-theme starting");
    match process_args(&args) {
        Ok(()) => {
            tracing::info!("sage-theme finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "sage-theme failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
