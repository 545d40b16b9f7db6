//! Logging and tracing initialization.
//!
//! Events always go to stderr. When a log directory is configured, a
//! second JSONL layer writes daily-rotated files there; the returned
//! guard must stay alive for the duration of the process so buffered
//! events are flushed on exit.

use anyhow::Context;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces errors only and
/// each `-v` steps the level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
pub fn init(filter: EnvFilter, log_dir: Option<&Utf8Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir.as_std_path())
                .with_context(|| format!("failed to create log directory {dir}"))?;
            let appender = tracing_appender::rolling::daily(dir.as_std_path(), "essay-rank.jsonl");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}
