use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Overrides the configured `log_level`, e.g. `MOODWAVE_LOG=moodwave=debug`
pub const LOG_ENV: &str = "MOODWAVE_LOG";

pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("moodwave")
        .join("logs")
}

pub fn filter(config_level: &str) -> EnvFilter {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config_level).unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Daily rolling file log. The TUI owns the terminal, so nothing goes to stdout.
/// Keep the guard alive until exit or buffered lines are lost.
pub fn init(config_level: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "moodwave.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(config_level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(guard)
}
