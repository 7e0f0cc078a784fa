//! Tracing subscriber setup.
//!
//! The interactive shell owns stdout, so by default logs go to a daily
//! rolling file under `$STUDYDESK_HOME/logs`. `RUST_LOG` wins over the
//! configured filter.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, paths};

const LOG_FILE_PREFIX: &str = "studydesk.log";

/// Installs the global subscriber.
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// lifetime of the process so buffered lines are flushed on exit.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(&config.filter);

    if !config.file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
        return Ok(None);
    }

    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(Some(guard))
}

/// `RUST_LOG` if set and valid, else the configured directive, else `info`.
fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_falls_back_to_info() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = build_filter("studydesk=loud");
        assert_eq!(filter.to_string(), "info");
    }
}
