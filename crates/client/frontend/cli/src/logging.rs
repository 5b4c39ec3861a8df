//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file instead of
//! stderr.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "slot.log";

/// Install a file-only subscriber filtered by `RUST_LOG` (default `info`).
///
/// Keep the returned guard alive for the lifetime of the process; dropping it
/// flushes and stops the background writer.
///
/// The directory comes from `SLOT_LOG_DIR` when set, otherwise from the
/// platform cache directory.
pub fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory(std::env::var_os("SLOT_LOG_DIR").map(PathBuf::from))
        .context("no usable log directory")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

/// Resolve the log directory, preferring an explicit override.
pub fn log_directory(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Some(dir);
    }
    ProjectDirs::from("", "", "slot").map(|dirs| logs_under(dirs.cache_dir()))
}

fn logs_under(base: &Path) -> PathBuf {
    base.join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = log_directory(Some(dir.path().to_path_buf()));
        assert_eq!(resolved.as_deref(), Some(dir.path()));
    }

    #[test]
    fn empty_override_falls_back_to_platform_dir() {
        let resolved = log_directory(Some(PathBuf::new()));
        if let Some(path) = resolved {
            assert!(path.ends_with("logs"));
        }
    }
}
