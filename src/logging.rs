//! Logging setup for applications built on this crate.
//!
//! This module provides:
//! - A `tracing-subscriber` fmt subscriber with an `EnvFilter`
//! - Optional per-run log files written through a non-blocking appender
//! - Pruning of old per-run log files

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{Error, Result};

/// Default log filter directive, overridden by `RUST_LOG`.
pub const DEFAULT_LOG_FILTER: &str = "jquants_rs=info";

/// Number of per-run log files kept by [`init_logging`].
pub const MAX_LOG_FILES: usize = 10;

const LOG_FILE_PREFIX: &str = "app_";
const LOG_FILE_SUFFIX: &str = ".log";

/// Initialize the global tracing subscriber.
///
/// With no `log_dir`, events go to stdout. Otherwise a new file
/// `app_YYYY-MM-DD_HH-MM-SS.log` is created in `log_dir` for this run, and
/// all but the newest [`MAX_LOG_FILES`] run logs are deleted.
///
/// Keep the returned guard alive for the lifetime of the program; dropping
/// it flushes and stops the file writer. A failed cleanup is logged and does
/// not fail initialization.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init()
            .map_err(|e| Error::Config(format!("Failed to set global subscriber: {}", e)))?;
        return Ok(None);
    };

    fs::create_dir_all(log_dir)?;
    let file_name = log_file_name();
    let file_appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to set global subscriber: {}", e)))?;

    info!(path = %log_dir.join(&file_name).display(), "Logger initialized");
    prune_run_logs(log_dir);

    Ok(Some(guard))
}

/// Run [`cleanup_old_logs`] with the default retention, logging any failure.
///
/// Returns the number of files deleted.
fn prune_run_logs(log_dir: &Path) -> usize {
    match cleanup_old_logs(log_dir, MAX_LOG_FILES) {
        Ok(removed) => removed.len(),
        Err(e) => {
            warn!(path = %log_dir.display(), error = %e, "Failed to clean up old log files");
            0
        }
    }
}

fn log_file_name() -> String {
    format!(
        "{}{}{}",
        LOG_FILE_PREFIX,
        Local::now().format("%Y-%m-%d_%H-%M-%S"),
        LOG_FILE_SUFFIX
    )
}

/// Delete all but the newest `keep` run logs in `log_dir`.
///
/// Run logs are the `app_*.log` files; their timestamped names sort
/// chronologically. Files that cannot be removed are logged and skipped.
/// Returns the paths that were deleted.
pub fn cleanup_old_logs(log_dir: &Path, keep: usize) -> Result<Vec<PathBuf>> {
    let mut logs: Vec<String> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_SUFFIX))
        .collect();

    if logs.len() <= keep {
        return Ok(Vec::new());
    }

    logs.sort();
    let excess = logs.len() - keep;

    let mut removed = Vec::with_capacity(excess);
    for name in logs.into_iter().take(excess) {
        let path = log_dir.join(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "Deleted old log file");
                removed.push(path);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove old log file"),
        }
    }

    Ok(removed)
}
