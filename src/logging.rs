//! File logging for the binary.
//!
//! Stdout belongs to the spinner, so logs go to `<cache dir>/age-op/age-op.log` and only when
//! `AGE_OP_LOG` holds a filter directive (e.g. `AGE_OP_LOG=debug`).

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "AGE_OP_LOG";
const LOG_FILE_NAME: &str = "age-op.log";

/// Installs the file subscriber if requested. Failures leave logging disabled.
///
/// The returned guard must live until exit so buffered lines are flushed.
pub fn init() -> Option<WorkerGuard> {
    let directive = std::env::var(LOG_ENV).ok()?;
    let dir = log_dir()?;
    init_file_logging(&directive, &dir).ok()
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("age-op"))
}

fn init_file_logging(directive: &str, dir: &Path) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(directive)?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(guard)
}
