//! File-backed tracing setup. The terminal UI owns stdout and stderr while it
//! runs, so log lines go to a plain file in the data directory instead.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILE_NAME;

const DEFAULT_FILTER: &str = "pet_clinic_manager=info";

/// Install the global subscriber writing to `dir/pet-clinic.log`. Writes are
/// synchronous; there is no background flushing thread.
pub fn init(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).context("failed to create log directory")?;

    let (prefix, suffix) = LOG_FILE_NAME
        .rsplit_once('.')
        .ok_or_else(|| anyhow!("log file name needs an extension"))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(prefix)
        .filename_suffix(suffix)
        .build(dir)
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("failed to install log subscriber")
}
