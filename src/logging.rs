//! Tracing setup. The terminal belongs to the TUI, so log lines go to a plain
//! text file in the data directory instead of stderr.

use std::fs;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppPaths;

/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `paths.log_path`.
pub fn init(paths: &AppPaths) -> Result<()> {
    fs::create_dir_all(&paths.data_dir).context("failed to create data directory")?;

    let appender = tracing_appender::rolling::never(&paths.data_dir, paths.log_file_name());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
