//! Logger setup
//!
//! The TUI owns the terminal, so in interactive mode log lines go to a file
//! under the data directory. One-shot commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "ARTGRID_LOG";

/// File name of the interactive-mode log
pub const LOG_FILE: &str = "artgrid.log";

/// Where log records are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global logger
///
/// `default_filter` applies when `ARTGRID_LOG` is unset.
pub fn init(default_filter: &str, target: LogTarget) -> Result<()> {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter));
    builder.format_timestamp_secs();

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }

    builder.try_init().context("Logger already initialized")
}
