//! File logging
//!
//! The terminal belongs to the UI, so log records go to a file under the
//! config directory. `NETEDIT_LOG` overrides the configured level using the
//! usual env_logger filter syntax.

use crate::config::Config;
use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use std::fs::{self, OpenOptions};

pub fn init(config: &Config) -> Result<()> {
    let Some(log_path) = Config::log_path() else {
        return Ok(());
    };

    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    Builder::new()
        .filter_level(config.log_level_filter())
        .parse_env("NETEDIT_LOG")
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!(
        "netedit-tui v{} starting (keyboard policy: {})",
        env!("CARGO_PKG_VERSION"),
        config.keyboard_policy.label()
    );
    Ok(())
}
