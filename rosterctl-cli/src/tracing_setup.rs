//! Tracing setup for rosterctl
//!
//! Usage:
//!   rosterctl --debug list             # Debug logging to stderr
//!   rosterctl --log-file /tmp/r.log    # Send logs to a file
//!   RUST_LOG=rosterctl_core=debug ...  # Fine-grained log control
//!
//! The interactive table always logs to a file so output never lands on the
//! alternate screen.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Filter directive from the config file, below `debug` in priority
    pub level: Option<String>,
    /// Append logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if self.debug {
                EnvFilter::new("debug")
            } else {
                self.level
                    .as_deref()
                    .and_then(|level| EnvFilter::try_new(level).ok())
                    .unwrap_or_else(|| EnvFilter::new("info"))
            }
        })
    }
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = config.filter();

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(config.debug)
                .compact()
                .try_init()
                .map_err(|err| anyhow!(err))
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(config.debug) // Show targets in debug mode
            .compact()
            .try_init()
            .map_err(|err| anyhow!(err)),
    }
}
