use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, RosterError};

/// Endpoint serving the member list
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Overrides `source.endpoint`
pub const ENDPOINT_ENV: &str = "ROSTERCTL_ENDPOINT";
/// Overrides the config file location
pub const CONFIG_ENV: &str = "ROSTERCTL_CONFIG";

/// Configuration for rosterctl, read from ~/.rosterctl/config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (e.g. "info", "rosterctl=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Log file for the interactive table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl RosterConfig {
    /// Load config from `$ROSTERCTL_CONFIG` or ~/.rosterctl/config.toml
    ///
    /// A missing file is not an error: the defaults point at the public
    /// endpoint. Environment overrides are applied before validation.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        let mut config = if config_path.exists() {
            Self::parse_file(&config_path)?
        } else {
            debug!("No config at {:?}, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a specific file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
        let mut config: Self = toml::from_str(&content).map_err(|e| {
            RosterError::config(format!("invalid TOML in {}: {}", path.display(), e))
        })?;
        config.expand_paths();
        Ok(config)
    }

    /// Replace the endpoint (e.g. from `--endpoint`) and re-validate
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> Result<()> {
        self.source.endpoint = endpoint.into().trim().to_string();
        self.validate()
    }

    /// Config file path: `$ROSTERCTL_CONFIG` or ~/.rosterctl/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        config_dir().join("config.toml")
    }

    /// Default log file for the interactive table
    pub fn default_log_file() -> PathBuf {
        config_dir().join("rosterctl.log")
    }

    /// Configured log file, or the default one
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_file)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                debug!("{} overrides endpoint", ENDPOINT_ENV);
                self.source.endpoint = endpoint.trim().to_string();
            }
        }
    }

    /// Expand a leading `~/` in the log file path
    fn expand_paths(&mut self) {
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_home(file));
        }
    }

    /// Reject an endpoint that can never be fetched
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.source.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(RosterError::config(format!(
                "source.endpoint must be an http(s) URL, got {:?}",
                self.source.endpoint
            )));
        }
        if self.source.timeout_secs == Some(0) {
            return Err(RosterError::config("source.timeout_secs must be positive"));
        }
        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RosterError::config(format!("failed to serialize config: {}", e)))
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
        }
        fs::write(path, self.to_toml()?).map_err(|e| RosterError::io(path, e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }
}

/// ~/.rosterctl (falls back to ./.rosterctl without a home directory)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rosterctl")
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
