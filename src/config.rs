//! Configuration for the portfolio assistant.
//!
//! Stored as TOML at `{workspace_root}/config/config.toml`, where the
//! workspace root is `$PORTFOLIO_HOME` or the OS data directory
//! (`PortfolioAssistant` under `directories::BaseDirs::data_dir`).

use crate::chat::quick_questions::default_quick_questions;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HOME_ENV_VAR: &str = "PORTFOLIO_HOME";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileSettings,
    #[serde(default)]
    pub pacing: PacingSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub remote: RemoteSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSettings {
    /// Profile document path; relative paths resolve against the working directory.
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
        }
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("data").join("data.json")
}

/// Bounds of the randomized "thinking" delay, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacingSettings {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

const fn default_min_delay_ms() -> u64 {
    800
}

const fn default_max_delay_ms() -> u64 {
    1600
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSettings {
    #[serde(default = "default_quick_questions")]
    pub quick_questions: Vec<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            quick_questions: default_quick_questions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RemoteSettings {
    /// Whether the remote assistant extension point may be invoked.
    #[serde(default)]
    pub remote_allowed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Rotating log files are written here when set; otherwise stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

/// Returns the root directory where the assistant stores its files.
///
/// Order of precedence:
/// 1. `PORTFOLIO_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("PortfolioAssistant"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<PathBuf> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(path)
}
