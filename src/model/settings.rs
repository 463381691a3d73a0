//! Tool settings loaded from `config.toml`

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::utils::path::expand_tilde;

/// Main settings structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Locations of the managed script and the Oh My Zsh installation
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PathsConfig {
    /// Startup script to manage (defaults to `~/.zshrc`)
    #[serde(default)]
    pub rc_file: Option<String>,
    /// Oh My Zsh installation (defaults to `$ZSH`, then `~/.oh-my-zsh`)
    #[serde(default)]
    pub oh_my_zsh_dir: Option<String>,
}

/// Output options for the serializer
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Write aliases and exports sorted by name instead of first-seen order
    #[serde(default)]
    pub sort_alphabetically: bool,
}

/// Logging options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    /// Parsed level; unknown names fall back to `Warn`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Warn)
    }
}

impl PathsConfig {
    pub fn rc_file_path(&self) -> PathBuf {
        self.rc_file
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(crate::model::ShellConfig::default_path)
    }

    pub fn oh_my_zsh_path(&self) -> PathBuf {
        self.oh_my_zsh_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(crate::discovery::default_oh_my_zsh_dir)
    }
}

impl Settings {
    /// Get the zshcfg configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("zshcfg")
    }

    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load settings from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific file, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
