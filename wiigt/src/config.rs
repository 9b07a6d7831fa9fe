//! Configuration module for the wiigt CLI.
//!
//! This module handles locating and loading the optional `wiigt.toml`
//! settings file.

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WiigtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "wiigt.toml";

/// How tokens are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND literal` line per token.
    #[default]
    Text,
    /// A JSON array of sources and their tokens.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Default output format for `tokens`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether the terminating `EOF` token is printed.
    #[serde(default = "default_true")]
    pub show_eof: bool,

    /// Whether `check` fails when it finds illegal tokens.
    #[serde(default = "default_true")]
    pub deny_illegal: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            format: OutputFormat::default(),
            show_eof: true,
            deny_illegal: true,
        }
    }
}

impl Config {
    /// Load configuration, returning it with the file it came from.
    ///
    /// An explicit path must exist. Otherwise searches in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration and no path if no config file is found.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };
        match path {
            Some(path) => Ok((Self::load_from_path(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WiigtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("wiigt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("wiigt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
