//! Configuration file handling.
//!
//! Reads from `~/.config/kpnav/kpnav.toml`

use crate::navigator::DisplayOptions;
use crate::session::DEFAULT_MAX_ATTEMPTS;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Password attempts before giving up on an existing database.
    #[serde(default = "default_max_password_attempts")]
    pub max_password_attempts: u32,
    /// Whether entry menus show the username next to the title.
    #[serde(default = "default_show_usernames")]
    pub show_usernames: bool,
    /// Group names to leave out of the group menu.
    #[serde(default)]
    pub hidden_groups: Vec<String>,
}

fn default_max_password_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_show_usernames() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_password_attempts: default_max_password_attempts(),
            show_usernames: default_show_usernames(),
            hidden_groups: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the config file.
    ///
    /// If `custom_path` is provided, load from that path and fail if it is
    /// missing. Otherwise read the default location, falling back to the
    /// defaults when there is no file (nothing is written).
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match custom_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        Self::load_from(&config_path)
    }

    /// Read and parse the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse TOML text, clamping out-of-range values.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        if config.max_password_attempts == 0 {
            tracing::warn!("max_password_attempts must be at least 1, using 1");
            config.max_password_attempts = 1;
        }
        Ok(config)
    }

    /// Options for the navigation menus.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_usernames: self.show_usernames,
            hidden_groups: self.hidden_groups.clone(),
        }
    }

    /// Get the path to the default config file.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kpnav").join("kpnav.toml"))
    }
}
