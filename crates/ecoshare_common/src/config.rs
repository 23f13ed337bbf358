//! EcoShare configuration.
//!
//! Config file: $ECOSHARE_CONFIG, ~/.config/ecoshare/config.toml or
//! /etc/ecoshare/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the config file location
pub const CONFIG_ENV: &str = "ECOSHARE_CONFIG";

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Where the static advice data comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Advice catalog TOML; builtin when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Description suggestions TOML; builtin when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Print JSON instead of text
    #[serde(default)]
    pub json: bool,
}

/// Main EcoShare configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcoshareConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl EcoshareConfig {
    /// Default user config path: ~/.config/ecoshare/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home = std::env::var("HOME").context("Cannot determine home directory")?;
                Path::new(&home).join(".config")
            }
        };

        Ok(config_dir.join("ecoshare").join("config.toml"))
    }

    /// System config path: /etc/ecoshare/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/ecoshare/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. $ECOSHARE_CONFIG (must exist when set)
    /// 2. User config (~/.config/ecoshare/config.toml)
    /// 3. System config (/etc/ecoshare/config.toml)
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&explicit));
        }

        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: EcoshareConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.resolve_relative_paths(path);
        Ok(config)
    }

    /// Catalog paths in a config file are relative to that file
    fn resolve_relative_paths(&mut self, config_path: &Path) {
        let Some(base) = config_path.parent() else {
            return;
        };
        for path in [&mut self.catalog.path, &mut self.catalog.descriptions_path]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
