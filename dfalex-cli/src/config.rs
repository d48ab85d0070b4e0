//! Configuration module for the dfalex CLI.
//!
//! This module handles loading, saving, and validating the `dfalex.toml`
//! configuration file.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use dfalex_lex::Lexicon;

use crate::commands::common::OutputFormat;
use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "dfalex.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Lexicon extensions.
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// Token dump settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default dump format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Fail when any error token is produced.
    #[serde(default)]
    pub deny_errors: bool,
}

/// Lexicon extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexiconConfig {
    /// Reserved words added on top of the default keyword set.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/dfalex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path.
    #[cfg(test)]
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CliError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the lexicon described by this configuration.
    ///
    /// Every extra keyword must itself scan as a single identifier,
    /// otherwise the scanner could never produce it.
    pub fn lexicon(&self) -> Result<Lexicon> {
        if let Some(bad) = self.lexicon.keywords.iter().find(|k| !is_identifier(k)) {
            return Err(CliError::Validation(format!(
                "keyword `{}` is not a valid identifier",
                bad
            )));
        }
        Ok(Lexicon::new().with_keywords(self.lexicon.keywords.iter().cloned()))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("dfalex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("dfalex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}
